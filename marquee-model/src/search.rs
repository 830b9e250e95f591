/// One row of the search endpoint's response array.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResultItem {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    /// Four-character release year, or `"N/A"`.
    pub year: String,
    pub poster_url: Option<String>,
    pub rating: Option<f64>,
}
