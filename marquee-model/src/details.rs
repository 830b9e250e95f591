use crate::NOT_AVAILABLE;

/// Where a title can be watched. Serialized with a literal `type` key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvailabilityEntry {
    pub platform: String,
    pub link: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
}

impl AvailabilityEntry {
    pub fn new(
        platform: impl Into<String>,
        link: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            link: link.into(),
            kind: kind.into(),
        }
    }
}

/// Full movie record returned by the detail endpoint.
///
/// No field is ever omitted from the serialized form: anything the upstream
/// provider does not supply is `"N/A"`, `null` or an empty list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub year: String,
    pub runtime: Option<u32>,
    pub overview: String,
    /// IMDb identifier when the provider knows it.
    pub external_id: Option<String>,
    pub trailer_url: Option<String>,
    pub rating: Option<f64>,
    pub director: String,
    /// At most five names, billing order.
    pub cast: Vec<String>,
    pub genres: Vec<String>,
    pub poster_url: Option<String>,
    pub awards: Vec<String>,
    pub fun_facts: Vec<String>,
    pub production_details: String,
    pub scenography: String,
    pub music: String,
    pub availability: Vec<AvailabilityEntry>,
}

impl MovieDetail {
    /// A record with every field at its placeholder value.
    pub fn placeholder(id: u64) -> Self {
        Self {
            id,
            title: NOT_AVAILABLE.to_string(),
            original_title: NOT_AVAILABLE.to_string(),
            year: NOT_AVAILABLE.to_string(),
            runtime: None,
            overview: NOT_AVAILABLE.to_string(),
            external_id: None,
            trailer_url: None,
            rating: None,
            director: NOT_AVAILABLE.to_string(),
            cast: Vec::new(),
            genres: Vec::new(),
            poster_url: None,
            awards: Vec::new(),
            fun_facts: Vec::new(),
            production_details: NOT_AVAILABLE.to_string(),
            scenography: NOT_AVAILABLE.to_string(),
            music: NOT_AVAILABLE.to_string(),
            availability: Vec::new(),
        }
    }
}
