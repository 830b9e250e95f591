pub mod detail;
pub mod money;
pub mod placeholders;
pub mod search;
pub mod trailer;

use marquee_model::NOT_AVAILABLE;

/// First four characters of a `YYYY-MM-DD` date, `"N/A"` when absent or empty.
pub fn release_year(release_date: Option<&str>) -> String {
    match release_date {
        Some(date) if !date.is_empty() => date.chars().take(4).collect(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn poster_url(image_base_url: &str, poster_path: Option<&str>) -> Option<String> {
    poster_path
        .filter(|path| !path.is_empty())
        .map(|path| format!("{image_base_url}{path}"))
}

pub(crate) fn text_or_placeholder(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}
