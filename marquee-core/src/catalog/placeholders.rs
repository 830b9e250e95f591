//! Static content for fields TMDB does not provide.
//!
//! Awards, fun facts, production narrative and streaming availability have no
//! upstream source yet. They live here as named constants so the gap stays
//! visible and can be swapped for a real provider in one place.

use marquee_model::{AvailabilityEntry, NOT_AVAILABLE};

/// What the normalizer reports before any overlay.
pub const UNAVAILABLE_AWARDS: &[&str] = &[NOT_AVAILABLE];
pub const UNAVAILABLE_FUN_FACTS: &[&str] = &[NOT_AVAILABLE];

/// Overlay applied to every detail response.
pub const FEATURED_AWARDS: &[&str] = &[
    "Academy Award nominee (sample data)",
    "Critics' Choice Award winner (sample data)",
];

pub const FEATURED_FUN_FACTS: &[&str] = &[
    "Several key scenes were filmed in a single continuous take (sample data)",
    "The score was recorded with a full live orchestra (sample data)",
];

pub const PRODUCTION_DETAILS_PLACEHOLDER: &str =
    "Detailed production information is not available from the metadata provider.";

/// `(platform, link, type)`
pub const STREAMING_AVAILABILITY: &[(&str, &str, &str)] = &[
    ("Netflix", "https://www.netflix.com", "subscription"),
    ("Amazon Prime Video", "https://www.primevideo.com", "subscription"),
    ("Apple TV", "https://tv.apple.com", "rent"),
];

pub fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn streaming_availability() -> Vec<AvailabilityEntry> {
    STREAMING_AVAILABILITY
        .iter()
        .map(|(platform, link, kind)| AvailabilityEntry::new(*platform, *link, *kind))
        .collect()
}
