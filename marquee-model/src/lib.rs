//! Response models shared across Marquee crates.
//!
//! Every type here is transient: built from an upstream payload for a single
//! request and dropped once the response has been written.
#![allow(missing_docs)]

pub mod details;
pub mod error;
pub mod search;

pub use details::{AvailabilityEntry, MovieDetail};
pub use error::ErrorBody;
pub use search::SearchResultItem;

/// Placeholder used for any textual field the upstream provider left empty.
pub const NOT_AVAILABLE: &str = "N/A";
