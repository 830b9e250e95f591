//! Core library for Marquee: talks to the TMDB API and reshapes its payloads
//! into the gateway's response models.
//!
//! - [`providers`] owns the HTTP boundary ([`TmdbClient`], [`ProviderError`])
//!   and the upstream wire types.
//! - [`catalog`] holds the pure transforms: search ranking, detail
//!   normalization, trailer selection and the static placeholder catalog.
#![allow(missing_docs)]

pub mod catalog;
pub mod providers;

pub use catalog::{
    detail::{apply_featured_content, normalize_movie},
    search::{MAX_SEARCH_RESULTS, rank_search_results},
    trailer::{resolve_trailer_key, trailer_url},
};
pub use providers::{ProviderError, TmdbClient};
