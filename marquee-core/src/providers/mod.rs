pub mod dto;
pub mod error;
pub mod tmdb;

pub use error::ProviderError;
pub use tmdb::TmdbClient;
