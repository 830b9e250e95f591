//! Built-in defaults.

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
/// Prefix joined with a poster path (which starts with `/`).
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_TMDB_LANGUAGE: &str = "en-US";

pub const WILDCARD_ORIGIN: &str = "*";
