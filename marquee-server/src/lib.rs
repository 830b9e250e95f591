//! # Marquee Server
//!
//! Movie lookup gateway. Proxies keyword search and detail lookups to TMDB,
//! reshapes the payloads into a small stable schema and serves them as JSON:
//!
//! - `GET /api/search_movies?topic=<keyword>`
//! - `GET /api/movie_details/{id}`
//! - `GET /api/health`
//!
//! The server holds no state beyond an immutable [`Config`](marquee_config::Config)
//! and a shared HTTP client.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::create_app;
