//! Configuration library for Marquee.
//!
//! Values are resolved once at process start with the precedence
//! environment > TOML file > built-in defaults, then handed to the server as
//! an immutable [`Config`]. Nothing downstream reads the process environment.
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader};
pub use models::{Config, ConfigMetadata, CorsConfig, ServerConfig, TmdbConfig};
pub use sources::{EnvConfig, FileConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
