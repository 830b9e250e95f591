use thiserror::Error;
use url::Url;

use super::models::{Config, CorsConfig, TmdbConfig};

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("{field} must be an absolute http(s) URL, got '{value}'")]
    InvalidUrl { field: &'static str, value: String },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    validate_tmdb(&config.tmdb, &mut warnings)?;
    validate_cors(&config.cors, &mut warnings);

    Ok(warnings)
}

fn validate_tmdb(
    tmdb: &TmdbConfig,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    require_http_url("TMDB_BASE_URL", &tmdb.base_url)?;
    require_http_url("TMDB_IMAGE_BASE_URL", &tmdb.image_base_url)?;

    if tmdb.language.trim().is_empty() {
        return Err(ConfigGuardRailError::Empty { field: "TMDB_LANG" });
    }

    // Startup continues without a key; every upstream call will be rejected.
    if !tmdb.has_api_key() {
        warnings.push_with_hint(
            "TMDB_API_KEY not set; upstream lookups will fail until it is configured",
            "Export TMDB_API_KEY or set tmdb.api_key in marquee.toml",
        );
    }

    Ok(())
}

fn validate_cors(cors: &CorsConfig, warnings: &mut ConfigWarnings) {
    if cors.allow_credentials && cors.is_wildcard_included() {
        warnings.push(
            "CORS credentials allowed alongside wildcard origin; browsers will reject such configuration",
        );
    }

    if cors.allowed_origins.is_empty() {
        warnings.push_with_hint(
            "CORS allow-list is empty; browsers on other origins cannot call the API",
            "Set CORS_ALLOWED_ORIGINS=* to allow any origin",
        );
    }
}

fn require_http_url(
    field: &'static str,
    value: &str,
) -> Result<(), ConfigGuardRailError> {
    let invalid = || ConfigGuardRailError::InvalidUrl {
        field,
        value: value.to_string(),
    };

    let parsed = Url::parse(value).map_err(|_| invalid())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(invalid()),
    }
}
