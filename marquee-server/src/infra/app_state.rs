use std::{fmt, sync::Arc};

use marquee_config::Config;
use marquee_core::{ProviderError, TmdbClient};

/// Shared, read-only handler state. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tmdb: Arc<TmdbClient>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Result<Self, ProviderError> {
        let tmdb = Arc::new(TmdbClient::from_config(&config.tmdb)?);
        Ok(Self { config, tmdb })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
