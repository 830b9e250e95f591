use std::fmt;

use marquee_config::TmdbConfig;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{
    dto::{TmdbErrorBody, TmdbMovie, TmdbSearchPage},
    error::ProviderError,
};

/// Sub-resources embedded in a detail lookup so it costs one round trip.
pub const DETAIL_APPEND_TO_RESPONSE: &str = "videos,credits,external_ids";

const API_KEY_PARAM: &str = "api_key";
const LANGUAGE_PARAM: &str = "language";

/// Thin client over the TMDB v3 REST API.
///
/// Holds the server-side credential and response language; both are attached
/// to every request unless the caller supplies its own value for the key.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    image_base_url: String,
    api_key: Option<String>,
    language: String,
}

impl fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("api_key_configured", &self.api_key.is_some())
            .finish()
    }
}

impl TmdbClient {
    pub fn from_config(config: &TmdbConfig) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.clone(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn get_json<T>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));

        let overridden = |name: &str| params.iter().any(|(key, _)| *key == name);
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 2);
        if let Some(api_key) = self.api_key.as_deref()
            && !overridden(API_KEY_PARAM)
        {
            query.push((API_KEY_PARAM, api_key));
        }
        if !overridden(LANGUAGE_PARAM) {
            query.push((LANGUAGE_PARAM, self.language.as_str()));
        }
        query.extend_from_slice(params);

        debug!(endpoint = %endpoint, "TMDB request");
        let response = self.http.get(&url).query(&query).send().await?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice::<T>(&body)
                .map_err(|err| ProviderError::ParseError(err.to_string()));
        }

        let message = response
            .json::<TmdbErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| {
                format!("TMDB request failed with status {}", status)
            });

        match status.as_u16() {
            401 => Err(ProviderError::InvalidApiKey),
            404 => Err(ProviderError::NotFound),
            code => Err(ProviderError::ApiError {
                status: code,
                message,
            }),
        }
    }

    /// Single GET against `endpoint`. Failures are logged here, with the
    /// endpoint path, and handed back untouched; nothing is retried.
    pub async fn fetch<T>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        self.get_json(endpoint, params).await.inspect_err(|err| {
            warn!(endpoint = %endpoint, error = %err, "TMDB request failed");
        })
    }

    pub async fn search_movies(
        &self,
        keyword: &str,
    ) -> Result<TmdbSearchPage, ProviderError> {
        self.fetch("search/movie", &[("query", keyword)]).await
    }

    /// `Ok(None)` when upstream answered with a JSON `null` body or with a
    /// record that does not carry the requested id.
    pub async fn movie_details(
        &self,
        id: u64,
    ) -> Result<Option<TmdbMovie>, ProviderError> {
        let record: Option<TmdbMovie> = self
            .fetch(
                &format!("movie/{id}"),
                &[("append_to_response", DETAIL_APPEND_TO_RESPONSE)],
            )
            .await?;

        Ok(record.filter(|movie| {
            let usable = movie.id == id;
            if !usable {
                warn!(requested = id, received = movie.id, "discarding unusable TMDB record");
            }
            usable
        }))
    }
}
