use axum::http::{HeaderValue, Method, header};
use marquee_config::CorsConfig;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

/// Build the CORS layer from configuration.
///
/// A `*` entry (or an empty list) allows any origin. Credentials are only
/// advertised for explicit origin lists since browsers reject them alongside
/// a wildcard.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let wildcard = config.is_wildcard_included();

    let allow_origin = if wildcard {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    let mut layer = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([Method::GET, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([
            header::ACCEPT,
            header::CONTENT_TYPE,
        ]));

    if config.allow_credentials && !wildcard {
        layer = layer.allow_credentials(true);
    }

    layer
}
