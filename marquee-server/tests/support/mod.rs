#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use anyhow::{Context, Result, anyhow};
use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use axum_test::TestServer;
use marquee_config::{
    Config, ConfigMetadata, CorsConfig, ServerConfig, TmdbConfig,
};
use marquee_server::{AppState, create_app};
use serde_json::json;

pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Canned TMDB stand-in. Unknown paths answer 404 with a TMDB-style body.
#[derive(Clone, Default)]
pub struct Upstream {
    routes: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    hits: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<(String, HashMap<String, String>)>>>,
}

impl Upstream {
    pub fn respond(&self, path: &str, status: StatusCode, body: impl Into<String>) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.into()));
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<(String, HashMap<String, String>)> {
        self.queries.lock().unwrap().clone()
    }
}

async fn upstream_handler(
    State(upstream): State<Upstream>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    upstream.hits.fetch_add(1, Ordering::SeqCst);
    let path = uri.path().to_string();
    upstream.queries.lock().unwrap().push((path.clone(), query));

    let canned = upstream.routes.lock().unwrap().get(&path).cloned();
    match canned {
        Some((status, body)) => {
            (status, [("content-type", "application/json")], body).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            [("content-type", "application/json")],
            json!({
                "status_code": 34,
                "status_message": "The resource you requested could not be found."
            })
            .to_string(),
        )
            .into_response(),
    }
}

async fn spawn_upstream(upstream: Upstream) -> Result<String> {
    let app = Router::new()
        .fallback(upstream_handler)
        .with_state(upstream);
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .context("failed to bind stub upstream")?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}/3"))
}

pub fn test_config(base_url: String, api_key: Option<&str>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        tmdb: TmdbConfig {
            api_key: api_key.map(str::to_string),
            base_url,
            image_base_url: IMAGE_BASE.into(),
            language: "en-US".into(),
            timeout: Some(std::time::Duration::from_secs(5)),
        },
        cors: CorsConfig {
            allowed_origins: vec!["*".into()],
            allow_credentials: false,
        },
        metadata: ConfigMetadata::default(),
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub upstream: Upstream,
}

pub async fn build_test_app() -> Result<TestApp> {
    build_test_app_with_key(Some("test-key")).await
}

pub async fn build_test_app_with_key(api_key: Option<&str>) -> Result<TestApp> {
    let upstream = Upstream::default();
    let base_url = spawn_upstream(upstream.clone()).await?;

    let state = AppState::new(Arc::new(test_config(base_url, api_key)))
        .map_err(|err| anyhow!(err))?;
    let router = create_app(state);

    let server = TestServer::builder()
        .http_transport()
        .build(router)
        .map_err(|err| anyhow!(err))?;

    Ok(TestApp { server, upstream })
}
