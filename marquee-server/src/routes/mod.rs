use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{health_handler, movie_details_handler, search_movies_handler},
    infra::{app_state::AppState, cors::build_cors_layer},
};

pub const API_PREFIX: &str = "/api";

pub mod paths {
    pub const SEARCH_MOVIES: &str = "/search_movies";
    pub const MOVIE_DETAILS: &str = "/movie_details/{id}";
    pub const HEALTH: &str = "/health";
}

pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route(paths::SEARCH_MOVIES, get(search_movies_handler))
        .route(paths::MOVIE_DETAILS, get(movie_details_handler))
        .route(paths::HEALTH, get(health_handler))
}

/// Full application: API routes under `/api`, CORS and request tracing.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.config().cors);

    Router::new()
        .nest(API_PREFIX, create_api_router())
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
