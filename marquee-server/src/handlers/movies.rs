use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use marquee_core::{apply_featured_content, normalize_movie, rank_search_results};
use marquee_model::{MovieDetail, SearchResultItem};
use tracing::{debug, info};

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

const MISSING_TOPIC: &str = "Query parameter 'topic' is required";
const MALFORMED_QUERY: &str = "Malformed query string";
const MOVIE_NOT_FOUND: &str = "Movie not found";

const TOPIC_PARAM: &str = "topic";

/// First non-blank `topic` value, trimmed. Repeated keys are tolerated.
fn search_topic(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .filter(|(key, _)| key == TOPIC_PARAM)
        .map(|(_, value)| value.trim())
        .find(|topic| !topic.is_empty())
}

/// `GET /api/search_movies?topic=<keyword>`
///
/// Responds with at most thirty results ranked by popularity. Posterless
/// entries are dropped. An upstream failure degrades to `500 []`.
pub async fn search_movies_handler(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<(StatusCode, Json<Vec<SearchResultItem>>)> {
    let Query(pairs) = params.map_err(|rejection| {
        debug!(error = %rejection, "rejected search query");
        AppError::bad_request(MALFORMED_QUERY)
    })?;

    let topic = search_topic(&pairs)
        .ok_or_else(|| AppError::bad_request(MISSING_TOPIC))?;

    match state.tmdb.search_movies(topic).await {
        Ok(page) => {
            let results =
                rank_search_results(page.results, state.tmdb.image_base_url());
            info!(topic = %topic, results = results.len(), "movie search");
            Ok((StatusCode::OK, Json(results)))
        }
        Err(_) => Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(Vec::new()))),
    }
}

/// `GET /api/movie_details/{id}`
pub async fn movie_details_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> AppResult<Json<MovieDetail>> {
    let Path(id) = id.map_err(|rejection| {
        debug!(error = %rejection, "rejected movie id");
        AppError::not_found(MOVIE_NOT_FOUND)
    })?;

    // Upstream failures are already logged by the client; the caller only
    // ever sees the generic not-found body.
    let record = state
        .tmdb
        .movie_details(id)
        .await
        .map_err(|_| AppError::not_found(MOVIE_NOT_FOUND))?;

    let mut detail = normalize_movie(record.as_ref(), state.tmdb.image_base_url())
        .ok_or_else(|| AppError::not_found(MOVIE_NOT_FOUND))?;
    apply_featured_content(&mut detail, record.as_ref());

    Ok(Json(detail))
}
