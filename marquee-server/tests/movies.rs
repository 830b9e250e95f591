use anyhow::Result;
use axum::http::StatusCode;
use serde_json::{Value, json};

#[path = "support/mod.rs"]
mod support;

use support::{IMAGE_BASE, build_test_app};

const SEARCH_PATH: &str = "/3/search/movie";

fn search_item(id: u64, popularity: f64, poster: Option<&str>) -> Value {
    json!({
        "id": id,
        "title": format!("Movie {id}"),
        "original_title": format!("Original {id}"),
        "release_date": "1999-03-31",
        "poster_path": poster,
        "vote_average": 7.9,
        "popularity": popularity
    })
}

fn matrix_record() -> Value {
    json!({
        "id": 603,
        "title": "The Matrix",
        "original_title": "The Matrix",
        "release_date": "1999-03-30",
        "runtime": 136,
        "overview": "A hacker learns the truth about reality.",
        "imdb_id": "tt0133093",
        "vote_average": 8.2,
        "poster_path": "/matrix.jpg",
        "budget": 63000000,
        "revenue": 463517383,
        "genres": [{ "id": 28, "name": "Action" }, { "id": 878, "name": "Science Fiction" }],
        "credits": {
            "cast": [
                { "name": "Keanu Reeves" },
                { "name": "Laurence Fishburne" },
                { "name": "Carrie-Anne Moss" },
                { "name": "Hugo Weaving" },
                { "name": "Joe Pantoliano" },
                { "name": "Marcus Chong" }
            ],
            "crew": [
                { "name": "Bill Pope", "job": "Director of Photography" },
                { "name": "Lana Wachowski", "job": "Director" }
            ]
        },
        "videos": {
            "results": [
                { "key": "teaser1", "site": "YouTube", "type": "Teaser" },
                { "key": "vimeo1", "site": "Vimeo", "type": "Trailer" },
                { "key": "vKQi3bBA1y8", "site": "YouTube", "type": "Trailer" }
            ]
        },
        "external_ids": { "imdb_id": "tt0133093" }
    })
}

#[tokio::test]
async fn search_without_topic_is_rejected_before_upstream() -> Result<()> {
    let app = build_test_app().await?;

    let response = app.server.get("/api/search_movies").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());

    let response = app
        .server
        .get("/api/search_movies")
        .add_query_param("topic", "   ")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(app.upstream.hits(), 0);
    Ok(())
}

#[tokio::test]
async fn search_drops_posterless_results() -> Result<()> {
    let app = build_test_app().await?;
    app.upstream.respond(
        SEARCH_PATH,
        StatusCode::OK,
        json!({
            "page": 1,
            "results": [
                search_item(603, 80.0, Some("/matrix.jpg")),
                search_item(604, 95.0, None)
            ]
        })
        .to_string(),
    );

    let response = app
        .server
        .get("/api/search_movies")
        .add_query_param("topic", "matrix")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([{
        "id": 603,
        "title": "Movie 603",
        "original_title": "Original 603",
        "year": "1999",
        "poster_url": format!("{IMAGE_BASE}/matrix.jpg"),
        "rating": 7.9
    }]));

    let queries = app.upstream.queries();
    assert_eq!(queries.len(), 1);
    let (path, query) = &queries[0];
    assert_eq!(path, SEARCH_PATH);
    assert_eq!(query.get("query").map(String::as_str), Some("matrix"));
    assert_eq!(query.get("api_key").map(String::as_str), Some("test-key"));
    assert_eq!(query.get("language").map(String::as_str), Some("en-US"));
    Ok(())
}

#[tokio::test]
async fn search_trims_topic_before_forwarding() -> Result<()> {
    let app = build_test_app().await?;
    app.upstream
        .respond(SEARCH_PATH, StatusCode::OK, json!({ "results": [] }).to_string());

    let response = app
        .server
        .get("/api/search_movies")
        .add_query_param("topic", "  blade runner ")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
    let queries = app.upstream.queries();
    assert_eq!(
        queries[0].1.get("query").map(String::as_str),
        Some("blade runner")
    );
    Ok(())
}

#[tokio::test]
async fn search_with_repeated_topic_uses_first_value() -> Result<()> {
    let app = build_test_app().await?;
    app.upstream
        .respond(SEARCH_PATH, StatusCode::OK, json!({ "results": [] }).to_string());

    let response = app
        .server
        .get("/api/search_movies")
        .add_query_param("topic", "alien")
        .add_query_param("topic", "heat")
        .await;

    response.assert_status_ok();
    let queries = app.upstream.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].1.get("query").map(String::as_str), Some("alien"));
    Ok(())
}

#[tokio::test]
async fn search_ranks_by_popularity_and_caps_results() -> Result<()> {
    let app = build_test_app().await?;
    let results: Vec<Value> = (1..=40)
        .map(|id| search_item(id, id as f64, Some("/p.jpg")))
        .collect();
    app.upstream.respond(
        SEARCH_PATH,
        StatusCode::OK,
        json!({ "results": results }).to_string(),
    );

    let response = app
        .server
        .get("/api/search_movies")
        .add_query_param("topic", "movie")
        .await;

    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(body.len(), 30);
    let ids: Vec<u64> = body.iter().filter_map(|item| item["id"].as_u64()).collect();
    assert_eq!(ids.first(), Some(&40));
    assert_eq!(ids.last(), Some(&11));
    assert!(ids.windows(2).all(|pair| pair[0] > pair[1]));
    Ok(())
}

#[tokio::test]
async fn search_upstream_failure_is_500_with_empty_list() -> Result<()> {
    let app = build_test_app().await?;
    app.upstream.respond(
        SEARCH_PATH,
        StatusCode::SERVICE_UNAVAILABLE,
        json!({ "status_message": "Service offline" }).to_string(),
    );

    let response = app
        .server
        .get("/api/search_movies")
        .add_query_param("topic", "matrix")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!([]));
    Ok(())
}

#[tokio::test]
async fn details_are_normalized_and_overlaid() -> Result<()> {
    let app = build_test_app().await?;
    app.upstream
        .respond("/3/movie/603", StatusCode::OK, matrix_record().to_string());

    let response = app.server.get("/api/movie_details/603").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], 603);
    assert_eq!(body["title"], "The Matrix");
    assert_eq!(body["year"], "1999");
    assert_eq!(body["runtime"], 136);
    assert_eq!(body["external_id"], "tt0133093");
    assert_eq!(
        body["trailer_url"],
        "https://www.youtube.com/watch?v=vKQi3bBA1y8"
    );
    assert_eq!(body["rating"], 8.2);
    assert_eq!(body["director"], "Lana Wachowski");
    assert_eq!(
        body["cast"],
        json!([
            "Keanu Reeves",
            "Laurence Fishburne",
            "Carrie-Anne Moss",
            "Hugo Weaving",
            "Joe Pantoliano"
        ])
    );
    assert_eq!(body["genres"], json!(["Action", "Science Fiction"]));
    assert_eq!(body["poster_url"], format!("{IMAGE_BASE}/matrix.jpg"));
    assert_eq!(body["scenography"], "N/A");
    assert_eq!(body["music"], "N/A");

    let production = body["production_details"].as_str().unwrap_or_default();
    assert!(production.ends_with(" Budget: $63,000,000. Box office: $463,517,383."));

    let awards = body["awards"].as_array().cloned().unwrap_or_default();
    assert!(!awards.is_empty());
    assert_ne!(awards, vec![json!("N/A")]);

    assert_eq!(
        body["availability"],
        json!([
            { "platform": "Netflix", "link": "https://www.netflix.com", "type": "subscription" },
            { "platform": "Amazon Prime Video", "link": "https://www.primevideo.com", "type": "subscription" },
            { "platform": "Apple TV", "link": "https://tv.apple.com", "type": "rent" }
        ])
    );

    let queries = app.upstream.queries();
    assert_eq!(
        queries[0].1.get("append_to_response").map(String::as_str),
        Some("videos,credits,external_ids")
    );
    Ok(())
}

#[tokio::test]
async fn details_with_budget_only_skip_box_office() -> Result<()> {
    let app = build_test_app().await?;
    app.upstream.respond(
        "/3/movie/42",
        StatusCode::OK,
        json!({ "id": 42, "title": "Indie", "budget": 1500, "revenue": 0 }).to_string(),
    );

    let response = app.server.get("/api/movie_details/42").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let production = body["production_details"].as_str().unwrap_or_default();
    assert!(production.ends_with(" Budget: $1,500."));
    assert!(!production.contains("Box office"));
    assert_eq!(body["trailer_url"], Value::Null);
    assert_eq!(body["director"], "N/A");
    assert_eq!(body["cast"], json!([]));
    assert_eq!(body["year"], "N/A");
    Ok(())
}

#[tokio::test]
async fn details_upstream_not_found_is_404() -> Result<()> {
    let app = build_test_app().await?;

    let response = app.server.get("/api/movie_details/999999").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert!(!body["error"].as_str().unwrap_or_default().contains("34"));
    assert_eq!(app.upstream.hits(), 1);
    Ok(())
}

#[tokio::test]
async fn details_null_record_is_404() -> Result<()> {
    let app = build_test_app().await?;
    app.upstream.respond("/3/movie/7", StatusCode::OK, "null");

    let response = app.server.get("/api/movie_details/7").await;

    response.assert_status_not_found();
    Ok(())
}

#[tokio::test]
async fn details_empty_record_is_404() -> Result<()> {
    let app = build_test_app().await?;
    app.upstream.respond("/3/movie/5", StatusCode::OK, "{}");

    let response = app.server.get("/api/movie_details/5").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn details_non_numeric_id_is_404_without_upstream_call() -> Result<()> {
    let app = build_test_app().await?;

    let response = app.server.get("/api/movie_details/abc").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert_eq!(app.upstream.hits(), 0);
    Ok(())
}
