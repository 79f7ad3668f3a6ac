//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt::oneshot`,
//! no TCP listener involved.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use pokedex_api::config::ServerConfig;
use pokedex_api::router::build_app_router;
use pokedex_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_demo_data: false,
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState { pool };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::PUT, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw_json(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a record through the API and return its id.
pub async fn create(pool: &PgPool, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), 200, "create via {uri} failed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

pub async fn create_category(pool: &PgPool, name: &str) -> i64 {
    create(pool, "/api/v1/categories", serde_json::json!({ "name": name })).await
}

pub async fn create_country(pool: &PgPool, name: &str) -> i64 {
    create(pool, "/api/v1/countries", serde_json::json!({ "name": name })).await
}

pub async fn create_owner(pool: &PgPool, country_id: i64, last_name: &str) -> i64 {
    create(
        pool,
        &format!("/api/v1/countries/{country_id}/owners"),
        serde_json::json!({ "first_name": "Ash", "last_name": last_name, "gym": "Pallet" }),
    )
    .await
}

pub async fn create_pokemon(pool: &PgPool, owner_id: i64, category_id: i64, name: &str) -> i64 {
    create(
        pool,
        &format!("/api/v1/pokemon?owner_id={owner_id}&category_id={category_id}"),
        serde_json::json!({ "name": name, "birth_date": "2001-12-07" }),
    )
    .await
}

pub async fn create_reviewer(pool: &PgPool, last_name: &str) -> i64 {
    create(
        pool,
        "/api/v1/reviewers",
        serde_json::json!({ "first_name": "Alan", "last_name": last_name }),
    )
    .await
}

pub async fn create_review(
    pool: &PgPool,
    pokemon_id: i64,
    reviewer_id: i64,
    title: &str,
    rating: i32,
) -> i64 {
    create(
        pool,
        &format!("/api/v1/reviews?pokemon_id={pokemon_id}&reviewer_id={reviewer_id}"),
        serde_json::json!({ "title": title, "text": "Great pokemon", "rating": rating }),
    )
    .await
}

/// A pokemon with an owner (in a country) and a category. Returns
/// `(pokemon_id, owner_id, category_id)`.
pub async fn create_pokemon_fixture(pool: &PgPool, name: &str) -> (i64, i64, i64) {
    let country_id = create_country(pool, &format!("{name} land")).await;
    let owner_id = create_owner(pool, country_id, &format!("{name} trainer")).await;
    let category_id = create_category(pool, &format!("{name} type")).await;
    let pokemon_id = create_pokemon(pool, owner_id, category_id, name).await;
    (pokemon_id, owner_id, category_id)
}
