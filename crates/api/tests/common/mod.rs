#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cinecat_api::config::ServerConfig;
use cinecat_api::router::build_app_router;
use cinecat_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(seed_fixtures: bool) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        seed_fixtures,
    }
}

/// Fresh state over the fixture catalog. Clone it to share one catalog
/// between several [`app`] calls.
pub fn seeded_state() -> AppState {
    AppState::from_config(test_config(true))
}

pub fn empty_state() -> AppState {
    AppState::from_config(test_config(false))
}

/// Build the full application router (same middleware stack as production)
/// over the given state.
pub fn app(state: &AppState) -> Router {
    build_app_router(state.clone(), &state.config)
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

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

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}
