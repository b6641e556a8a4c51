//! Application router shared by the `cinecat-api` binary and the tests.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the catalog [`Router`]: `/health` at the root, the catalog under
/// `/api`, and the middleware below wrapped around both.
///
/// Outermost first:
///
/// 1. CORS
/// 2. Assign an `x-request-id` to incoming requests
/// 3. Request/response tracing
/// 4. Echo the request ID on the response
/// 5. Request timeout (408)
/// 6. Panic recovery (500)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Innermost first. One `.layer` call per layer: `Cors` needs the inner
    // response body to be axum's `Body`.
    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// CORS for the configured browser origins.
///
/// Panics on an unparseable origin; this only runs at startup.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    fn config() -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["http://localhost:3000".to_string()],
            request_timeout_secs: 5,
            seed_fixtures: false,
        }
    }

    #[tokio::test]
    async fn full_stack_serves_health_with_request_id() {
        let config = config();
        let app = build_app_router(AppState::from_config(config.clone()), &config);

        let request = Request::builder()
            .uri("/health")
            .header("Origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:3000"
        );
    }
}
