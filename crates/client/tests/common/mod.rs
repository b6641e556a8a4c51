#![allow(dead_code)]

use cinecat_api::config::ServerConfig;
use cinecat_api::router::build_app_router;
use cinecat_api::state::AppState;
use cinecat_client::api::CatalogApi;

/// Start the real API on an ephemeral local port and return a client
/// pointed at it. The server task lives until the test runtime shuts down.
pub async fn spawn_api(seed_fixtures: bool) -> CatalogApi {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        seed_fixtures,
    };
    let state = AppState::from_config(config.clone());
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    CatalogApi::new(format!("http://{addr}"))
}

/// A client for a host where nothing is listening.
pub fn unreachable_api() -> CatalogApi {
    CatalogApi::new("http://127.0.0.1:1")
}
