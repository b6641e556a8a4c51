use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the catalog started from the fixture data.
    pub seeded: bool,
    pub directors: usize,
    pub movies: usize,
}

/// GET /health -- liveness plus current collection sizes.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let counts = state.catalog.counts().await;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        seeded: state.config.seed_fixtures,
        directors: counts.directors,
        movies: counts.movies,
    })
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
