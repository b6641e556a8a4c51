pub mod director;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /director                 list, create
/// /director/{id}            get, update, delete (204)
///
/// /movies                   list, create
/// /movies/{id}              get, update, delete (200 + confirmation)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/director", director::router())
        .nest("/movies", movies::router())
}
