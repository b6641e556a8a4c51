//! Route definitions for directors.

use axum::routing::get;
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

/// Director routes mounted at `/director`.
///
/// ```text
/// GET    /        -> list_directors
/// POST   /        -> create_director
/// GET    /{id}    -> get_director
/// PUT    /{id}    -> update_director
/// DELETE /{id}    -> delete_director
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(director::list_directors).post(director::create_director),
        )
        .route(
            "/{id}",
            get(director::get_director)
                .put(director::update_director)
                .delete(director::delete_director),
        )
}
