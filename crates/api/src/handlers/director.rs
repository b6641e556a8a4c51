//! Handlers for the `/director` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinecat_core::types::DbId;
use cinecat_db::models::director::{CreateDirector, Director, UpdateDirector};
use cinecat_db::repositories::DirectorRepo;
use cinecat_db::store::Entity;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/director
///
/// Paginated, searchable list. Always 200, even when nothing matches.
pub async fn list_directors(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page =
        DirectorRepo::list(&state.catalog, params.search.as_deref(), params.page_request()).await;

    Ok(Json(page))
}

/// GET /api/director/{id}
pub async fn get_director(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let director = DirectorRepo::find_by_id(&state.catalog, id)
        .await
        .ok_or(AppError::not_found(Director::KIND, id))?;

    Ok(Json(director))
}

/// POST /api/director
///
/// No field is required; missing ones are stored as absent.
pub async fn create_director(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDirector>,
) -> AppResult<impl IntoResponse> {
    let director = DirectorRepo::create(&state.catalog, &input).await;

    tracing::info!(director_id = director.director_id, "Director created");

    Ok((StatusCode::CREATED, Json(director)))
}

/// PUT /api/director/{id}
///
/// Full replacement: fields omitted from the body are cleared.
pub async fn update_director(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateDirector>,
) -> AppResult<impl IntoResponse> {
    let director = DirectorRepo::update(&state.catalog, id, &input)
        .await
        .ok_or(AppError::not_found(Director::KIND, id))?;

    tracing::info!(director_id = id, "Director updated");

    Ok(Json(director))
}

/// DELETE /api/director/{id}
///
/// Returns 204 with an empty body. Movies referencing the director keep
/// their snapshot.
pub async fn delete_director(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    DirectorRepo::delete(&state.catalog, id)
        .await
        .ok_or(AppError::not_found(Director::KIND, id))?;

    tracing::info!(director_id = id, "Director deleted");

    Ok(StatusCode::NO_CONTENT)
}
