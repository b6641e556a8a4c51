//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cinecat_core::types::DbId;
use cinecat_db::models::movie::{
    CreateMovie, DeletedMovie, Movie, UpdateMovie, MOVIE_DELETED_MESSAGE,
};
use cinecat_db::repositories::MovieRepo;
use cinecat_db::store::Entity;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/movies
///
/// Paginated list; each item carries its embedded `director` snapshot.
pub async fn list_movies(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page =
        MovieRepo::list(&state.catalog, params.search.as_deref(), params.page_request()).await;

    Ok(Json(page))
}

/// GET /api/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_by_id(&state.catalog, id)
        .await
        .ok_or(AppError::not_found(Movie::KIND, id))?;

    Ok(Json(movie))
}

/// POST /api/movies
///
/// `directorId` is resolved against the current directors but not required
/// to exist.
pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::create(&state.catalog, &input).await;

    tracing::info!(
        movies_id = movie.movies_id,
        director_id = ?movie.director_id,
        "Movie created",
    );

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /api/movies/{id}
pub async fn update_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateMovie>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::update(&state.catalog, id, &input)
        .await
        .ok_or(AppError::not_found(Movie::KIND, id))?;

    tracing::info!(movies_id = id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /api/movies/{id}
///
/// Unlike directors, answers 200 with a confirmation and the removed record.
pub async fn delete_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted_movie = MovieRepo::delete(&state.catalog, id)
        .await
        .ok_or(AppError::not_found(Movie::KIND, id))?;

    tracing::info!(movies_id = id, "Movie deleted");

    Ok(Json(DeletedMovie {
        message: MOVIE_DELETED_MESSAGE.to_string(),
        deleted_movie,
    }))
}
