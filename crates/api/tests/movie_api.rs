//! HTTP-level integration tests for the `/api/movies` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;

fn arrival(director_id: i64) -> serde_json::Value {
    json!({
        "name": "Arrival",
        "releaseYear": "2016-11-11",
        "gender": "Sci-Fi",
        "duration": "01:56:00",
        "directorId": director_id
    })
}

// ---------------------------------------------------------------------------
// List / search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_embeds_director_snapshots() {
    let state = common::seeded_state();
    let json = body_json(get(common::app(&state), "/api/movies").await).await;

    assert_eq!(json["totalItems"], 15);
    let first = &json["items"][0];
    assert_eq!(first["moviesId"], 1);
    assert_eq!(first["name"], "Inception");
    assert_eq!(first["director"]["name"], "Christopher Nolan");
    assert_eq!(first["director"]["directorId"], first["directorId"]);
}

#[tokio::test]
async fn search_matches_title_genre_or_director_name() {
    let state = common::seeded_state();

    let by_title = body_json(get(common::app(&state), "/api/movies?search=dark").await).await;
    assert_eq!(by_title["totalItems"], 1);

    let by_genre = body_json(get(common::app(&state), "/api/movies?search=CRIME").await).await;
    assert_eq!(by_genre["totalItems"], 3);

    let by_director =
        body_json(get(common::app(&state), "/api/movies?search=villeneuve").await).await;
    assert_eq!(by_director["totalItems"], 2);
    for item in by_director["items"].as_array().unwrap() {
        assert_eq!(item["director"]["name"], "Denis Villeneuve");
    }
}

#[tokio::test]
async fn second_page_holds_the_remaining_movies() {
    let state = common::seeded_state();
    let json = body_json(get(common::app(&state), "/api/movies?page=2").await).await;

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["moviesId"], 11);
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_embeds_current_director() {
    let state = common::seeded_state();
    let director = body_json(get(common::app(&state), "/api/director/5").await).await;

    let response = post_json(common::app(&state), "/api/movies", arrival(5)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let movie = body_json(response).await;
    assert_eq!(movie["moviesId"], 16);
    assert_eq!(movie["director"], director);

    let fetched = body_json(get(common::app(&state), "/api/movies/16").await).await;
    assert_eq!(fetched, movie);
}

#[tokio::test]
async fn create_with_unknown_director_has_no_snapshot() {
    let state = common::seeded_state();
    let response = post_json(common::app(&state), "/api/movies", arrival(404)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let movie = body_json(response).await;
    assert_eq!(movie["directorId"], 404);
    assert!(movie.get("director").is_none());
}

#[tokio::test]
async fn snapshot_is_not_refreshed_after_director_update() {
    let state = common::seeded_state();
    post_json(common::app(&state), "/api/movies", arrival(5)).await;

    put_json(
        common::app(&state),
        "/api/director/5",
        json!({ "name": "Someone Else", "nationality": "Canadian", "age": 57, "active": true }),
    )
    .await;

    let movie = body_json(get(common::app(&state), "/api/movies/16").await).await;
    assert_eq!(movie["director"]["name"], "Denis Villeneuve");
    assert_eq!(movie["director"]["age"], 56);
}

#[tokio::test]
async fn get_nonexistent_movie_returns_404() {
    let state = common::seeded_state();
    let response = get(common::app(&state), "/api/movies/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Movie not found");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_replaces_fields_and_re_resolves_director() {
    let state = common::seeded_state();
    let response = put_json(
        common::app(&state),
        "/api/movies/1",
        json!({ "name": "Inception (Director's Cut)", "directorId": 2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let movie = body_json(response).await;
    assert_eq!(movie["moviesId"], 1);
    assert_eq!(movie["director"]["name"], "Quentin Tarantino");
    assert!(movie.get("gender").is_none());
    assert!(movie.get("duration").is_none());
    assert!(movie.get("releaseYear").is_none());
}

#[tokio::test]
async fn update_nonexistent_movie_returns_404() {
    let state = common::seeded_state();
    let response = put_json(common::app(&state), "/api/movies/999", arrival(1)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_movie_returns_confirmation_and_record() {
    let state = common::seeded_state();
    let response = delete(common::app(&state), "/api/movies/2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Movie deleted successfully");
    assert_eq!(json["deletedMovie"]["moviesId"], 2);
    assert_eq!(json["deletedMovie"]["name"], "Pulp Fiction");

    let response = get(common::app(&state), "/api/movies/2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let listing = body_json(get(common::app(&state), "/api/movies").await).await;
    assert_eq!(listing["totalItems"], 14);
}

#[tokio::test]
async fn delete_nonexistent_movie_returns_404() {
    let state = common::seeded_state();
    let response = delete(common::app(&state), "/api/movies/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Movie not found");
}

#[tokio::test]
async fn deleting_a_director_leaves_movie_snapshots_alone() {
    let state = common::seeded_state();
    delete(common::app(&state), "/api/director/1").await;

    let movie = body_json(get(common::app(&state), "/api/movies/1").await).await;
    assert_eq!(movie["directorId"], 1);
    assert_eq!(movie["director"]["name"], "Christopher Nolan");
}

#[tokio::test]
async fn non_numeric_movie_id_is_a_bad_request() {
    let state = common::seeded_state();
    for response in [
        get(common::app(&state), "/api/movies/abc").await,
        delete(common::app(&state), "/api/movies/abc").await,
    ] {
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    }
}
