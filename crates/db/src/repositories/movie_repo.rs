//! Repository for the movie collection.
//!
//! Writes resolve `directorId` against the director collection at the moment
//! of the write and embed a copy of the director. The director lock is
//! released before the movie lock is taken, so no call holds both.

use cinecat_core::pagination::{self, Page, PageRequest};
use cinecat_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};
use crate::repositories::DirectorRepo;
use crate::Catalog;

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Filter by name/genre/director name and return the requested page.
    pub async fn list(catalog: &Catalog, search: Option<&str>, page: PageRequest) -> Page<Movie> {
        let store = catalog.movies.read().await;
        pagination::paginate(store.iter(), search, page)
    }

    pub async fn find_by_id(catalog: &Catalog, id: DbId) -> Option<Movie> {
        catalog.movies.read().await.get(id).cloned()
    }

    /// Insert a new movie, embedding the current director snapshot.
    ///
    /// An unknown or missing `directorId` is accepted and leaves `director`
    /// empty.
    pub async fn create(catalog: &Catalog, input: &CreateMovie) -> Movie {
        let director = DirectorRepo::snapshot(catalog, input.director_id).await;
        if input.director_id.is_some() && director.is_none() {
            tracing::debug!(director_id = ?input.director_id, "Movie references unknown director");
        }

        let mut store = catalog.movies.write().await;
        store.insert(|id| Movie::from_payload(id, input, director))
    }

    /// Replace every field of an existing movie and re-resolve its director.
    ///
    /// Returns `None` if no movie with the given ID exists.
    pub async fn update(catalog: &Catalog, id: DbId, input: &UpdateMovie) -> Option<Movie> {
        let director = DirectorRepo::snapshot(catalog, input.director_id).await;

        let mut store = catalog.movies.write().await;
        store.update(id, |id| Movie::from_payload(id, input, director))
    }

    /// Remove a movie, returning the removed record.
    pub async fn delete(catalog: &Catalog, id: DbId) -> Option<Movie> {
        catalog.movies.write().await.remove(id)
    }
}
