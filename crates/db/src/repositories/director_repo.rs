//! Repository for the director collection.

use cinecat_core::pagination::{self, Page, PageRequest};
use cinecat_core::types::DbId;

use crate::models::director::{CreateDirector, Director, UpdateDirector};
use crate::Catalog;

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Filter by name/nationality and return the requested page.
    pub async fn list(catalog: &Catalog, search: Option<&str>, page: PageRequest) -> Page<Director> {
        let store = catalog.directors.read().await;
        pagination::paginate(store.iter(), search, page)
    }

    pub async fn find_by_id(catalog: &Catalog, id: DbId) -> Option<Director> {
        catalog.directors.read().await.get(id).cloned()
    }

    /// Insert a new director with the next unused ID.
    ///
    /// No field is required; missing ones are stored as absent.
    pub async fn create(catalog: &Catalog, input: &CreateDirector) -> Director {
        let mut store = catalog.directors.write().await;
        store.insert(|id| Director::from_payload(id, input))
    }

    /// Replace every field of an existing director.
    ///
    /// Returns `None` if no director with the given ID exists. Movies that
    /// embed this director keep their old snapshot.
    pub async fn update(catalog: &Catalog, id: DbId, input: &UpdateDirector) -> Option<Director> {
        let mut store = catalog.directors.write().await;
        store.update(id, |id| Director::from_payload(id, input))
    }

    /// Remove a director. Movies referencing it are left untouched.
    ///
    /// Returns the removed record, or `None` if it did not exist.
    pub async fn delete(catalog: &Catalog, id: DbId) -> Option<Director> {
        catalog.directors.write().await.remove(id)
    }

    /// Snapshot of the director with `id`, for embedding into a movie.
    pub(crate) async fn snapshot(catalog: &Catalog, id: Option<DbId>) -> Option<Director> {
        let id = id?;
        Self::find_by_id(catalog, id).await
    }
}
