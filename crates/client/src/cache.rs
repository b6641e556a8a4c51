//! List cache that keeps one page of a collection in sync with the API.
//!
//! Every successful mutation is followed by a full re-fetch of the current
//! window instead of patching `items` locally. Failures are turned into a
//! short message on the [`ListState`]; the underlying cause is only logged.
//! Nothing is retried.

use cinecat_core::types::DbId;
use cinecat_db::models::director::Director;
use cinecat_db::models::movie::{CreateMovie, Movie};
use cinecat_db::store::Entity;

use crate::api::{CatalogApi, ClientError, ListQuery};
use crate::resource::{Directors, Movies, Resource};
use crate::state::ListState;

/// Page size used when loading the director picker for the movie form.
pub const DIRECTOR_OPTIONS_PAGE_SIZE: i64 = 100;

/// Message shown when a movie form is submitted without a director.
pub const SELECT_DIRECTOR_MESSAGE: &str = "Please select a director";

/// An API client paired with the list state for one entity kind.
pub struct ResourceCache<R: Resource> {
    api: CatalogApi,
    state: ListState<R::Item>,
}

impl<R: Resource> ResourceCache<R> {
    pub fn new(api: CatalogApi) -> Self {
        Self {
            api,
            state: ListState::new(),
        }
    }

    pub fn state(&self) -> &ListState<R::Item> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ListState<R::Item> {
        &mut self.state
    }

    pub fn api(&self) -> &CatalogApi {
        &self.api
    }

    /// Re-issue the list query for the current page, size and search term.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let query = self.state.query();
        self.state.begin_fetch();

        match self.api.list::<R>(&query).await {
            Ok(page) => {
                tracing::debug!(
                    resource = R::PLURAL,
                    page = query.page,
                    total_items = page.total_items,
                    "List refreshed"
                );
                self.state.finish_fetch(page);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(resource = R::PLURAL, error = %e, "List fetch failed");
                self.state.fail_fetch(format!("Error fetching {}", R::PLURAL));
                Err(e)
            }
        }
    }

    /// Fetch a single record. Does not touch the cached page.
    pub async fn get(&mut self, id: DbId) -> Result<R::Item, ClientError> {
        let result = self.api.get::<R>(id).await;
        self.record_failure(&result, "fetching");
        result
    }

    /// Create a record, then re-fetch the current page.
    pub async fn create(&mut self, payload: &R::Payload) -> Result<R::Item, ClientError> {
        let result = self.api.create::<R>(payload).await;
        self.record_failure(&result, "creating");
        let created = result?;

        tracing::info!(resource = R::SINGULAR, id = created.id(), "Record created");
        self.resync().await;
        Ok(created)
    }

    /// Replace a record, then re-fetch the current page.
    pub async fn update(
        &mut self,
        id: DbId,
        payload: &R::Payload,
    ) -> Result<R::Item, ClientError> {
        let result = self.api.update::<R>(id, payload).await;
        self.record_failure(&result, "updating");
        let updated = result?;

        tracing::info!(resource = R::SINGULAR, id, "Record updated");
        self.resync().await;
        Ok(updated)
    }

    /// Delete a record, then re-fetch the current page.
    pub async fn delete(&mut self, id: DbId) -> Result<(), ClientError> {
        let result = self.api.delete::<R>(id).await;
        self.record_failure(&result, "deleting");
        result?;

        tracing::info!(resource = R::SINGULAR, id, "Record deleted");
        self.resync().await;
        Ok(())
    }

    /// Refresh after a mutation. A failed refresh is already recorded on the
    /// state, and the mutation itself still succeeded.
    async fn resync(&mut self) {
        let _ = self.refresh().await;
    }

    fn record_failure<T>(&mut self, result: &Result<T, ClientError>, verb: &str) {
        if let Err(e) = result {
            tracing::warn!(resource = R::SINGULAR, error = %e, "Request failed");
            self.state.fail(format!("Error {verb} {}", R::SINGULAR));
        }
    }
}

impl ResourceCache<Movies> {
    /// Load the directors offered in the movie form's picker.
    ///
    /// A failure is logged only; it does not set the list error.
    pub async fn load_director_options(&self) -> Result<Vec<Director>, ClientError> {
        let query = ListQuery {
            page_size: DIRECTOR_OPTIONS_PAGE_SIZE,
            ..ListQuery::default()
        };

        match self.api.list::<Directors>(&query).await {
            Ok(page) => Ok(page.items),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load director options");
                Err(e)
            }
        }
    }

    /// Create a movie after checking that a director was picked.
    ///
    /// The API itself accepts movies without a resolvable director; this is
    /// the form-level rule only.
    pub async fn create_checked(&mut self, payload: &CreateMovie) -> Result<Movie, ClientError> {
        self.check_director(payload)?;
        self.create(payload).await
    }

    /// Update a movie after checking that a director was picked.
    pub async fn update_checked(
        &mut self,
        id: DbId,
        payload: &CreateMovie,
    ) -> Result<Movie, ClientError> {
        self.check_director(payload)?;
        self.update(id, payload).await
    }

    fn check_director(&mut self, payload: &CreateMovie) -> Result<(), ClientError> {
        match payload.director_id {
            Some(id) if id > 0 => Ok(()),
            _ => {
                self.state.fail(SELECT_DIRECTOR_MESSAGE);
                Err(ClientError::Validation(SELECT_DIRECTOR_MESSAGE.to_string()))
            }
        }
    }
}
