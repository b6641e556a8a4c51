//! In-memory catalog storage.
//!
//! The [`Catalog`] owns one [`EntityStore`] per entity kind. There is no
//! persistence: the catalog is built at process start (optionally from the
//! fixture seed) and discarded at exit.

pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

use tokio::sync::RwLock;

use crate::models::director::Director;
use crate::models::movie::Movie;
use crate::store::EntityStore;

/// The whole datastore: directors and movies, each behind its own lock.
///
/// Every repository operation holds exactly one of the two locks for its
/// duration, so operations on the same entity kind are applied one at a
/// time and the last write wins.
pub struct Catalog {
    pub(crate) directors: RwLock<EntityStore<Director>>,
    pub(crate) movies: RwLock<EntityStore<Movie>>,
}

/// Record counts per collection, reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogCounts {
    pub directors: usize,
    pub movies: usize,
}

impl Catalog {
    /// A catalog with both collections empty and IDs starting at 1.
    pub fn empty() -> Self {
        Self::from_parts(EntityStore::new(), EntityStore::new())
    }

    /// A catalog populated with the fixture directors and movies.
    pub fn seeded() -> Self {
        let directors = seed::directors();
        let movies = seed::movies(&directors);
        tracing::debug!(
            directors = directors.len(),
            movies = movies.len(),
            "Seeding catalog from fixtures"
        );
        Self::from_parts(EntityStore::seeded(directors), EntityStore::seeded(movies))
    }

    fn from_parts(directors: EntityStore<Director>, movies: EntityStore<Movie>) -> Self {
        Self {
            directors: RwLock::new(directors),
            movies: RwLock::new(movies),
        }
    }

    pub async fn counts(&self) -> CatalogCounts {
        let directors = self.directors.read().await.len();
        let movies = self.movies.read().await.len();
        CatalogCounts { directors, movies }
    }
}
