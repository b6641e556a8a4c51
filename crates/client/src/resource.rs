//! Binds each catalog entity kind to its API path and UI labels.

use cinecat_db::models::director::{CreateDirector, Director};
use cinecat_db::models::movie::{CreateMovie, Movie};
use cinecat_db::store::Entity;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// An entity kind the client can list and mutate.
pub trait Resource {
    /// Record returned by the API.
    type Item: Entity + DeserializeOwned + Serialize;
    /// Create / full-replace payload.
    type Payload: Serialize;

    /// Path segment under `/api` (`"director"`, `"movies"`).
    const PATH: &'static str;
    /// Lowercase singular label used in messages (`"director"`).
    const SINGULAR: &'static str;
    /// Lowercase plural label used in messages (`"directors"`).
    const PLURAL: &'static str;
}

/// Marker for the director collection.
pub struct Directors;

/// Marker for the movie collection.
pub struct Movies;

impl Resource for Directors {
    type Item = Director;
    type Payload = CreateDirector;

    const PATH: &'static str = "director";
    const SINGULAR: &'static str = "director";
    const PLURAL: &'static str = "directors";
}

impl Resource for Movies {
    type Item = Movie;
    type Payload = CreateMovie;

    const PATH: &'static str = "movies";
    const SINGULAR: &'static str = "movie";
    const PLURAL: &'static str = "movies";
}
