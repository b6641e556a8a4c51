//! Movie records, DTOs and the delete confirmation payload.

use cinecat_core::search::Searchable;
use cinecat_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::models::director::Director;
use crate::store::Entity;

/// Confirmation text returned by `DELETE /movies/{id}`.
pub const MOVIE_DELETED_MESSAGE: &str = "Movie deleted successfully";

/// A stored movie.
///
/// `director` is a snapshot of the director taken when the movie was last
/// written. It is not refreshed when the director changes afterwards.
/// `duration` is an elapsed `HH:MM:SS` string, not a clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movies_id: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<Director>,
}

/// Payload for `POST /movies` and `PUT /movies/{id}`.
///
/// `directorId` is not checked for existence; an unknown ID simply yields a
/// movie without a `director` snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director_id: Option<DbId>,
}

/// Full-replacement update payload.
pub type UpdateMovie = CreateMovie;

/// Body of a successful movie delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedMovie {
    pub message: String,
    pub deleted_movie: Movie,
}

impl Movie {
    /// Build a movie from a payload and an already-resolved director snapshot.
    pub fn from_payload(movies_id: DbId, input: &CreateMovie, director: Option<Director>) -> Self {
        Self {
            movies_id,
            name: input.name.clone(),
            release_year: input.release_year.clone(),
            gender: input.gender.clone(),
            duration: input.duration.clone(),
            director_id: input.director_id,
            director,
        }
    }

    pub fn to_payload(&self) -> CreateMovie {
        CreateMovie {
            name: self.name.clone(),
            release_year: self.release_year.clone(),
            gender: self.gender.clone(),
            duration: self.duration.clone(),
            director_id: self.director_id,
        }
    }
}

impl Entity for Movie {
    const KIND: &'static str = "Movie";

    fn id(&self) -> DbId {
        self.movies_id
    }
}

impl Searchable for Movie {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.name.as_deref(),
            self.gender.as_deref(),
            self.director.as_ref().and_then(|d| d.name.as_deref()),
        ]
    }
}
