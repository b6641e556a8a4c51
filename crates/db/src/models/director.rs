//! Director records and DTOs.

use cinecat_core::search::Searchable;
use cinecat_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// A stored director.
///
/// Every field except the ID is optional: a field missing from the create
/// or update payload is stored as absent and omitted when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    pub director_id: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Payload for `POST /director` and `PUT /director/{id}`.
///
/// An update is a full replacement, so the same shape serves both. Any
/// `directorId` sent in the body is ignored; the path ID wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDirector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Full-replacement update payload.
pub type UpdateDirector = CreateDirector;

impl Director {
    pub fn from_payload(director_id: DbId, input: &CreateDirector) -> Self {
        Self {
            director_id,
            name: input.name.clone(),
            nationality: input.nationality.clone(),
            age: input.age,
            active: input.active,
        }
    }

    /// The payload that would recreate this director's fields.
    pub fn to_payload(&self) -> CreateDirector {
        CreateDirector {
            name: self.name.clone(),
            nationality: self.nationality.clone(),
            age: self.age,
            active: self.active,
        }
    }
}

impl Entity for Director {
    const KIND: &'static str = "Director";

    fn id(&self) -> DbId {
        self.director_id
    }
}

impl Searchable for Director {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![self.name.as_deref(), self.nationality.as_deref()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let director = Director {
            director_id: 1,
            name: Some("Christopher Nolan".into()),
            nationality: Some("British".into()),
            age: Some(53),
            active: Some(true),
        };
        let json = serde_json::to_value(&director).unwrap();
        assert_eq!(json["directorId"], 1);
        assert_eq!(json["name"], "Christopher Nolan");
        assert_eq!(json["active"], true);
    }

    #[test]
    fn absent_fields_are_omitted() {
        let director = Director::from_payload(3, &CreateDirector::default());
        let json = serde_json::to_value(&director).unwrap();
        assert_eq!(json, serde_json::json!({ "directorId": 3 }));
    }

    #[test]
    fn payload_ignores_body_id() {
        let input: CreateDirector =
            serde_json::from_value(serde_json::json!({ "directorId": 99, "name": "X" })).unwrap();
        assert_eq!(input.name.as_deref(), Some("X"));
    }
}
