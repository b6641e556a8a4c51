//! Shared query parameter types for API handlers.

use cinecat_core::pagination::PageRequest;
use serde::{Deserialize, Deserializer};

/// List parameters (`?page=&pageSize=&search=`) accepted by every list endpoint.
///
/// An absent or empty `page`/`pageSize` falls back to the defaults (1 and 10).
/// An empty `search` means "no filter".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<i64>,
    pub search: Option<String>,
}

impl ListParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
