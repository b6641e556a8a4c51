//! Catalog record types and request DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` record struct in camelCase wire form
//! - A `Deserialize` payload DTO used for both create and full-replace update

pub mod director;
pub mod movie;
