//! `cinecat-client` library crate.
//!
//! HTTP client for the catalog API plus the client-held list cache that a
//! UI drives. The `cinecat` binary in `main.rs` is a terminal front end
//! over the same cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod resource;
pub mod state;
