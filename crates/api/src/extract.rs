//! Extractor wrappers that report rejections as [`AppError`] JSON bodies
//! instead of axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Json<T>` whose rejection is a `{ "error", "code" }` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Path<T>` whose rejection is a `{ "error", "code" }` body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `Query<T>` whose rejection is a `{ "error", "code" }` body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
