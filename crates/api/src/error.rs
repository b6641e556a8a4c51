use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinecat_core::error::CoreError;
use cinecat_core::types::DbId;
use serde_json::json;

/// Error returned by catalog handlers.
///
/// Rendered as `{ "error": <message>, "code": <CODE> }` with a matching
/// status. Internal details are logged, never sent.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinecat_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Malformed path, query or body.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }

    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            // The id is not echoed back: `{ "error": "Movie not found" }`.
            AppError::Core(CoreError::NotFound { entity, .. }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Core(CoreError::Internal(msg)) | AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();
        let body = json!({ "error": message, "code": code });

        (status, axum::Json(body)).into_response()
    }
}

// Extractor rejections keep axum's message but use the JSON error body.

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
