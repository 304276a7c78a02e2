use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use brandkit_core::error::CoreError;
use brandkit_media::MediaError;
use brandkit_pipeline::PipelineError;

use crate::response::ApiResponse;

/// Message returned for every server-side failure. Details are only logged.
pub const GENERIC_ERROR_MESSAGE: &str = "ERROR: Something went wrong";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] producing the `{ "message", "data": null }`
/// envelope. Client errors carry their message; server errors are logged and
/// replaced by [`GENERIC_ERROR_MESSAGE`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `brandkit_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The media service rejected or failed an upload.
    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    /// Layout generation failed after retries.
    #[error("Layout generation error: {0}")]
    Pipeline(#[from] PipelineError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status and client-facing message.
    ///
    /// Not-found is reported as 400, the same as a malformed request.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(CoreError::NotFound { entity, .. }) => (
                StatusCode::BAD_REQUEST,
                format!("ERROR: No {entity} found with this id"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, format!("ERROR: {msg}"))
            }
            AppError::Database(sqlx::Error::RowNotFound) => (
                StatusCode::BAD_REQUEST,
                "ERROR: No record found with this id".to_string(),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, format!("ERROR: {msg}")),
            AppError::Core(CoreError::Internal(_))
            | AppError::Database(_)
            | AppError::Media(_)
            | AppError::Pipeline(_)
            | AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_ERROR_MESSAGE.to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (status, axum::Json(ApiResponse::<()>::message(message))).into_response()
    }
}
