//! Shared response envelope for API handlers.
//!
//! Every response, success or error, is `{ "message": ..., "data": ... }`.
//! Error responses carry `"data": null` and are produced by
//! [`crate::error::AppError`].

use serde::Serialize;

/// Standard `{ "message": String, "data": T }` envelope.
///
/// `ApiResponse<()>` serializes `data` as `null`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

impl ApiResponse<()> {
    /// Envelope without a payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(message, ())
    }
}

/// Payload of upload and export responses.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub url: String,
}
