pub mod brand_kit;
pub mod layout;
pub mod media;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use brandkit_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Parse a kit id path segment.
///
/// Done by hand rather than with `Path<Uuid>` so a malformed id gets the
/// standard error envelope.
pub(crate) fn parse_kit_id(raw: &str) -> AppResult<DbId> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::BadRequest("Invalid kit id (empty)".into()));
    }
    DbId::parse_str(raw).map_err(|e| {
        tracing::debug!(kit_id = raw, error = %e, "Rejected malformed kit id");
        AppError::BadRequest("Invalid kit id".into())
    })
}

/// Unwrap a JSON body, turning extractor rejections into a 400 envelope.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected request body");
            Err(AppError::BadRequest("Unable to parse the request body".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn kit_id_must_be_a_uuid() {
        assert_matches!(parse_kit_id("not-a-uuid"), Err(AppError::BadRequest(_)));
        assert_matches!(parse_kit_id(" "), Err(AppError::BadRequest(msg)) if msg.contains("empty"));
        assert!(parse_kit_id("0190b6d2-8f3a-7c4e-9b1a-2f3e4d5c6b7a").is_ok());
    }
}
