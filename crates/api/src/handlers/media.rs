//! Image upload and export through the media service.

use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use brandkit_media::{UploadOptions, UploadSource};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::json_body;
use crate::response::{ApiResponse, UrlResponse};
use crate::state::AppState;

/// Multipart field carrying the logo file.
pub const LOGO_FIELD: &str = "logo_file";

/// Multipart field carrying the product image file.
pub const PRODUCT_FIELD: &str = "product_file";

/// Body of `POST /export-image`.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// Remote URL or data URI of the rendered image.
    pub url: String,
}

/// POST /upload-logo
pub async fn upload_logo(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ApiResponse<UrlResponse>>)> {
    upload_processed(&state, multipart, LOGO_FIELD).await
}

/// POST /upload-product
pub async fn upload_product(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<ApiResponse<UrlResponse>>)> {
    upload_processed(&state, multipart, PRODUCT_FIELD).await
}

/// POST /export-image
///
/// Stores a finished creative as-is and returns its delivery URL.
pub async fn export_image(
    State(state): State<AppState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<UrlResponse>>)> {
    let input = json_body(payload)?;
    let source = input.url.trim();
    if source.is_empty() {
        return Err(AppError::BadRequest("url is required".into()));
    }

    let url = state
        .media
        .upload(UploadSource::Url(source.to_string()), &UploadOptions::plain())
        .await?;

    tracing::info!(%url, "Exported image uploaded");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "SUCCESS: Successfully uploaded the exported image",
            UrlResponse { url },
        )),
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Read `field_name` from the form and upload it with background removal.
async fn upload_processed(
    state: &AppState,
    mut multipart: Multipart,
    field_name: &str,
) -> AppResult<(StatusCode, Json<ApiResponse<UrlResponse>>)> {
    let max_bytes = state.config.max_upload_bytes;
    let too_large = || {
        AppError::BadRequest(format!(
            "File too large (max {}MB allowed)",
            state.config.max_upload_mb()
        ))
    };
    let form_error = |e: MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            too_large()
        } else {
            tracing::debug!(error = %e.body_text(), "Unreadable multipart form");
            AppError::BadRequest("Unable to parse the multipart form".into())
        }
    };

    let mut file: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        if field.name() != Some(field_name) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(form_error)?;
        file = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::BadRequest(format!("Failed to get the {field_name}")))?;
    if data.is_empty() {
        return Err(AppError::BadRequest(format!("The {field_name} is empty")));
    }
    if data.len() > max_bytes {
        return Err(too_large());
    }

    let options = UploadOptions::background_removed(public_id_for(&filename));
    let url = state
        .media
        .upload(UploadSource::Bytes { data, filename }, &options)
        .await?;

    tracing::info!(field = field_name, %url, "File uploaded");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "SUCCESS: Successfully uploaded the file",
            UrlResponse { url },
        )),
    ))
}

/// Public id for an uploaded file: the filename without its extension.
fn public_id_for(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => filename,
    }
}
