use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Media routes. Upload bodies are capped at `max_upload_bytes` plus
/// multipart overhead.
///
/// ```text
/// POST /upload-logo      -> upload_logo
/// POST /upload-product   -> upload_product
/// POST /export-image     -> export_image
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    let uploads = Router::new()
        .route("/upload-logo", post(media::upload_logo))
        .route("/upload-product", post(media::upload_product))
        .layer(DefaultBodyLimit::max(
            max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES),
        ));

    Router::new()
        .merge(uploads)
        .route("/export-image", post(media::export_image))
}
