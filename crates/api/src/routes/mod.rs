pub mod brand_kit;
pub mod health;
pub mod media;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ping                                  liveness (GET)
///
/// /brand-kits                            list (GET)
/// /brand-kit/{kit_id}                    get with product images (GET)
/// /brand-kit/{kit_id}/product-images     attach image (POST)
/// /brand-kit/{kit_id}/generate           generate layout (POST)
/// /create-brand-kit                      create with images (POST)
///
/// /upload-logo                           multipart `logo_file` (POST)
/// /upload-product                        multipart `product_file` (POST)
/// /export-image                          re-upload by URL (POST)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(brand_kit::router())
        .merge(media::router(config.max_upload_bytes))
}
