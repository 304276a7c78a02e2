use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{brand_kit, layout};
use crate::state::AppState;

/// Brand kit routes.
///
/// ```text
/// GET  /brand-kits                          -> list_brand_kits
/// GET  /brand-kit/{kit_id}                  -> get_brand_kit
/// POST /brand-kit/{kit_id}/product-images   -> add_product_image
/// POST /brand-kit/{kit_id}/generate         -> generate_layout
/// POST /create-brand-kit                    -> create_brand_kit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/brand-kits", get(brand_kit::list_brand_kits))
        .route("/brand-kit/{kit_id}", get(brand_kit::get_brand_kit))
        .route(
            "/brand-kit/{kit_id}/product-images",
            post(brand_kit::add_product_image),
        )
        .route("/brand-kit/{kit_id}/generate", post(layout::generate_layout))
        .route("/create-brand-kit", post(brand_kit::create_brand_kit))
}
