//! Layout generation for a brand kit.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brandkit_core::error::CoreError;
use brandkit_db::repositories::{BrandKitRepo, ProductImageRepo};
use brandkit_pipeline::LayoutRequest;

use crate::error::AppResult;
use crate::handlers::brand_kit::BRAND_KIT;
use crate::handlers::parse_kit_id;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /brand-kit/{kit_id}/generate
///
/// Describes the kit's product images, assembles the prompt from its rules
/// and returns the layout JSON produced by the model.
pub async fn generate_layout(
    State(state): State<AppState>,
    Path(kit_id): Path<String>,
) -> AppResult<(StatusCode, Json<ApiResponse<serde_json::Value>>)> {
    let id = parse_kit_id(&kit_id)?;

    let kit = BrandKitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: BRAND_KIT,
            id: id.to_string(),
        })?;

    let images = ProductImageRepo::list_for_brand_kit(&state.pool, id).await?;

    tracing::info!(kit_id = %id, images = images.len(), "Generating layout");

    let layout = state
        .pipeline
        .generate(LayoutRequest {
            brand_name: &kit.name,
            rules_text: kit.rules_text_or_empty(),
            colors: &kit.colors_json,
            logo_url: kit.logo_url_or_empty(),
            image_urls: images.into_iter().map(|image| image.image_url).collect(),
        })
        .await
        .inspect_err(|e| tracing::error!(kit_id = %id, error = %e, "Layout generation failed"))?;

    tracing::info!(kit_id = %id, "Layout generated");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "SUCCESS: Successfully generated the data",
            layout,
        )),
    ))
}
