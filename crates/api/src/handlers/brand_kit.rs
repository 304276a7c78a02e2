//! Handlers for brand kits and their product images.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brandkit_core::error::CoreError;
use brandkit_core::validation::{validate_brand_name, validate_colors, validate_image_urls};
use brandkit_db::models::brand_kit::{BrandKit, BrandKitWithImages, CreateBrandKit};
use brandkit_db::models::product_image::{CreateProductImage, ProductImage};
use brandkit_db::repositories::{BrandKitRepo, ProductImageRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::{json_body, parse_kit_id};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Entity name used in not-found errors.
pub(crate) const BRAND_KIT: &str = "brand kit";

/// Body of `POST /create-brand-kit`.
#[derive(Debug, Deserialize)]
pub struct CreateBrandKitRequest {
    pub name: String,
    /// Palette document; absent or `null` becomes `{}`.
    #[serde(default)]
    pub colors_json: Option<serde_json::Value>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub rules_text: Option<String>,
}

/// `{ "brand_kit": [...] }` payload used by list and create.
#[derive(Debug, Serialize)]
pub struct BrandKitList {
    pub brand_kit: Vec<BrandKit>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /brand-kits
pub async fn list_brand_kits(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<BrandKitList>>> {
    let kits = BrandKitRepo::list(&state.pool).await?;

    tracing::debug!(count = kits.len(), "Fetched brand kits");

    Ok(Json(ApiResponse::new(
        "SUCCESS: Successfully fetched the brandkits",
        BrandKitList { brand_kit: kits },
    )))
}

/// GET /brand-kit/{kit_id}
///
/// Returns the kit and its product images in insertion order.
pub async fn get_brand_kit(
    State(state): State<AppState>,
    Path(kit_id): Path<String>,
) -> AppResult<Json<ApiResponse<BrandKitWithImages>>> {
    let id = parse_kit_id(&kit_id)?;

    let kit = BrandKitRepo::find_with_images(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: BRAND_KIT,
            id: id.to_string(),
        })?;

    Ok(Json(ApiResponse::new(
        "SUCCESS: successfully fetched the brandkit",
        kit,
    )))
}

/// POST /create-brand-kit
///
/// Creates the kit and one product image per entry of `image_urls` in a
/// single transaction.
pub async fn create_brand_kit(
    State(state): State<AppState>,
    payload: Result<Json<CreateBrandKitRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<BrandKitList>>)> {
    let input = json_body(payload)?;

    validate_brand_name(&input.name)?;
    validate_image_urls(&input.image_urls)?;
    let colors_json = match input.colors_json {
        Some(serde_json::Value::Null) | None => serde_json::json!({}),
        Some(colors) => {
            validate_colors(&colors)?;
            colors
        }
    };

    let image_urls: Vec<String> = input
        .image_urls
        .iter()
        .map(|url| url.trim().to_string())
        .collect();

    let created = BrandKitRepo::create_with_images(
        &state.pool,
        &CreateBrandKit {
            name: input.name.trim().to_string(),
            colors_json,
            logo_url: input.logo_url,
            rules_text: input.rules_text,
        },
        &image_urls,
    )
    .await?;

    tracing::info!(
        kit_id = %created.brand_kit.id,
        name = %created.brand_kit.name,
        images = created.product_images.len(),
        "Brand kit created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "SUCCESS: Successfully created the brandkit",
            BrandKitList {
                brand_kit: vec![created.brand_kit],
            },
        )),
    ))
}

/// POST /brand-kit/{kit_id}/product-images
///
/// Attach one more product image to an existing kit.
pub async fn add_product_image(
    State(state): State<AppState>,
    Path(kit_id): Path<String>,
    payload: Result<Json<CreateProductImage>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProductImage>>)> {
    let id = parse_kit_id(&kit_id)?;
    let input = json_body(payload)?;

    if input.image_url.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "image_url must not be empty".into(),
        )));
    }

    if BrandKitRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: BRAND_KIT,
            id: id.to_string(),
        }));
    }

    let image = ProductImageRepo::create(
        &state.pool,
        id,
        &CreateProductImage {
            image_url: input.image_url.trim().to_string(),
            image_name: input.image_name,
        },
    )
    .await?;

    tracing::info!(kit_id = %id, image_id = %image.id, "Product image added");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            "SUCCESS: Successfully created the product image",
            image,
        )),
    ))
}
