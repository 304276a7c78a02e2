//! Product image model and DTOs.

use brandkit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `product_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductImage {
    pub id: DbId,
    pub brand_kit_id: DbId,
    pub image_url: String,
    pub image_name: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for attaching a product image to an existing brand kit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductImage {
    pub image_url: String,
    pub image_name: Option<String>,
}
