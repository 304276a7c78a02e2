//! Brand kit model and DTOs.
//!
//! A brand kit bundles the assets a layout request is generated from: a
//! palette, an optional logo and an optional rules text. Kits are immutable
//! once created.

use brandkit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::product_image::ProductImage;

/// A row from the `brand_kits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BrandKit {
    pub id: DbId,
    pub name: String,
    pub colors_json: serde_json::Value,
    pub logo_url: Option<String>,
    pub rules_text: Option<String>,
    pub created_at: Timestamp,
}

impl BrandKit {
    /// Rules text, or an empty string for kits created without one.
    pub fn rules_text_or_empty(&self) -> &str {
        self.rules_text.as_deref().unwrap_or_default()
    }

    /// Logo URL, or an empty string for kits without a logo.
    pub fn logo_url_or_empty(&self) -> &str {
        self.logo_url.as_deref().unwrap_or_default()
    }
}

/// DTO for creating a brand kit.
///
/// Empty `logo_url` / `rules_text` strings are stored as NULL.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBrandKit {
    pub name: String,
    pub colors_json: serde_json::Value,
    pub logo_url: Option<String>,
    pub rules_text: Option<String>,
}

/// A brand kit together with its product images.
#[derive(Debug, Clone, Serialize)]
pub struct BrandKitWithImages {
    pub brand_kit: BrandKit,
    pub product_images: Vec<ProductImage>,
}
