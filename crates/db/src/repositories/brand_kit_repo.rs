//! Repository for the `brand_kits` table.

use brandkit_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::brand_kit::{BrandKit, BrandKitWithImages, CreateBrandKit};
use crate::models::product_image::ProductImage;
use crate::repositories::ProductImageRepo;

/// Column list for `brand_kits` queries.
const COLUMNS: &str = "id, name, colors_json, logo_url, rules_text, created_at";

/// Provides data access for brand kits.
pub struct BrandKitRepo;

impl BrandKitRepo {
    /// Insert a brand kit and its product images in one transaction.
    ///
    /// Either the kit and every image are stored, or nothing is.
    pub async fn create_with_images(
        pool: &PgPool,
        input: &CreateBrandKit,
        image_urls: &[String],
    ) -> Result<BrandKitWithImages, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO brand_kits (id, name, colors_json, logo_url, rules_text) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let brand_kit = sqlx::query_as::<_, BrandKit>(&query)
            .bind(Uuid::now_v7())
            .bind(&input.name)
            .bind(&input.colors_json)
            .bind(non_empty(&input.logo_url))
            .bind(non_empty(&input.rules_text))
            .fetch_one(&mut *tx)
            .await?;

        let mut product_images: Vec<ProductImage> = Vec::with_capacity(image_urls.len());
        for image_url in image_urls {
            let image =
                ProductImageRepo::insert_in_tx(&mut tx, brand_kit.id, image_url, None).await?;
            product_images.push(image);
        }

        tx.commit().await?;
        Ok(BrandKitWithImages {
            brand_kit,
            product_images,
        })
    }

    /// Find a brand kit by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BrandKit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brand_kits WHERE id = $1");
        sqlx::query_as::<_, BrandKit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a brand kit by ID together with its product images.
    pub async fn find_with_images(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BrandKitWithImages>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(brand_kit) => {
                let product_images = ProductImageRepo::list_for_brand_kit(pool, id).await?;
                Ok(Some(BrandKitWithImages {
                    brand_kit,
                    product_images,
                }))
            }
            None => Ok(None),
        }
    }

    /// List all brand kits, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BrandKit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brand_kits ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, BrandKit>(&query).fetch_all(pool).await
    }
}

/// Treat empty optional text as NULL.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
