//! Repository for the `product_images` table.

use brandkit_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::product_image::{CreateProductImage, ProductImage};
use crate::repositories::brand_kit_repo::non_empty;

/// Column list for `product_images` queries.
const COLUMNS: &str = "id, brand_kit_id, image_url, image_name, created_at";

/// Provides data access for product images.
pub struct ProductImageRepo;

impl ProductImageRepo {
    /// Attach a product image to an existing brand kit.
    ///
    /// Fails with a foreign key violation if the kit does not exist.
    pub async fn create(
        pool: &PgPool,
        brand_kit_id: DbId,
        input: &CreateProductImage,
    ) -> Result<ProductImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_images (id, brand_kit_id, image_url, image_name) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductImage>(&query)
            .bind(Uuid::now_v7())
            .bind(brand_kit_id)
            .bind(&input.image_url)
            .bind(non_empty(&input.image_name))
            .fetch_one(pool)
            .await
    }

    /// List a kit's product images in insertion order.
    pub async fn list_for_brand_kit(
        pool: &PgPool,
        brand_kit_id: DbId,
    ) -> Result<Vec<ProductImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM product_images \
             WHERE brand_kit_id = $1 \
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, ProductImage>(&query)
            .bind(brand_kit_id)
            .fetch_all(pool)
            .await
    }

    /// Insert an image inside an open transaction.
    pub(crate) async fn insert_in_tx(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        brand_kit_id: DbId,
        image_url: &str,
        image_name: Option<&str>,
    ) -> Result<ProductImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_images (id, brand_kit_id, image_url, image_name) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductImage>(&query)
            .bind(Uuid::now_v7())
            .bind(brand_kit_id)
            .bind(image_url)
            .bind(image_name)
            .fetch_one(&mut **tx)
            .await
    }
}
