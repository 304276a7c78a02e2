//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod brand_kit_repo;
pub mod product_image_repo;

pub use brand_kit_repo::BrandKitRepo;
pub use product_image_repo::ProductImageRepo;
