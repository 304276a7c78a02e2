use std::sync::Arc;

use brandkit_media::MediaUploader;
use brandkit_pipeline::LayoutPipeline;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is a pool handle or behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: brandkit_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Image upload and processing service.
    pub media: Arc<dyn MediaUploader>,
    /// Layout generation (image description, prompt assembly, model call).
    pub pipeline: Arc<LayoutPipeline>,
}
