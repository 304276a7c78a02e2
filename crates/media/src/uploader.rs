use async_trait::async_trait;

use crate::error::MediaError;

/// Transformation applied to logo and product uploads.
pub const BACKGROUND_REMOVAL_TRANSFORMATION: &str = "e_background_removal/e_trim";

/// Delivery format for processed uploads.
pub const PROCESSED_FORMAT: &str = "png";

/// What to upload.
#[derive(Debug, Clone)]
pub enum UploadSource {
    /// Raw file contents received from a client.
    Bytes { data: Vec<u8>, filename: String },
    /// A remote URL (or data URI) the media service fetches itself.
    Url(String),
}

/// Processing parameters for an upload. All optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    pub public_id: Option<String>,
    pub transformation: Option<String>,
    pub format: Option<String>,
}

impl UploadOptions {
    /// Background removal, trim and PNG conversion, stored under `public_id`.
    pub fn background_removed(public_id: impl Into<String>) -> Self {
        let public_id = public_id.into();
        Self {
            public_id: (!public_id.is_empty()).then_some(public_id),
            transformation: Some(BACKGROUND_REMOVAL_TRANSFORMATION.to_string()),
            format: Some(PROCESSED_FORMAT.to_string()),
        }
    }

    /// Store as-is.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Non-empty parameters as `(name, value)` pairs.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        [
            ("format", self.format.as_deref()),
            ("public_id", self.public_id.as_deref()),
            ("transformation", self.transformation.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.filter(|v| !v.is_empty()).map(|v| (name, v)))
        .collect()
    }
}

/// Uploads images to the media service and returns their delivery URL.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(
        &self,
        source: UploadSource,
        options: &UploadOptions,
    ) -> Result<String, MediaError>;
}
