//! Product image download and media type detection.

use std::time::Duration;

use async_trait::async_trait;
use image::ImageFormat;

use crate::error::PipelineError;

/// Fallback media type for bytes that are not a recognised image.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Downloads the raw bytes of an image URL.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, PipelineError>;
}

/// [`ImageFetcher`] over plain HTTP GET.
#[derive(Clone)]
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, PipelineError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PipelineError::Fetch(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, PipelineError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PipelineError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::Fetch(format!("{url} returned {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PipelineError::Fetch(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Sniff the media type of image bytes from their content.
pub fn detect_mime_type(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::WebP) => "image/webp",
        Ok(ImageFormat::Gif) => "image/gif",
        Ok(other) => other.to_mime_type(),
        Err(_) => OCTET_STREAM,
    }
}
