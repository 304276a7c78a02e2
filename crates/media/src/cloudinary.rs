//! Signed uploads to the Cloudinary image upload API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::config::MediaConfig;
use crate::error::MediaError;
use crate::uploader::{MediaUploader, UploadOptions, UploadSource};

const SIGNATURE_ALGORITHM: &str = "sha256";

/// Successful upload response. Only the fields we read are declared.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    secure_url: Option<String>,
    #[serde(default)]
    public_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for a single Cloudinary account.
#[derive(Clone)]
pub struct CloudinaryClient {
    client: reqwest::Client,
    config: MediaConfig,
}

impl CloudinaryClient {
    pub fn new(config: MediaConfig) -> Result<Self, MediaError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn with_client(client: reqwest::Client, config: MediaConfig) -> Self {
        Self { client, config }
    }

    fn signed_form(&self, options: &UploadOptions, timestamp: i64) -> Form {
        let timestamp = timestamp.to_string();
        let mut params = options.params();
        params.push(("timestamp", timestamp.as_str()));

        let signature = sign_params(&params, &self.config.api_secret);

        let mut form = Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", SIGNATURE_ALGORITHM);
        for (name, value) in params {
            form = form.text(name, value.to_string());
        }
        form
    }

    // ---- private helpers ----

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, MediaError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);
        Err(MediaError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl MediaUploader for CloudinaryClient {
    async fn upload(
        &self,
        source: UploadSource,
        options: &UploadOptions,
    ) -> Result<String, MediaError> {
        let form = self.signed_form(options, chrono::Utc::now().timestamp());
        let form = match source {
            UploadSource::Bytes { data, filename } => {
                form.part("file", Part::bytes(data).file_name(filename))
            }
            UploadSource::Url(url) => form.text("file", url),
        };

        let response = self
            .client
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await?;

        let uploaded: UploadResponse = Self::ensure_success(response).await?.json().await?;

        tracing::debug!(public_id = ?uploaded.public_id, "Media upload complete");

        uploaded.secure_url.ok_or(MediaError::MissingUrl)
    }
}

/// Cloudinary request signature: hex SHA-256 of the `name=value` pairs sorted
/// by name and joined with `&`, followed directly by the API secret.
pub fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by_key(|(name, _)| *name);

    let to_sign = sorted
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!("{:x}", Sha256::digest(format!("{to_sign}{api_secret}")))
}
