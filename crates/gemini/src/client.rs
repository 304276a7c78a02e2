//! HTTP client for `models/{model}:generateContent`.

use std::time::Duration;

use crate::config::GeminiConfig;
use crate::error::GeminiError;
use crate::types::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse, Part};

/// Gemini REST client. Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client with a per-call timeout taken from `config`.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one `generateContent` call with the given parts.
    pub async fn generate_content(
        &self,
        parts: Vec<Part>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = GenerateContentRequest::user(parts);

        tracing::debug!(model = %self.config.model, "Calling generateContent");

        let response = self
            .client
            .post(self.config.generate_content_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Ask the model to describe an inline image.
    pub async fn describe_image(
        &self,
        instruction: &str,
        image: &[u8],
        mime_type: &str,
    ) -> Result<GenerateContentResponse, GeminiError> {
        self.generate_content(vec![Part::text(instruction), Part::inline(mime_type, image)])
            .await
    }

    /// Generate content from a single text prompt.
    pub async fn generate_text(&self, prompt: &str) -> Result<GenerateContentResponse, GeminiError> {
        self.generate_content(vec![Part::text(prompt)]).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Non-2xx bodies are
    /// decoded as a Google error envelope when possible.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GeminiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(api_error(status.as_u16(), &body))
    }

    async fn parse_response(
        response: reqwest::Response,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| GeminiError::Decode(e.to_string()))
    }
}

/// Build a [`GeminiError::Api`] from a status code and raw error body.
fn api_error(status: u16, body: &str) -> GeminiError {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => GeminiError::Api {
            status,
            code: envelope.error.status,
            message: envelope.error.message,
        },
        Err(_) => GeminiError::Api {
            status,
            code: None,
            message: body.to_string(),
        },
    }
}
