use async_trait::async_trait;
use brandkit_gemini::{GeminiClient, GenerateContentResponse};

use crate::error::PipelineError;

/// The two model capabilities the pipeline uses.
///
/// Both return the first text part of the first candidate, or
/// [`PipelineError::EmptyResponse`] when there is none.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Describe an image given as raw bytes.
    async fn describe_image(
        &self,
        instruction: &str,
        image: &[u8],
        mime_type: &str,
    ) -> Result<String, PipelineError>;

    /// Generate text from a single prompt.
    async fn generate_text(&self, prompt: &str) -> Result<String, PipelineError>;
}

fn first_text(response: GenerateContentResponse) -> Result<String, PipelineError> {
    response
        .first_text()
        .map(str::to_string)
        .ok_or(PipelineError::EmptyResponse)
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn describe_image(
        &self,
        instruction: &str,
        image: &[u8],
        mime_type: &str,
    ) -> Result<String, PipelineError> {
        let response = GeminiClient::describe_image(self, instruction, image, mime_type).await?;
        first_text(response)
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, PipelineError> {
        let response = GeminiClient::generate_text(self, prompt).await?;
        first_text(response)
    }
}
