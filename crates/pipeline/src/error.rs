use brandkit_gemini::GeminiError;

/// Errors raised while generating a layout.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The generative model call failed.
    #[error(transparent)]
    Model(#[from] GeminiError),

    /// The model answered without a candidate or text part.
    #[error("Model returned no content")]
    EmptyResponse,

    /// The cleaned model output is not valid JSON.
    #[error("Model output is not valid JSON")]
    InvalidJson,

    /// The generation context could not be serialized.
    #[error("Failed to encode generation context: {0}")]
    Encode(#[from] serde_json::Error),

    /// A product image could not be downloaded.
    #[error("Failed to fetch image: {0}")]
    Fetch(String),
}

impl PipelineError {
    /// Whether another attempt may succeed.
    ///
    /// Empty and malformed model output is retried like an unavailable
    /// service; model errors defer to [`GeminiError::is_transient`].
    pub fn is_transient(&self) -> bool {
        match self {
            PipelineError::Model(e) => e.is_transient(),
            PipelineError::EmptyResponse | PipelineError::InvalidJson => true,
            PipelineError::Encode(_) | PipelineError::Fetch(_) => false,
        }
    }
}
