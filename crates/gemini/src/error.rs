/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status} {}): {message}", code.as_deref().unwrap_or("UNKNOWN"))]
    Api {
        status: u16,
        /// Google status string, e.g. `UNAVAILABLE`.
        code: Option<String>,
        message: String,
    },

    /// A 2xx response whose body could not be decoded.
    #[error("Failed to decode Gemini response: {0}")]
    Decode(String),
}

impl GeminiError {
    /// Whether the service signalled a temporary condition worth retrying.
    ///
    /// True for 503 / `UNAVAILABLE` and for client-side timeouts.
    pub fn is_transient(&self) -> bool {
        match self {
            GeminiError::Api { status, code, .. } => {
                *status == 503 || code.as_deref() == Some("UNAVAILABLE")
            }
            GeminiError::Request(e) => e.is_timeout(),
            GeminiError::Decode(_) => false,
        }
    }
}
