/// Gemini client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`.
    pub api_key: String,
    /// Model used for both image description and layout generation.
    pub model: String,
    /// Base URL of the REST API, without a trailing slash.
    pub base_url: String,
    /// Per-call timeout in seconds.
    pub request_timeout_secs: u64,
}

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

impl GeminiConfig {
    /// Config with defaults for everything except the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var                         | Default                                            |
    /// |---------------------------------|----------------------------------------------------|
    /// | `GOOGLE_API_KEY` / `GEMINI_API_KEY` | required                                       |
    /// | `GEMINI_MODEL`                  | `gemini-2.5-flash`                                 |
    /// | `GEMINI_BASE_URL`               | `https://generativelanguage.googleapis.com/v1beta` |
    /// | `GEMINI_TIMEOUT_SECS`           | `60`                                               |
    pub fn from_env() -> Self {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .expect("GOOGLE_API_KEY or GEMINI_API_KEY must be set");

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let request_timeout_secs: u64 = std::env::var("GEMINI_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("GEMINI_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            model,
            base_url,
            request_timeout_secs,
        }
    }

    /// Full URL of the `generateContent` method for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}
