/// Errors from the media upload layer.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The media service returned a non-2xx status code.
    #[error("Media service error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A successful response did not carry a delivery URL.
    #[error("Media service response has no secure_url")]
    MissingUrl,

    /// `CLOUDINARY_URL` could not be parsed.
    #[error("Invalid media configuration: {0}")]
    Config(String),
}
