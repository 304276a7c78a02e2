use crate::error::MediaError;

const SCHEME: &str = "cloudinary://";

pub const DEFAULT_UPLOAD_BASE_URL: &str = "https://api.cloudinary.com/v1_1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Cloudinary account credentials and client settings.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Base of the upload API, without a trailing slash.
    pub upload_base_url: String,
    /// Per-call timeout in seconds.
    pub request_timeout_secs: u64,
}

impl MediaConfig {
    /// Parse a `cloudinary://<api_key>:<api_secret>@<cloud_name>` URL.
    ///
    /// Anything after `?` in the cloud name is ignored.
    pub fn from_cloudinary_url(url: &str) -> Result<Self, MediaError> {
        let rest = url
            .trim()
            .strip_prefix(SCHEME)
            .ok_or_else(|| MediaError::Config(format!("expected {SCHEME} scheme")))?;

        let (credentials, cloud) = rest
            .rsplit_once('@')
            .ok_or_else(|| MediaError::Config("missing '@<cloud_name>'".into()))?;
        let (api_key, api_secret) = credentials
            .split_once(':')
            .ok_or_else(|| MediaError::Config("missing '<api_key>:<api_secret>'".into()))?;
        let cloud_name = cloud.split(['?', '/']).next().unwrap_or_default();

        if api_key.is_empty() || api_secret.is_empty() || cloud_name.is_empty() {
            return Err(MediaError::Config(
                "api key, api secret and cloud name must all be non-empty".into(),
            ));
        }

        Ok(Self {
            cloud_name: cloud_name.to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
            upload_base_url: DEFAULT_UPLOAD_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default  |
    /// |----------------------|----------|
    /// | `CLOUDINARY_URL`     | required |
    /// | `MEDIA_TIMEOUT_SECS` | `60`     |
    pub fn from_env() -> Self {
        let url = std::env::var("CLOUDINARY_URL").expect("CLOUDINARY_URL must be set");
        let mut config = Self::from_cloudinary_url(&url).expect("CLOUDINARY_URL is invalid");

        config.request_timeout_secs = std::env::var("MEDIA_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("MEDIA_TIMEOUT_SECS must be a valid u64");

        config
    }

    /// Image upload endpoint for this cloud.
    pub fn upload_url(&self) -> String {
        format!("{}/{}/image/upload", self.upload_base_url, self.cloud_name)
    }
}
