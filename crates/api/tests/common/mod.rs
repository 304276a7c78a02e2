#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use brandkit_core::retry::RetryPolicy;
use brandkit_gemini::GeminiError;
use brandkit_media::{MediaError, MediaUploader, UploadOptions, UploadSource};
use brandkit_pipeline::{ContentGenerator, ImageFetcher, LayoutPipeline, PipelineError};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use brandkit_api::config::{LogFormat, ServerConfig};
use brandkit_api::router::build_app_router;
use brandkit_api::state::AppState;

pub const MULTIPART_BOUNDARY: &str = "brandkit-test-boundary";

/// Upload limit used by tests, small enough to exceed cheaply.
pub const TEST_MAX_UPLOAD_BYTES: usize = 1024;

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// Records uploads and returns a URL derived from the public id.
#[derive(Default)]
pub struct FakeMedia {
    pub uploads: Mutex<Vec<(String, UploadOptions)>>,
    pub fail: bool,
}

impl FakeMedia {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> Vec<(String, UploadOptions)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaUploader for FakeMedia {
    async fn upload(
        &self,
        source: UploadSource,
        options: &UploadOptions,
    ) -> Result<String, MediaError> {
        if self.fail {
            return Err(MediaError::Api {
                status: 401,
                message: "Invalid Signature".into(),
            });
        }
        let described = match source {
            UploadSource::Bytes { data, filename } => format!("bytes:{filename}:{}", data.len()),
            UploadSource::Url(url) => format!("url:{url}"),
        };
        self.uploads
            .lock()
            .unwrap()
            .push((described, options.clone()));
        let id = options.public_id.as_deref().unwrap_or("exported");
        Ok(format!("https://res.cloudinary.test/image/upload/{id}.png"))
    }
}

/// Model fake: describes images from their bytes and answers every text
/// prompt with `layout`, or fails every call when `layout` is `None`.
pub struct FakeGenerator {
    pub layout: Option<String>,
    pub text_calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn answering(layout: &str) -> Self {
        Self {
            layout: Some(layout.to_string()),
            text_calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            layout: None,
            text_calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

fn unavailable() -> PipelineError {
    PipelineError::Model(GeminiError::Api {
        status: 503,
        code: Some("UNAVAILABLE".into()),
        message: "The model is overloaded.".into(),
    })
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    async fn describe_image(
        &self,
        _instruction: &str,
        image: &[u8],
        _mime_type: &str,
    ) -> Result<String, PipelineError> {
        Ok(format!("A photo of {}", String::from_utf8_lossy(image)))
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, PipelineError> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.layout.clone().ok_or_else(unavailable)
    }
}

/// Serves the URL itself as image bytes.
pub struct EchoFetcher;

#[async_trait]
impl ImageFetcher for EchoFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, PipelineError> {
        Ok(url.as_bytes().to_vec())
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 1,
        max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        log_format: LogFormat::Pretty,
    }
}

/// Handles to the fakes behind a test app.
pub struct TestApp {
    pub router: Router,
    pub media: Arc<FakeMedia>,
    pub generator: Arc<FakeGenerator>,
}

/// Build the full application router over the given fakes.
///
/// Uses [`build_app_router`] so tests exercise the production middleware
/// stack.
pub fn build_app_with(pool: PgPool, media: FakeMedia, generator: FakeGenerator) -> TestApp {
    let config = test_config();
    let media = Arc::new(media);
    let generator = Arc::new(generator);

    let pipeline = LayoutPipeline::new(
        generator.clone(),
        Arc::new(EchoFetcher),
        RetryPolicy::new(3, Duration::from_millis(1)),
    );

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media: media.clone(),
        pipeline: Arc::new(pipeline),
    };

    TestApp {
        router: build_app_router(state, &config),
        media,
        generator,
    }
}

/// Router with a working media fake and a model answering `{}`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with(pool, FakeMedia::default(), FakeGenerator::answering("{}")).router
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: Vec<u8>) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a multipart form with a single file field.
pub async fn post_file(
    app: Router,
    uri: &str,
    field: &str,
    filename: &str,
    data: &[u8],
) -> Response<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    post_raw(
        app,
        uri,
        &format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        body,
    )
    .await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
