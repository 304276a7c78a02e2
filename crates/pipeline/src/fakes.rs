//! In-process fakes for the model and the image download.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use brandkit_gemini::GeminiError;

use crate::error::PipelineError;
use crate::fetcher::ImageFetcher;
use crate::generator::ContentGenerator;

/// Scripted outcome of one model call.
pub(crate) enum Reply {
    Text(&'static str),
    Empty,
    Unavailable,
    Fatal,
}

impl Reply {
    fn into_result(self) -> Result<String, PipelineError> {
        match self {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Empty => Err(PipelineError::EmptyResponse),
            Reply::Unavailable => Err(PipelineError::Model(GeminiError::Api {
                status: 503,
                code: Some("UNAVAILABLE".into()),
                message: "The model is overloaded.".into(),
            })),
            Reply::Fatal => Err(PipelineError::Model(GeminiError::Api {
                status: 400,
                code: Some("INVALID_ARGUMENT".into()),
                message: "Request contains an invalid argument.".into(),
            })),
        }
    }
}

/// Describes images by echoing their bytes; image bytes starting with
/// `unavailable` or `fatal` fail every time with that kind of error.
/// Text replies are popped from a script, then default to `{}`.
#[derive(Default)]
pub(crate) struct FakeGenerator {
    text_replies: Mutex<VecDeque<Reply>>,
    pub describe_calls: AtomicUsize,
    pub text_calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn with_text_replies(replies: Vec<Reply>) -> Self {
        Self {
            text_replies: Mutex::new(replies.into()),
            ..Self::default()
        }
    }

    pub fn describe_calls(&self) -> usize {
        self.describe_calls.load(Ordering::SeqCst)
    }

    pub fn text_calls(&self) -> usize {
        self.text_calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    async fn describe_image(
        &self,
        _instruction: &str,
        image: &[u8],
        _mime_type: &str,
    ) -> Result<String, PipelineError> {
        self.describe_calls.fetch_add(1, Ordering::SeqCst);
        let body = String::from_utf8_lossy(image);
        if body.starts_with("unavailable") {
            Reply::Unavailable.into_result()
        } else if body.starts_with("fatal") {
            Reply::Fatal.into_result()
        } else {
            Ok(format!("Description of {body}"))
        }
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, PipelineError> {
        self.text_calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self
            .text_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Text("{}"));
        reply.into_result()
    }
}

/// Serves bytes from a fixed map; unknown URLs fail like a 404.
#[derive(Default)]
pub(crate) struct FakeFetcher {
    images: HashMap<String, Vec<u8>>,
    pub calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn with_images<'a>(images: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            images: images
                .into_iter()
                .map(|(url, body)| (url.to_string(), body.as_bytes().to_vec()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.images
            .get(url)
            .cloned()
            .ok_or_else(|| PipelineError::Fetch(format!("{url} returned 404 Not Found")))
    }
}
