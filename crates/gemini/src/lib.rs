//! REST client for the Gemini `generateContent` endpoint.
//!
//! Covers the two capabilities the layout pipeline needs: describing an
//! inline image and generating text from a text prompt. Retrying is left to
//! callers; [`GeminiError::is_transient`] tells them when a retry makes sense.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::GeminiError;
pub use types::{GenerateContentRequest, GenerateContentResponse, Part};
