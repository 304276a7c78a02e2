//! Layout generation for a brand kit.
//!
//! A request flows through four steps:
//!
//! 1. [`describer::describe_images`] downloads every product image and asks
//!    the vision model for a short description, concurrently, with a fallback
//!    per image.
//! 2. [`brandkit_core::prompt::assemble`] turns the kit's rules into the
//!    mandates block and picks a layout template.
//! 3. [`layout::generate_layout`] sends template plus context JSON to the
//!    model, cleans the answer and retries until it is valid JSON.
//! 4. [`LayoutPipeline::generate`] ties the steps together and returns the
//!    parsed layout.
//!
//! The model and the image download sit behind [`ContentGenerator`] and
//! [`ImageFetcher`] so the whole flow runs against fakes in tests.

pub mod config;
pub mod context;
pub mod describer;
pub mod error;
pub mod fetcher;
pub mod generator;
pub mod layout;
pub mod pipeline;

#[cfg(test)]
mod fakes;

pub use config::PipelineConfig;
pub use context::GenerationContext;
pub use error::PipelineError;
pub use fetcher::{HttpImageFetcher, ImageFetcher};
pub use generator::ContentGenerator;
pub use pipeline::{LayoutPipeline, LayoutRequest};
