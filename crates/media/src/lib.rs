//! Media upload and processing backed by Cloudinary.
//!
//! Handlers depend on the [`MediaUploader`] trait so tests can substitute an
//! in-memory uploader; [`CloudinaryClient`] is the production implementation.

pub mod cloudinary;
pub mod config;
pub mod error;
pub mod uploader;

pub use cloudinary::CloudinaryClient;
pub use config::MediaConfig;
pub use error::MediaError;
pub use uploader::{MediaUploader, UploadOptions, UploadSource};
