//! Concurrent product image description.

use std::collections::BTreeSet;
use std::sync::Arc;

use brandkit_core::retry::{retry, RetryPolicy};
use brandkit_core::templates::IMAGE_DESCRIPTION_PROMPT;
use tokio::task::JoinSet;

use crate::context::ImageDescriptionMap;
use crate::error::PipelineError;
use crate::fetcher::{detect_mime_type, ImageFetcher};
use crate::generator::ContentGenerator;

/// Description used when an image cannot be described.
pub const FALLBACK_DESCRIPTION: &str = "A product image";

/// Download one image and ask the model to describe it.
///
/// Each attempt downloads the image afresh. A failed download is not
/// transient and ends the attempts.
pub async fn describe_image(
    generator: &dyn ContentGenerator,
    fetcher: &dyn ImageFetcher,
    image_url: &str,
    policy: &RetryPolicy,
) -> Result<String, PipelineError> {
    let description = retry(policy, "describe_image", PipelineError::is_transient, |_| async move {
        let bytes = fetcher.fetch(image_url).await?;
        let mime_type = detect_mime_type(&bytes);
        generator
            .describe_image(IMAGE_DESCRIPTION_PROMPT, &bytes, mime_type)
            .await
    })
    .await?;

    Ok(description.trim().to_string())
}

/// Describe every image concurrently, one task per distinct URL.
///
/// Never fails: an image whose download or description fails gets
/// [`FALLBACK_DESCRIPTION`]. The returned map has exactly one entry per
/// distinct URL. Dropping the future aborts all outstanding tasks.
pub async fn describe_images(
    generator: Arc<dyn ContentGenerator>,
    fetcher: Arc<dyn ImageFetcher>,
    image_urls: &[String],
    policy: RetryPolicy,
) -> ImageDescriptionMap {
    let unique: BTreeSet<&String> = image_urls.iter().collect();

    let mut tasks = JoinSet::new();
    for url in unique {
        let generator = Arc::clone(&generator);
        let fetcher = Arc::clone(&fetcher);
        let url = url.clone();

        tasks.spawn(async move {
            let description =
                match describe_image(generator.as_ref(), fetcher.as_ref(), &url, &policy).await {
                    Ok(description) => description,
                    Err(e) => {
                        tracing::warn!(
                            image_url = %url,
                            error = %e,
                            "Image description failed, using fallback",
                        );
                        FALLBACK_DESCRIPTION.to_string()
                    }
                };
            (url, description)
        });
    }

    let mut descriptions = ImageDescriptionMap::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((url, description)) => {
                descriptions.insert(url, description);
            }
            Err(e) => tracing::error!(error = %e, "Image description task panicked"),
        }
    }

    // A panicked task leaves its URL unset.
    for url in image_urls {
        descriptions
            .entry(url.clone())
            .or_insert_with(|| FALLBACK_DESCRIPTION.to_string());
    }

    descriptions
}
