use std::sync::Arc;

use brandkit_core::prompt;
use brandkit_core::retry::RetryPolicy;
use brandkit_core::rules::RulesDocument;

use crate::context::GenerationContext;
use crate::describer::describe_images;
use crate::error::PipelineError;
use crate::fetcher::ImageFetcher;
use crate::generator::ContentGenerator;
use crate::layout::generate_layout;

/// The kit data a layout is generated from.
#[derive(Debug, Clone)]
pub struct LayoutRequest<'a> {
    pub brand_name: &'a str,
    /// Stored rules text; empty when the kit has none.
    pub rules_text: &'a str,
    pub colors: &'a serde_json::Value,
    /// Logo URL; empty when the kit has none.
    pub logo_url: &'a str,
    /// Product image URLs in kit order.
    pub image_urls: Vec<String>,
}

/// Long-lived layout generator shared by all requests.
pub struct LayoutPipeline {
    generator: Arc<dyn ContentGenerator>,
    fetcher: Arc<dyn ImageFetcher>,
    retry: RetryPolicy,
}

impl LayoutPipeline {
    pub fn new(
        generator: Arc<dyn ContentGenerator>,
        fetcher: Arc<dyn ImageFetcher>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            generator,
            fetcher,
            retry,
        }
    }

    /// Describe the images, assemble the prompt and generate the layout.
    pub async fn generate(
        &self,
        request: LayoutRequest<'_>,
    ) -> Result<serde_json::Value, PipelineError> {
        let image_descriptions = describe_images(
            Arc::clone(&self.generator),
            Arc::clone(&self.fetcher),
            &request.image_urls,
            self.retry,
        )
        .await;

        let rules = RulesDocument::parse(request.rules_text);
        let assembled = prompt::assemble(&rules, request.brand_name);

        tracing::debug!(
            template = assembled.template.name(),
            mandates = ?prompt::applied_rule_names(&rules, request.brand_name),
            images = request.image_urls.len(),
            "Assembled layout prompt",
        );

        let context = GenerationContext {
            user_prompt: assembled.user_prompt,
            colors: request.colors.clone(),
            logo: request.logo_url.to_string(),
            image_descriptions,
            image_urls: request.image_urls,
        };

        let layout =
            generate_layout(self.generator.as_ref(), &context, assembled.template, &self.retry)
                .await?;

        serde_json::from_str(&layout).map_err(|_| PipelineError::InvalidJson)
    }
}
