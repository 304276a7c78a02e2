//! Layout generation from template plus context.

use brandkit_core::output::{clean_model_output, is_valid_json};
use brandkit_core::retry::{retry, RetryPolicy};
use brandkit_core::templates::LayoutTemplate;

use crate::context::GenerationContext;
use crate::error::PipelineError;
use crate::generator::ContentGenerator;

/// Ask the model for a layout and return the cleaned JSON text.
///
/// Unavailable service, empty output and output that is not valid JSON
/// after cleaning all consume one attempt of `policy`.
pub async fn generate_layout(
    generator: &dyn ContentGenerator,
    context: &GenerationContext,
    template: LayoutTemplate,
    policy: &RetryPolicy,
) -> Result<String, PipelineError> {
    let prompt = context.render_prompt(template)?;

    retry(policy, "generate_layout", PipelineError::is_transient, |attempt| {
        let prompt = prompt.as_str();
        async move {
            let raw = generator.generate_text(prompt).await?;
            let cleaned = clean_model_output(&raw);
            if is_valid_json(&cleaned) {
                Ok(cleaned)
            } else {
                tracing::debug!(attempt, output_len = cleaned.len(), "Model output is not JSON");
                Err(PipelineError::InvalidJson)
            }
        }
    })
    .await
}
