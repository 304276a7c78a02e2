use std::collections::BTreeMap;

use brandkit_core::templates::LayoutTemplate;
use serde::Serialize;

/// Separator between the template text and the context JSON.
pub const CONTEXT_SEPARATOR: &str = "\n\nContext Data:\n";

/// Image URL to description, sorted by URL.
pub type ImageDescriptionMap = BTreeMap<String, String>;

/// Payload handed to the model alongside the layout template.
///
/// Field order and names are part of the prompt; the templates refer to
/// `Colors`, `Logo` and `ImageURLs` by name.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationContext {
    #[serde(rename = "UserPrompt")]
    pub user_prompt: String,
    #[serde(rename = "Colors")]
    pub colors: serde_json::Value,
    #[serde(rename = "Logo")]
    pub logo: String,
    #[serde(rename = "ImageDescriptions")]
    pub image_descriptions: ImageDescriptionMap,
    #[serde(rename = "ImageURLs")]
    pub image_urls: Vec<String>,
}

impl GenerationContext {
    /// Indented JSON for the prompt.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Template text followed by the context block.
    pub fn render_prompt(&self, template: LayoutTemplate) -> Result<String, serde_json::Error> {
        Ok(format!(
            "{}{CONTEXT_SEPARATOR}{}",
            template.text(),
            self.to_json()?
        ))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn context() -> GenerationContext {
        GenerationContext {
            user_prompt: "MANDATORY <b>& more</b>".into(),
            colors: json!({"primary": "#FFF"}),
            logo: "http://x/logo.png".into(),
            image_descriptions: [
                ("http://x/b.png".to_string(), "B".to_string()),
                ("http://x/a.png".to_string(), "A".to_string()),
            ]
            .into_iter()
            .collect(),
            image_urls: vec!["http://x/b.png".into(), "http://x/a.png".into()],
        }
    }

    #[test]
    fn json_keeps_field_order_and_sorts_descriptions() {
        let json = context().to_json().unwrap();

        let positions: Vec<usize> = ["UserPrompt", "Colors", "Logo", "ImageDescriptions", "ImageURLs"]
            .iter()
            .map(|key| json.find(&format!("\"{key}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(json.find("\"http://x/a.png\": \"A\"").unwrap() < json.find("\"http://x/b.png\": \"B\"").unwrap());
        assert!(json.contains("\n  \"Logo\": \"http://x/logo.png\""));
    }

    #[test]
    fn json_does_not_escape_html() {
        let json = context().to_json().unwrap();
        assert!(json.contains("MANDATORY <b>& more</b>"));
    }

    #[test]
    fn prompt_is_template_then_context() {
        let prompt = context()
            .render_prompt(LayoutTemplate::SimplifiedCoordinate)
            .unwrap();

        let (template, rest) = prompt.split_once(CONTEXT_SEPARATOR).unwrap();
        assert_eq!(template, LayoutTemplate::SimplifiedCoordinate.text());
        assert!(rest.starts_with("{\n  \"UserPrompt\""));
    }

    #[test]
    fn serialization_is_deterministic() {
        assert_eq!(context().to_json().unwrap(), context().to_json().unwrap());
    }
}
