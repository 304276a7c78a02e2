//! Request validation for brand kit creation.

use crate::error::CoreError;

/// Longest accepted brand name, in characters.
pub const MAX_BRAND_NAME_LEN: usize = 200;

/// Validate a brand name: non-blank and not absurdly long.
pub fn validate_brand_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Brand kit name is required".into()));
    }
    if name.chars().count() > MAX_BRAND_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Brand kit name must be at most {MAX_BRAND_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate product image URLs: every entry must be non-blank.
pub fn validate_image_urls(urls: &[String]) -> Result<(), CoreError> {
    if let Some(index) = urls.iter().position(|u| u.trim().is_empty()) {
        return Err(CoreError::Validation(format!(
            "image_urls[{index}] must not be empty"
        )));
    }
    Ok(())
}

/// Validate a colors document: must be a JSON object when present.
pub fn validate_colors(colors: &serde_json::Value) -> Result<(), CoreError> {
    if colors.is_object() {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "colors_json must be a JSON object".into(),
        ))
    }
}
