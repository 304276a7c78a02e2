//! Cleanup of raw model output before it is treated as JSON.

/// Strip whitespace and markdown code fences from a model response.
///
/// Order: trim, drop a leading "```json" (or else a bare "```"), drop a
/// trailing "```", trim again.
pub fn clean_model_output(raw: &str) -> String {
    let trimmed = raw.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let unfenced = unfenced.strip_suffix("```").unwrap_or(unfenced);
    unfenced
        .trim()
        .trim_matches(|c| matches!(c, '\n' | '\r' | '\t' | ' '))
        .to_string()
}

/// Whether `text` is syntactically valid JSON.
pub fn is_valid_json(text: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        assert_eq!(clean_model_output("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(clean_model_output("```\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn clean_json_is_unchanged() {
        assert_eq!(clean_model_output("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn surrounding_whitespace_is_removed() {
        assert_eq!(
            clean_model_output("  \n\t```json\n {\"a\":1} \n```\n  "),
            "{\"a\":1}"
        );
    }

    #[test]
    fn inner_fences_are_left_alone() {
        let raw = "{\"code\":\"```\"}";
        assert_eq!(clean_model_output(raw), raw);
    }

    #[test]
    fn validity_check() {
        assert!(is_valid_json("{\"a\":1}"));
        assert!(is_valid_json("[1,2,3]"));
        assert!(!is_valid_json("{\"a\":"));
        assert!(!is_valid_json("Sure! Here is your layout"));
        assert!(!is_valid_json(""));
    }
}
