//! Prompt assembly for layout generation.
//!
//! The mandates block is built from an ordered rule table: each rule pairs a
//! predicate with a formatter, and rules are evaluated top to bottom. The
//! order of [`MANDATE_RULES`] is the order of lines in the output.

use crate::rules::{RulesDocument, ValueTile};
use crate::templates::LayoutTemplate;

/// Inputs visible to every mandate rule.
#[derive(Debug, Clone, Copy)]
pub struct MandateInput<'a> {
    pub rules: &'a RulesDocument,
    pub brand_name: &'a str,
}

impl MandateInput<'_> {
    fn outside_simplified_mode(&self) -> bool {
        !self.rules.is_simplified_mode()
    }
}

/// One line of the mandates block.
pub struct MandateRule {
    pub name: &'static str,
    pub applies: fn(&MandateInput<'_>) -> bool,
    pub render: fn(&MandateInput<'_>) -> String,
}

pub const MANDATE_RULES: &[MandateRule] = &[
    MandateRule {
        name: "tone_style",
        applies: always,
        render: render_tone_style,
    },
    MandateRule {
        name: "brand_name",
        applies: always,
        render: render_brand_name,
    },
    MandateRule {
        name: "headline",
        applies: has_headline,
        render: render_headline,
    },
    MandateRule {
        name: "subhead",
        applies: has_subhead,
        render: render_subhead,
    },
    MandateRule {
        name: "alcohol",
        applies: is_alcohol_promotion,
        render: render_alcohol,
    },
    MandateRule {
        name: "footer_tag",
        applies: has_footer_tag,
        render: render_footer_tag,
    },
    MandateRule {
        name: "clubcard_tile",
        applies: has_clubcard_tile,
        render: render_clubcard_tile,
    },
    MandateRule {
        name: "white_tile",
        applies: has_white_tile,
        render: render_white_tile,
    },
    MandateRule {
        name: "new_badge",
        applies: has_new_badge,
        render: render_new_badge,
    },
];

fn always(_: &MandateInput<'_>) -> bool {
    true
}

fn has_headline(input: &MandateInput<'_>) -> bool {
    !input.rules.compliance.headline.is_empty()
}

fn has_subhead(input: &MandateInput<'_>) -> bool {
    !input.rules.compliance.subhead.is_empty()
}

fn is_alcohol_promotion(input: &MandateInput<'_>) -> bool {
    input.rules.compliance.is_alcohol_promotion
}

fn has_footer_tag(input: &MandateInput<'_>) -> bool {
    input.outside_simplified_mode() && input.rules.final_tag().is_some()
}

fn has_clubcard_tile(input: &MandateInput<'_>) -> bool {
    input.outside_simplified_mode()
        && matches!(
            input.rules.compliance.value_tile,
            Some(ValueTile::Clubcard { .. })
        )
}

fn has_white_tile(input: &MandateInput<'_>) -> bool {
    input.outside_simplified_mode()
        && matches!(input.rules.compliance.value_tile, Some(ValueTile::White { .. }))
}

fn has_new_badge(input: &MandateInput<'_>) -> bool {
    input.outside_simplified_mode()
        && matches!(input.rules.compliance.value_tile, Some(ValueTile::New))
}

fn render_tone_style(input: &MandateInput<'_>) -> String {
    format!(
        "DESIGN TONE: {}. STYLE: {}.\n",
        input.rules.tone, input.rules.style
    )
}

fn render_brand_name(input: &MandateInput<'_>) -> String {
    format!("BRAND NAME: {}.\n", input.brand_name)
}

fn render_headline(input: &MandateInput<'_>) -> String {
    format!(
        "MANDATORY HEADLINE: \"{}\"\n",
        input.rules.compliance.headline
    )
}

fn render_subhead(input: &MandateInput<'_>) -> String {
    format!("MANDATORY SUBHEAD: \"{}\"\n", input.rules.compliance.subhead)
}

fn render_alcohol(_: &MandateInput<'_>) -> String {
    "MANDATORY: Include 'Drinkaware.co.uk' logo.\n".to_string()
}

fn render_footer_tag(input: &MandateInput<'_>) -> String {
    format!(
        "MANDATORY FOOTER TAG: \"{}\" (Place at bottom use the logo from assets).\n",
        input.rules.final_tag().unwrap_or_default()
    )
}

fn render_clubcard_tile(input: &MandateInput<'_>) -> String {
    match &input.rules.compliance.value_tile {
        Some(ValueTile::Clubcard {
            offer_price,
            regular_price,
            end_date,
        }) => format!(
            "USE THE CLUBCARD PRICE TILE. Large Price: {offer_price}. \
             Small Regular Price: {regular_price}. Date: {end_date}.\n"
        ),
        _ => String::new(),
    }
}

fn render_white_tile(input: &MandateInput<'_>) -> String {
    match &input.rules.compliance.value_tile {
        Some(ValueTile::White { white_price }) => {
            format!("USE THE WHITE VALUE TILE. Price: {white_price}.\n")
        }
        _ => String::new(),
    }
}

fn render_new_badge(_: &MandateInput<'_>) -> String {
    "USE THE 'NEW' BADGE.\n".to_string()
}

/// Build the mandates block for a kit.
///
/// Pure: identical inputs always produce byte-identical output.
pub fn build_mandates(rules: &RulesDocument, brand_name: &str) -> String {
    let input = MandateInput { rules, brand_name };
    MANDATE_RULES
        .iter()
        .filter(|rule| (rule.applies)(&input))
        .map(|rule| (rule.render)(&input))
        .collect()
}

/// Names of the rules that fire for the given input, in output order.
pub fn applied_rule_names(rules: &RulesDocument, brand_name: &str) -> Vec<&'static str> {
    let input = MandateInput { rules, brand_name };
    MANDATE_RULES
        .iter()
        .filter(|rule| (rule.applies)(&input))
        .map(|rule| rule.name)
        .collect()
}

/// Pick the layout template for a rules document.
pub fn select_template(rules: &RulesDocument) -> LayoutTemplate {
    if rules.is_simplified_mode() {
        LayoutTemplate::SimplifiedCoordinate
    } else {
        LayoutTemplate::GeneralCreative
    }
}

/// Wrap a mandates block in the non-negotiable instruction.
pub fn wrap_mandates(mandates: &str) -> String {
    format!("\nMANDATORY TAGLINE TO INCLUDE (Do not ignore this): \"{mandates}\"\n")
}

/// Everything the layout generator needs from the kit's rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledPrompt {
    /// The raw mandates block.
    pub mandates: String,
    /// Wrapped mandates followed by the creative brief and tagline, if any.
    pub user_prompt: String,
    pub template: LayoutTemplate,
}

/// Assemble the prompt for a kit from its parsed rules and name.
pub fn assemble(rules: &RulesDocument, brand_name: &str) -> AssembledPrompt {
    let mandates = build_mandates(rules, brand_name);
    let mut user_prompt = wrap_mandates(&mandates);

    if !rules.prompt.trim().is_empty() {
        user_prompt.push_str(&format!("CREATIVE BRIEF: {}\n", rules.prompt.trim()));
    }
    if !rules.tagline.trim().is_empty() {
        user_prompt.push_str(&format!("BRAND TAGLINE: \"{}\"\n", rules.tagline.trim()));
    }

    AssembledPrompt {
        mandates,
        user_prompt,
        template: select_template(rules),
    }
}
