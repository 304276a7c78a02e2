//! Brand rules stored on a kit as `rules_text`.
//!
//! The design tool serializes a [`RulesDocument`] into the text column, but
//! older kits (and hand-written ones) hold plain prose. [`RulesDocument::parse`]
//! accepts both: anything that is not a valid rules document becomes a
//! document whose `prompt` is the raw text.

use serde::{Deserialize, Deserializer};

/// Creative mode tag selecting the simplified coordinate template
/// ("low everyday prices" placement rules).
pub const SIMPLIFIED_CREATIVE_MODE: &str = "lep";

/// Footer tag the design tool fills in by default; treated as absent.
pub const DEFAULT_FINAL_TAG: &str = "Selected stores. While stocks last.";

/// Parsed form of a kit's `rules_text`.
///
/// A `null` on any field reads as that field's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RulesDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub prompt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub style: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tagline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub compliance: ComplianceInfo,
}

/// Retail compliance flags attached to a rules document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComplianceInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subhead: String,
    #[serde(alias = "creativeMode", deserialize_with = "null_as_default")]
    pub creative_mode: String,
    #[serde(alias = "isAlcoholPromotion", deserialize_with = "null_as_default")]
    pub is_alcohol_promotion: bool,
    #[serde(
        alias = "final_tag",
        alias = "tescoFinalTag",
        deserialize_with = "null_as_default"
    )]
    pub tesco_final_tag: String,
    #[serde(alias = "valueTile")]
    pub value_tile: Option<ValueTile>,
}

/// Price display component requested for the layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawValueTile")]
pub enum ValueTile {
    /// Loyalty-card promotion: large offer price, small regular price, end date.
    Clubcard {
        offer_price: String,
        regular_price: String,
        end_date: String,
    },
    /// Plain white price tag.
    White { white_price: String },
    /// "New product" badge.
    New,
    /// Missing or unrecognised `type` (including `"none"`); renders nothing.
    Unknown,
}

/// Flat wire form of a value tile. Every field is optional so a tile with
/// a missing `type` or `null` prices still parses.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawValueTile {
    #[serde(deserialize_with = "null_as_default")]
    r#type: String,
    #[serde(alias = "offerPrice", deserialize_with = "null_as_default")]
    offer_price: String,
    #[serde(alias = "regularPrice", deserialize_with = "null_as_default")]
    regular_price: String,
    #[serde(alias = "endDate", deserialize_with = "null_as_default")]
    end_date: String,
    #[serde(alias = "whitePrice", deserialize_with = "null_as_default")]
    white_price: String,
}

impl From<RawValueTile> for ValueTile {
    fn from(raw: RawValueTile) -> Self {
        match raw.r#type.as_str() {
            "clubcard" => ValueTile::Clubcard {
                offer_price: raw.offer_price,
                regular_price: raw.regular_price,
                end_date: raw.end_date,
            },
            "white" => ValueTile::White {
                white_price: raw.white_price,
            },
            "new" => ValueTile::New,
            _ => ValueTile::Unknown,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RulesDocument {
    /// Parse stored rules text, falling back to free-text prompt semantics.
    ///
    /// Only a JSON *object* counts as a structured document. A bare JSON
    /// string or number is prose that happens to be valid JSON.
    pub fn parse(rules_text: &str) -> Self {
        let trimmed = rules_text.trim_start();
        if trimmed.starts_with('{') {
            match serde_json::from_str::<RulesDocument>(rules_text) {
                Ok(doc) => return doc,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Rules text is not a valid rules document, using it as a free-text prompt",
                    );
                }
            }
        }

        Self {
            prompt: rules_text.to_string(),
            ..Self::default()
        }
    }

    /// Whether the simplified coordinate template applies.
    pub fn is_simplified_mode(&self) -> bool {
        self.compliance.creative_mode == SIMPLIFIED_CREATIVE_MODE
    }

    /// The footer tag, unless it is empty or the tool's default text.
    pub fn final_tag(&self) -> Option<&str> {
        let tag = self.compliance.tesco_final_tag.as_str();
        if tag.is_empty() || tag == DEFAULT_FINAL_TAG {
            None
        } else {
            Some(tag)
        }
    }
}
