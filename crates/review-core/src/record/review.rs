//! The review record root.

use serde::Deserialize;
use serde_json::Value;

use crate::de;
use crate::error::ReviewError;
use crate::record::{
    unwrap_envelope, BonusSet, Country, FeaturedImage, GameCategory, GameProvider,
    LanguageOption, PaymentMethod, RelatedCasino, Term, TextItem,
};

/// Wrapper keys around the review object in a query response.
const REVIEW_ENVELOPE: [&str; 3] = ["data", "wpgraphql", "review"];

/// A casino review as returned by the content backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub uri: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub title: String,
    /// Review body, rich text.
    #[serde(default)]
    pub content: Option<String>,
    /// Last modification date as sent by the backend.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub last_edited_by: Option<EditorEdge>,
    #[serde(default)]
    pub seo: Option<Seo>,
    #[serde(default)]
    pub featured_image: Option<FeaturedImage>,
    #[serde(default, rename = "cpt_reviews", deserialize_with = "de::null_as_default")]
    pub fields: ReviewFields,
}

/// SEO metadata of a review.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub meta_desc: Option<String>,
    #[serde(default)]
    pub opengraph_type: Option<String>,
}

/// `lastEditedBy` edge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditorEdge {
    #[serde(default)]
    pub node: Option<Editor>,
}

/// The user who last edited a review.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Editor {
    #[serde(default)]
    pub name: Option<String>,
}

/// The `cpt_reviews` custom field group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFields {
    /// Rating on a 0-10 scale.
    #[serde(default, deserialize_with = "de::lenient_rating")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub affiliate_link: Option<String>,

    #[serde(default)]
    pub pros: Option<Vec<TextItem>>,
    #[serde(default)]
    pub cons: Option<Vec<TextItem>>,
    #[serde(default)]
    pub interesting_facts: Option<Vec<TextItem>>,

    #[serde(default)]
    pub website_language: Option<Vec<Term>>,
    #[serde(default)]
    pub language_options: Option<Vec<LanguageOption>>,
    #[serde(default)]
    pub licensing_authority: Option<Vec<Term>>,

    #[serde(default)]
    pub payment_methods: Option<Vec<PaymentMethod>>,
    #[serde(default)]
    pub available_games: Option<Vec<GameCategory>>,
    #[serde(default)]
    pub game_provider: Option<Vec<GameProvider>>,
    #[serde(default)]
    pub related_casinos: Option<Vec<RelatedCasino>>,

    #[serde(default)]
    pub residents_from: Option<Country>,
    #[serde(default)]
    pub ip_address_from: Option<Term>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub vpn_usage: bool,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub established: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub withdrawal_limit: Option<String>,

    /// `noDepositBonus` … `otherBonus`.
    #[serde(flatten)]
    pub bonuses: BonusSet,
}

impl ReviewRecord {
    /// Parse a review from JSON.
    ///
    /// Accepts the bare review object or a query response wrapping it in
    /// `data.wpgraphql.review`.
    pub fn from_json(json: &str) -> Result<Self, ReviewError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a review from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ReviewError> {
        match unwrap_envelope(value, &REVIEW_ENVELOPE) {
            Value::Null => Err(ReviewError::MissingReview(
                "review is null".to_string(),
            )),
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(ReviewError::MissingReview(format!(
                "expected an object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Name of the last editor, if recorded.
    pub fn author(&self) -> Option<&str> {
        self.last_edited_by
            .as_ref()
            .and_then(|edge| edge.node.as_ref())
            .and_then(|node| node.name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }

    /// Last path segment of the review URI (`/reviews/rox-casino/` → `rox-casino`).
    pub fn slug(&self) -> Option<&str> {
        self.uri.split('/').filter(|s| !s.is_empty()).last()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
