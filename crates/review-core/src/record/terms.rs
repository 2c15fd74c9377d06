//! Taxonomy terms and related content sub-records.

use serde::Deserialize;

use crate::de;
use crate::record::{FeaturedImage, MediaItem, TermIcon};

/// A taxonomy term reference (`{ name, slug, uri }`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Term {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

impl Term {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: Some(slug.into()),
            uri: None,
        }
    }
}

/// A repeater row carrying one line of text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextItem {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub text: String,
}

/// A payment method post linked from a review.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub title: String,
    #[serde(default)]
    pub featured_image: Option<FeaturedImage>,
    #[serde(default, rename = "cpt_payment_methods")]
    pub fields: Option<PaymentMethodFields>,
}

/// Custom fields of a payment method.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodFields {
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub deposit_limits: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub withdrawal_limits: Option<String>,
    #[serde(default, deserialize_with = "de::string_or_number")]
    pub withdrawal_time: Option<String>,
}

/// A game category term. Categories always carry an icon.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameCategory {
    pub uri: String,
    pub name: String,
    #[serde(rename = "tax_games_categories")]
    pub terms: GameCategoryTerms,
}

/// Custom fields of a game category term.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCategoryTerms {
    pub term_icon: TermIcon,
}

/// A game provider post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProvider {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub uri: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub title: String,
    #[serde(default)]
    pub featured_image: Option<FeaturedImage>,
}

/// Another review linked as related content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCasino {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub uri: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub title: String,
    #[serde(default)]
    pub featured_image: Option<FeaturedImage>,
    #[serde(default, rename = "cpt_reviews")]
    pub fields: Option<RelatedCasinoFields>,
}

/// The subset of review fields queried for a related review.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RelatedCasinoFields {
    #[serde(default, deserialize_with = "de::lenient_rating")]
    pub rating: Option<f64>,
}

/// A language option row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    #[serde(default)]
    pub option_description: Option<String>,
    #[serde(default)]
    pub language: Option<LanguageTerm>,
}

/// A review language term.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LanguageTerm {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    #[serde(default, rename = "tax_review_languages")]
    pub terms: Option<LanguageTerms>,
}

/// Custom fields of a language term.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageTerms {
    #[serde(default)]
    pub language_icon: Option<MediaItem>,
}

/// A country term.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Country {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub name: String,
    #[serde(default, rename = "tax_review_countries")]
    pub terms: Option<CountryTerms>,
}

/// Custom fields of a country term.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryTerms {
    #[serde(default)]
    pub country_image: Option<MediaItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_numeric_limits() {
        let method: PaymentMethod = serde_json::from_str(
            r#"{
                "title": "Visa",
                "cpt_payment_methods": {"depositLimits": 10, "withdrawalLimits": "$20 - $5000", "withdrawalTime": null}
            }"#,
        )
        .unwrap();

        let fields = method.fields.unwrap();
        assert_eq!(fields.deposit_limits.as_deref(), Some("10"));
        assert_eq!(fields.withdrawal_limits.as_deref(), Some("$20 - $5000"));
        assert_eq!(fields.withdrawal_time, None);
    }

    #[test]
    fn test_game_category_requires_icon() {
        let missing = serde_json::from_str::<GameCategory>(
            r#"{"uri": "/games/slots/", "name": "Slots", "tax_games_categories": {"termIcon": null}}"#,
        );
        assert!(missing.is_err());

        let present: GameCategory = serde_json::from_str(
            r#"{"uri": "/games/slots/", "name": "Slots", "tax_games_categories": {"termIcon": {"mediaItemUrl": "https://cdn.test/slots.svg"}}}"#,
        )
        .unwrap();
        assert_eq!(present.terms.term_icon.media_item_url, "https://cdn.test/slots.svg");
    }
}
