//! Review content record.
//!
//! Mirrors the WPGraphQL `review` query: field names, nesting and
//! nullability follow what the backend returns, so records deserialize
//! straight from the query response.

mod bonus;
mod media;
mod review;
mod terms;

pub use bonus::{BonusRecord, BonusSet, BonusSlot, DetailDropdown};
pub use media::{FeaturedImage, FilteredSize, ImageNode, MediaDetails, MediaItem, TermIcon};
pub use review::{Editor, EditorEdge, ReviewFields, ReviewRecord, Seo};
pub use terms::{
    Country, CountryTerms, GameCategory, GameCategoryTerms, GameProvider, LanguageOption,
    LanguageTerm, LanguageTerms, PaymentMethod, PaymentMethodFields, RelatedCasino,
    RelatedCasinoFields, Term, TextItem,
};

use serde::Serialize;
use serde_json::Value;

/// Opaque HTML from a rich-text CMS field.
///
/// Handed to the renderer verbatim; this crate never parses or sanitizes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RichText(String);

impl RichText {
    /// Wrap a raw HTML fragment.
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Wrap an optional CMS field, treating empty strings as absent.
    pub fn from_field(field: Option<&str>) -> Option<Self> {
        non_empty(field).map(Self::new)
    }

    /// The raw HTML.
    pub fn as_html(&self) -> &str {
        &self.0
    }
}

/// Treat `Some("")` like `None`, as the page templates do.
pub(crate) fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.trim().is_empty())
}

/// Descend through optional wrapper objects.
///
/// Each key is followed only if present, so `{"data": {"wpgraphql": {...}}}`,
/// `{"wpgraphql": {...}}` and the bare inner object all resolve to the same
/// value.
pub(crate) fn unwrap_envelope(mut value: Value, keys: &[&str]) -> Value {
    for key in keys {
        let inner = match value {
            Value::Object(ref mut map) => map.remove(*key),
            _ => None,
        };
        if let Some(inner) = inner {
            value = inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_full_envelope() {
        let value = json!({"data": {"wpgraphql": {"review": {"title": "Rox"}}}});
        let inner = unwrap_envelope(value, &["data", "wpgraphql", "review"]);
        assert_eq!(inner, json!({"title": "Rox"}));
    }

    #[test]
    fn test_unwrap_partial_envelope() {
        let value = json!({"wpgraphql": {"review": {"title": "Rox"}}});
        let inner = unwrap_envelope(value, &["data", "wpgraphql", "review"]);
        assert_eq!(inner, json!({"title": "Rox"}));

        let bare = json!({"title": "Rox"});
        let inner = unwrap_envelope(bare.clone(), &["data", "wpgraphql", "review"]);
        assert_eq!(inner, bare);
    }

    #[test]
    fn test_rich_text_empty_is_absent() {
        assert_eq!(RichText::from_field(Some("  ")), None);
        assert_eq!(RichText::from_field(None), None);
        assert_eq!(
            RichText::from_field(Some("<b>100%</b>")).map(|t| t.as_html().to_string()),
            Some("<b>100%</b>".to_string())
        );
    }
}
