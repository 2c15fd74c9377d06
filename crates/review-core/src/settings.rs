//! Page-global review settings.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::de;
use crate::error::ReviewError;
use crate::record::{unwrap_envelope, MediaItem};
use crate::reputation::Tier;

/// Wrapper keys around the settings group in a query response.
const SETTINGS_ENVELOPE: [&str; 5] = [
    "data",
    "wpgraphql",
    "reviewSettings",
    "option_review_settings",
    "ratings",
];

/// Tier → icon table, fetched once per page and shared by every rating box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingSettings {
    icons: BTreeMap<Tier, String>,
}

/// One `{ ratingLabel, ratingIcon }` row of the settings group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingEntry {
    #[serde(default)]
    pub rating_label: Option<String>,
    #[serde(default)]
    pub rating_icon: Option<MediaItem>,
}

#[derive(Deserialize)]
struct RatingEntries(#[serde(deserialize_with = "de::null_as_default")] Vec<RatingEntry>);

impl RatingSettings {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the icon for a tier.
    pub fn with_icon(mut self, tier: Tier, url: impl Into<String>) -> Self {
        self.icons.insert(tier, url.into());
        self
    }

    /// Build the table from settings rows.
    ///
    /// Labels resolve to tiers once, here. Unknown labels and rows without an
    /// icon are skipped; the first row for a tier wins.
    pub fn from_entries(entries: impl IntoIterator<Item = RatingEntry>) -> Self {
        let mut icons = BTreeMap::new();

        for entry in entries {
            let label = entry.rating_label.unwrap_or_default();
            let Some(tier) = Tier::from_label(&label) else {
                tracing::debug!(label = %label, "ignoring rating settings row with unknown label");
                continue;
            };
            let Some(icon) = entry.rating_icon.as_ref().and_then(MediaItem::url) else {
                tracing::debug!(label = %label, "ignoring rating settings row without an icon");
                continue;
            };
            icons.entry(tier).or_insert_with(|| icon.to_string());
        }

        Self { icons }
    }

    /// Parse the settings from JSON.
    ///
    /// Accepts the `ratings` array, the `{ "ratings": [...] }` group, or a query
    /// response wrapping it in `data.wpgraphql.reviewSettings.option_review_settings`.
    pub fn from_json(json: &str) -> Result<Self, ReviewError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build the table from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ReviewError> {
        let rows = unwrap_envelope(value, &SETTINGS_ENVELOPE);
        let RatingEntries(entries) = serde_json::from_value(rows)?;
        Ok(Self::from_entries(entries))
    }

    /// Icon URL for a tier.
    pub fn icon_for(&self, tier: Tier) -> Option<&str> {
        self.icons.get(&tier).map(String::as_str)
    }

    /// Number of tiers with an icon.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY_RESPONSE: &str = r#"{
        "data": {"wpgraphql": {"reviewSettings": {"option_review_settings": {"ratings": [
            {"ratingLabel": "Good", "ratingIcon": {"mediaItemUrl": "https://cdn.test/good.svg"}},
            {"ratingLabel": "Very Good", "ratingIcon": {"mediaItemUrl": "https://cdn.test/very-good.svg"}},
            {"ratingLabel": "Perfect", "ratingIcon": null},
            {"ratingLabel": "Legendary", "ratingIcon": {"mediaItemUrl": "https://cdn.test/legendary.svg"}},
            {"ratingLabel": "Good", "ratingIcon": {"mediaItemUrl": "https://cdn.test/good-2.svg"}}
        ]}}}}
    }"#;

    #[test]
    fn test_parse_query_response() {
        let settings = RatingSettings::from_json(QUERY_RESPONSE).unwrap();

        assert_eq!(settings.icon_for(Tier::Good), Some("https://cdn.test/good.svg"));
        assert_eq!(
            settings.icon_for(Tier::VeryGood),
            Some("https://cdn.test/very-good.svg")
        );
        assert_eq!(settings.icon_for(Tier::Perfect), None);
        assert_eq!(settings.len(), 2);
    }

    #[test]
    fn test_parse_bare_group_and_array() {
        let group = RatingSettings::from_json(
            r#"{"ratings": [{"ratingLabel": "Perfect", "ratingIcon": {"mediaItemUrl": "p.svg"}}]}"#,
        )
        .unwrap();
        assert_eq!(group.icon_for(Tier::Perfect), Some("p.svg"));

        let array = RatingSettings::from_json(
            r#"[{"ratingLabel": "Perfect", "ratingIcon": {"mediaItemUrl": "p.svg"}}]"#,
        )
        .unwrap();
        assert_eq!(array, group);
    }

    #[test]
    fn test_null_icon_url_skips_only_that_row() {
        let settings = RatingSettings::from_json(
            r#"{"ratings": [
                {"ratingLabel": "Good", "ratingIcon": {"mediaItemUrl": null}},
                {"ratingLabel": "Very Good", "ratingIcon": {"mediaItemUrl": "vg.svg"}},
                {"ratingLabel": "Perfect", "ratingIcon": {"mediaItemUrl": ""}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(settings.icon_for(Tier::Good), None);
        assert_eq!(settings.icon_for(Tier::VeryGood), Some("vg.svg"));
        assert_eq!(settings.icon_for(Tier::Perfect), None);
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_null_ratings_is_empty() {
        let settings = RatingSettings::from_json(r#"{"ratings": null}"#).unwrap();
        assert!(settings.is_empty());
    }
}
