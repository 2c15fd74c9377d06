//! Reputation tiers derived from a review rating.

use serde::{Deserialize, Serialize};

use crate::settings::RatingSettings;

/// A discrete reputation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Good,
    VeryGood,
    Perfect,
}

/// Half-open `[low, high)` bands, lowest first.
const TIER_BANDS: [(f64, f64, Tier); 3] = [
    (7.0, 8.0, Tier::Good),
    (8.0, 9.0, Tier::VeryGood),
    (9.0, f64::INFINITY, Tier::Perfect),
];

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Good, Tier::VeryGood, Tier::Perfect];

    /// Display label, also the key used by the settings table.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Good => "Good",
            Tier::VeryGood => "Very Good",
            Tier::Perfect => "Perfect",
        }
    }

    /// CSS modifier class.
    pub fn css_class(&self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::VeryGood => "very-good",
            Tier::Perfect => "perfect",
        }
    }

    /// Resolve a settings label. Exact match only.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.label() == label)
    }

    /// Tier for a rating, or `None` below 7 and for non-finite ratings.
    ///
    /// The top band is open-ended: anything from 9 up is `Perfect`, even past
    /// the nominal scale.
    pub fn for_rating(rating: f64) -> Option<Self> {
        if !rating.is_finite() || rating < 0.0 {
            return None;
        }
        TIER_BANDS
            .iter()
            .find(|(low, high, _)| *low <= rating && rating < *high)
            .map(|(_, _, tier)| *tier)
    }
}

/// Layout of a rating box. Both consume the same [`Reputation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingLayout {
    /// Icon and score on top, reputation label below.
    #[default]
    Block,
    /// Icon and label on the left, score on the right.
    Inline,
}

/// Classifier output for one rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reputation {
    pub tier: Option<Tier>,
    /// Tier label, empty when there is no tier.
    pub label: &'static str,
    /// CSS modifier, empty when there is no tier.
    pub style_class: &'static str,
    /// Icon URL from the settings table.
    pub icon: Option<String>,
    /// The rating as received.
    pub rating: Option<f64>,
}

impl Reputation {
    /// Rating formatted for display (`8.5`, `9`), empty when missing.
    pub fn rating_text(&self) -> String {
        self.rating.map(format_rating).unwrap_or_default()
    }

    /// Whether the rating landed in a tier.
    pub fn has_tier(&self) -> bool {
        self.tier.is_some()
    }
}

/// Classify a rating and resolve its icon.
///
/// Never fails: a missing or out-of-scale rating yields no tier, and a
/// missing settings table or entry yields no icon.
pub fn classify(rating: Option<f64>, settings: Option<&RatingSettings>) -> Reputation {
    let tier = rating.and_then(Tier::for_rating);

    let icon = match (tier, settings) {
        (Some(tier), Some(settings)) => settings.icon_for(tier).map(str::to_string),
        _ => None,
    };

    if tier.is_some() && icon.is_none() {
        tracing::debug!(?tier, "no rating icon configured for tier");
    }
    if tier.is_none() {
        tracing::debug!(?rating, "rating outside every reputation tier");
    }

    Reputation {
        tier,
        label: tier.map(|t| t.label()).unwrap_or(""),
        style_class: tier.map(|t| t.css_class()).unwrap_or(""),
        icon,
        rating,
    }
}

/// Shortest decimal form, the way the CMS value prints in a template.
pub fn format_rating(rating: f64) -> String {
    format!("{}", rating)
}
