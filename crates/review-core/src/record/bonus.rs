//! Bonus slots of a review.

use serde::{Deserialize, Deserializer, Serialize};

use crate::de;
use crate::record::MediaItem;

/// One of the five fixed bonus categories, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusSlot {
    NoDeposit,
    FreeSpins,
    Deposit,
    BestPercentage,
    Other,
}

impl BonusSlot {
    /// All slots in iteration order. There is no other ordering signal.
    pub const ALL: [BonusSlot; 5] = [
        BonusSlot::NoDeposit,
        BonusSlot::FreeSpins,
        BonusSlot::Deposit,
        BonusSlot::BestPercentage,
        BonusSlot::Other,
    ];

    /// Field name in the `cpt_reviews` group.
    pub fn field_name(&self) -> &'static str {
        match self {
            BonusSlot::NoDeposit => "noDepositBonus",
            BonusSlot::FreeSpins => "freeSpinsBonus",
            BonusSlot::Deposit => "depositBonus",
            BonusSlot::BestPercentage => "bestPercentageBonus",
            BonusSlot::Other => "otherBonus",
        }
    }

    /// Machine-readable category tag.
    pub fn tag(&self) -> &'static str {
        match self {
            BonusSlot::NoDeposit => "no_deposit_bonus",
            BonusSlot::FreeSpins => "free_spins_bonus",
            BonusSlot::Deposit => "deposit_bonus",
            BonusSlot::BestPercentage => "best_percentage_bonus",
            BonusSlot::Other => "other_bonus",
        }
    }

    /// Position in [`BonusSlot::ALL`].
    pub fn index(&self) -> usize {
        match self {
            BonusSlot::NoDeposit => 0,
            BonusSlot::FreeSpins => 1,
            BonusSlot::Deposit => 2,
            BonusSlot::BestPercentage => 3,
            BonusSlot::Other => 4,
        }
    }
}

/// A single bonus offer.
///
/// `has_this_bonus` and `show_in_listing` are independent: the listing is
/// driven by `show_in_listing` alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BonusRecord {
    pub field_group_name: Option<String>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub has_this_bonus: bool,
    #[serde(deserialize_with = "de::null_as_default")]
    pub show_in_listing: bool,
    #[serde(rename = "tCApply", deserialize_with = "de::null_as_default")]
    pub terms_apply: bool,
    #[serde(deserialize_with = "de::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "de::string_or_number")]
    pub promocode: Option<String>,
    pub bonus_affiliate_link: Option<String>,
    pub present_text: Option<String>,
    pub exclusive_text: Option<String>,
    pub details_final_comment: Option<String>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub details_dropdowns: Vec<DetailDropdown>,
}

impl BonusRecord {
    /// Create a named bonus with both flags cleared.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the `hasThisBonus` flag.
    pub fn with_has_this_bonus(mut self, value: bool) -> Self {
        self.has_this_bonus = value;
        self
    }

    /// Set the `showInListing` flag.
    pub fn with_show_in_listing(mut self, value: bool) -> Self {
        self.show_in_listing = value;
        self
    }
}

/// An expandable detail row under a bonus.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailDropdown {
    pub detail_image: Option<MediaItem>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub detail_dropdown_head: String,
    #[serde(deserialize_with = "de::null_as_default")]
    pub detail_dropdown_body: String,
}

/// The five bonus slots of a review, as a fixed-size ordered array.
///
/// A slot that is null or missing in the input holds an inactive default
/// record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BonusSet {
    records: [BonusRecord; 5],
}

impl BonusSet {
    /// Build a set from records given in slot order.
    pub fn from_records(records: [BonusRecord; 5]) -> Self {
        Self { records }
    }

    /// Replace the record in one slot.
    pub fn with(mut self, slot: BonusSlot, record: BonusRecord) -> Self {
        self.records[slot.index()] = record;
        self
    }

    /// The record in a slot.
    pub fn get(&self, slot: BonusSlot) -> &BonusRecord {
        &self.records[slot.index()]
    }

    /// Iterate slots in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (BonusSlot, &BonusRecord)> + '_ {
        BonusSlot::ALL.iter().copied().zip(self.records.iter())
    }
}

/// Wire shape: five named fields of the `cpt_reviews` group.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BonusFields {
    #[serde(default)]
    no_deposit_bonus: Option<BonusRecord>,
    #[serde(default)]
    free_spins_bonus: Option<BonusRecord>,
    #[serde(default)]
    deposit_bonus: Option<BonusRecord>,
    #[serde(default)]
    best_percentage_bonus: Option<BonusRecord>,
    #[serde(default)]
    other_bonus: Option<BonusRecord>,
}

impl From<BonusFields> for BonusSet {
    fn from(fields: BonusFields) -> Self {
        Self::from_records([
            fields.no_deposit_bonus.unwrap_or_default(),
            fields.free_spins_bonus.unwrap_or_default(),
            fields.deposit_bonus.unwrap_or_default(),
            fields.best_percentage_bonus.unwrap_or_default(),
            fields.other_bonus.unwrap_or_default(),
        ])
    }
}

impl<'de> Deserialize<'de> for BonusSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        BonusFields::deserialize(deserializer).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order_and_index_agree() {
        for (i, slot) in BonusSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_deserialize_missing_and_null_slots() {
        let set: BonusSet = serde_json::from_str(
            r#"{
                "noDepositBonus": {"name": "€10 Free", "showInListing": true, "tCApply": true},
                "freeSpinsBonus": null
            }"#,
        )
        .unwrap();

        let no_deposit = set.get(BonusSlot::NoDeposit);
        assert_eq!(no_deposit.name, "€10 Free");
        assert!(no_deposit.show_in_listing);
        assert!(!no_deposit.has_this_bonus);
        assert!(no_deposit.terms_apply);

        assert_eq!(set.get(BonusSlot::FreeSpins), &BonusRecord::default());
        assert_eq!(set.get(BonusSlot::Other), &BonusRecord::default());
    }

    #[test]
    fn test_null_flags_and_dropdowns() {
        let record: BonusRecord = serde_json::from_str(
            r#"{"hasThisBonus": null, "showInListing": null, "detailsDropdowns": null, "promocode": 777}"#,
        )
        .unwrap();

        assert!(!record.has_this_bonus);
        assert!(!record.show_in_listing);
        assert!(record.details_dropdowns.is_empty());
        assert_eq!(record.promocode.as_deref(), Some("777"));
    }

    #[test]
    fn test_with_replaces_single_slot() {
        let set = BonusSet::default().with(BonusSlot::Deposit, BonusRecord::named("100% up to €200"));
        let names: Vec<&str> = set.iter().map(|(_, r)| r.name.as_str()).collect();
        assert_eq!(names, vec!["", "", "100% up to €200", "", ""]);
    }
}
