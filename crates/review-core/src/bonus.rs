//! Bonus listing and full bonus list.

use serde::Serialize;

use crate::record::{
    non_empty, BonusRecord, BonusSet, BonusSlot, MediaItem, ReviewFields, RichText, Term,
};

/// Website language slug that earns the English badge.
pub const ENGLISH_LANGUAGE_SLUG: &str = "english";

/// A bonus line in the review's major-details column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingBonus {
    pub slot: BonusSlot,
    pub name: String,
    pub category_label: String,
    pub terms_apply: bool,
}

/// A row of the dedicated bonus section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullListBonus {
    pub slot: BonusSlot,
    pub name: String,
    pub category_label: String,
    pub has_this_bonus: bool,
    pub show_in_listing: bool,
    pub terms_apply: bool,
    pub promocode: Option<String>,
    pub affiliate_link: Option<String>,
    pub present_text: Option<RichText>,
    pub exclusive_text: Option<RichText>,
    pub final_comment: Option<RichText>,
    pub details: Vec<DetailView>,
    pub has_english_language_support: bool,
}

/// An expandable detail under a bonus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub image: Option<String>,
    pub head: RichText,
    pub body: RichText,
}

/// Derives bonus views from a review's five slots.
///
/// Borrows the set read-only; every build returns a fresh `Vec`.
#[derive(Debug, Clone, Copy)]
pub struct BonusAggregator<'a> {
    bonuses: &'a BonusSet,
    website_language: &'a [Term],
}

impl<'a> BonusAggregator<'a> {
    /// Aggregate a bonus set with no website languages.
    pub fn new(bonuses: &'a BonusSet) -> Self {
        Self {
            bonuses,
            website_language: &[],
        }
    }

    /// Aggregate a review's bonuses against its website languages.
    pub fn for_review(fields: &'a ReviewFields) -> Self {
        Self::new(&fields.bonuses)
            .with_website_language(fields.website_language.as_deref().unwrap_or(&[]))
    }

    /// Set the website languages used for the English badge.
    pub fn with_website_language(mut self, languages: &'a [Term]) -> Self {
        self.website_language = languages;
        self
    }

    /// Slots flagged `showInListing`, in slot order.
    pub fn build_listing(&self) -> Vec<ListingBonus> {
        self.bonuses
            .iter()
            .filter(|(_, record)| record.show_in_listing)
            .map(|(slot, record)| ListingBonus {
                slot,
                name: record.name.clone(),
                category_label: category_label(slot, record),
                terms_apply: record.terms_apply,
            })
            .collect()
    }

    /// All five slots, in slot order, regardless of flags.
    pub fn build_full_list(&self) -> Vec<FullListBonus> {
        let english = self.has_english_language_support();

        self.bonuses
            .iter()
            .map(|(slot, record)| FullListBonus {
                slot,
                name: record.name.clone(),
                category_label: category_label(slot, record),
                has_this_bonus: record.has_this_bonus,
                show_in_listing: record.show_in_listing,
                terms_apply: record.terms_apply,
                promocode: record.promocode.clone(),
                affiliate_link: non_empty(record.bonus_affiliate_link.as_deref())
                    .map(str::to_string),
                present_text: RichText::from_field(record.present_text.as_deref()),
                exclusive_text: RichText::from_field(record.exclusive_text.as_deref()),
                final_comment: RichText::from_field(record.details_final_comment.as_deref()),
                details: record
                    .details_dropdowns
                    .iter()
                    .map(|dropdown| DetailView {
                        image: dropdown
                            .detail_image
                            .as_ref()
                            .and_then(MediaItem::url)
                            .map(str::to_string),
                        head: RichText::new(dropdown.detail_dropdown_head.clone()),
                        body: RichText::new(dropdown.detail_dropdown_body.clone()),
                    })
                    .collect(),
                has_english_language_support: english,
            })
            .collect()
    }

    /// Whether the website languages include English.
    pub fn has_english_language_support(&self) -> bool {
        self.website_language
            .iter()
            .any(|term| term.slug.as_deref() == Some(ENGLISH_LANGUAGE_SLUG))
    }
}

/// Human-readable category of a bonus.
///
/// Uses the record's field group tag when the backend sent one, else the
/// slot's own tag; underscores become spaces either way.
pub fn category_label(slot: BonusSlot, record: &BonusRecord) -> String {
    let tag = non_empty(record.field_group_name.as_deref()).unwrap_or(slot.tag());
    tag.replace('_', " ")
}
