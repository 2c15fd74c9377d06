//! Casino review domain types and presentation assembly.
//!
//! This crate turns one fetched review record into the view-models a review
//! page is built from:
//!
//! - **Record**: the `review.cpt_reviews.*` content graph, deserialized as-is
//! - **Reputation**: rating tiers and the tier → icon settings table
//! - **Bonus**: the five bonus slots, listing and full list
//! - **Facets**: payment, game, provider and related-review rows
//! - **Selection**: tab strip / accordion state machine
//! - **Page**: fixed section order with absence checks
//!
//! Everything here is synchronous and pure. Missing data degrades to an
//! omitted section or a blank value, never to an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use review_core::prelude::*;
//!
//! let record = ReviewRecord::from_json(&record_json)?;
//! let settings = RatingSettings::from_json(&settings_json)?;
//!
//! let reputation = classify(record.fields.rating, Some(&settings));
//! println!("{} Reputation", reputation.label);
//!
//! let page = ReviewPage::compose(&record, Some(&settings));
//! for section in &page.sections {
//!     println!("{}", section.anchor());
//! }
//! ```

mod de;

pub mod bonus;
pub mod error;
pub mod facets;
pub mod page;
pub mod record;
pub mod reputation;
pub mod selection;
pub mod settings;

pub use error::ReviewError;
pub use record::{ReviewFields, ReviewRecord, RichText};
pub use reputation::{classify, RatingLayout, Reputation, Tier};
pub use settings::RatingSettings;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{ReviewError, SelectionError};
    pub use crate::record::{
        BonusRecord, BonusSet, BonusSlot, ReviewFields, ReviewRecord, RichText, Term,
    };
    pub use crate::reputation::{classify, RatingLayout, Reputation, Tier};
    pub use crate::settings::RatingSettings;

    // Bonus
    pub use crate::bonus::{BonusAggregator, DetailView, FullListBonus, ListingBonus};

    // Facets
    pub use crate::facets::{
        GameCategoryTile, GameProviderTile, LanguageOptionRow, PaymentMethodRow, ProviderFace,
        RelatedReviewTile, ResidencyLine,
    };

    // Selection
    pub use crate::selection::{Selection, SelectionGroup, SelectionMode};

    // Page
    pub use crate::page::{PageHead, PageSection, ReviewPage};
}
