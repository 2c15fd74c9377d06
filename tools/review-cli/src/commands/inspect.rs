//! Show what a review page is built from.

use anyhow::Result;
use review_core::bonus::{BonusAggregator, ListingBonus};
use review_core::page::ReviewPage;
use review_core::Reputation;
use serde::Serialize;

use super::{load_record, load_settings, InspectArgs};
use crate::context::Context;
use crate::output::tier_badge;

/// Derived view of one review, as printed by `inspect`.
#[derive(Debug, Serialize)]
pub struct Inspection {
    pub uri: String,
    pub title: String,
    pub reputation: Reputation,
    pub bonus_listing: Vec<ListingBonus>,
    pub bonuses_offered: usize,
    pub english_support: bool,
    pub facets: Vec<FacetCount>,
    pub sections: Vec<&'static str>,
}

/// Row count of one facet; `None` when the facet is absent.
#[derive(Debug, Serialize, PartialEq)]
pub struct FacetCount {
    pub facet: &'static str,
    pub rows: Option<usize>,
}

/// Run the inspect command.
pub fn run(args: InspectArgs, ctx: &Context) -> Result<()> {
    let record = load_record(&ctx.resolve_path(&args.record))?;
    let settings = load_settings(args.settings.as_deref(), ctx)?;
    let page = ReviewPage::compose(&record, settings.as_ref());

    let inspection = inspect(&record, &page);

    if ctx.output.is_json() {
        ctx.output.json(&inspection);
        return Ok(());
    }

    print_inspection(&inspection, ctx);
    Ok(())
}

/// Collect the derived values for a composed page.
pub fn inspect(record: &review_core::ReviewRecord, page: &ReviewPage) -> Inspection {
    let fields = &record.fields;
    let bonuses = BonusAggregator::for_review(fields);
    let full_list = bonuses.build_full_list();

    let facets = vec![
        FacetCount {
            facet: "paymentMethods",
            rows: fields.payment_methods.as_ref().map(Vec::len),
        },
        FacetCount {
            facet: "availableGames",
            rows: fields.available_games.as_ref().map(Vec::len),
        },
        FacetCount {
            facet: "gameProvider",
            rows: fields.game_provider.as_ref().map(Vec::len),
        },
        FacetCount {
            facet: "languageOptions",
            rows: fields.language_options.as_ref().map(Vec::len),
        },
        FacetCount {
            facet: "relatedCasinos",
            rows: fields.related_casinos.as_ref().map(Vec::len),
        },
    ];

    Inspection {
        uri: record.uri.clone(),
        title: record.title.clone(),
        reputation: page
            .main()
            .map(|main| main.reputation.clone())
            .unwrap_or_else(|| review_core::classify(fields.rating, None)),
        bonus_listing: bonuses.build_listing(),
        bonuses_offered: full_list.iter().filter(|bonus| bonus.has_this_bonus).count(),
        english_support: bonuses.has_english_language_support(),
        facets,
        sections: page.anchors(),
    }
}

fn print_inspection(inspection: &Inspection, ctx: &Context) {
    let reputation = &inspection.reputation;

    ctx.output.header(&inspection.title);
    ctx.output.kv("URI", &inspection.uri);
    ctx.output.kv("Rating", &reputation.rating_text());
    ctx.output.kv("Reputation", &tier_badge(reputation.label));
    ctx.output
        .kv("Icon", reputation.icon.as_deref().unwrap_or("-"));
    ctx.output.kv(
        "English support",
        if inspection.english_support { "yes" } else { "no" },
    );

    ctx.output.header(&format!(
        "Bonus listing ({} of {} offered)",
        inspection.bonus_listing.len(),
        inspection.bonuses_offered
    ));
    for bonus in &inspection.bonus_listing {
        let terms = if bonus.terms_apply { " *T&C's apply" } else { "" };
        ctx.output
            .list_item(&format!("{} ({}){}", bonus.name, bonus.category_label, terms));
    }

    ctx.output.header("Facets");
    for count in &inspection.facets {
        let rows = match count.rows {
            Some(rows) => rows.to_string(),
            None => "absent".to_string(),
        };
        ctx.output.kv(count.facet, &rows);
    }

    ctx.output.header("Sections");
    for anchor in &inspection.sections {
        ctx.output.list_item(anchor);
    }
}
