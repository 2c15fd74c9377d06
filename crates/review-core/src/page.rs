//! Page composition.
//!
//! Orders the derived facets into the sections of a review page. The only
//! decisions made here are absence checks; every value comes from the
//! classifier, the bonus aggregator or a facet builder.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::bonus::{BonusAggregator, FullListBonus, ListingBonus};
use crate::facets::{
    build_game_tiles, build_language_options, build_licensing, build_payment_rows,
    build_provider_tiles, build_related_tiles, build_residency, build_text_items,
    GameCategoryTile, GameProviderTile, LanguageOptionRow, PaymentMethodRow, RelatedReviewTile,
    ResidencyLine,
};
use crate::record::{non_empty, FeaturedImage, ReviewRecord, RichText};
use crate::reputation::{classify, Reputation};
use crate::settings::RatingSettings;

/// Display format of the "last updated" date.
const BYLINE_DATE_FORMAT: &str = "%B %-d, %Y";

/// `<head>` metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageHead {
    pub title: String,
    pub description: Option<String>,
    pub og_type: Option<String>,
}

/// A composed review page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewPage {
    pub uri: String,
    pub head: PageHead,
    pub sections: Vec<PageSection>,
}

/// One page section, in render order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageSection {
    Main(MainSection),
    SectionNav(SectionNav),
    Bonuses(BonusSection),
    PaymentMethods(FacetSection<PaymentMethodRow>),
    Games(FacetSection<GameCategoryTile>),
    GameProviders(FacetSection<GameProviderTile>),
    RegisterCta(RegisterCta),
}

impl PageSection {
    /// Element id of the section.
    pub fn anchor(&self) -> &'static str {
        match self {
            PageSection::Main(_) => "review",
            PageSection::SectionNav(_) => "review-sections",
            PageSection::Bonuses(_) => "bonuses",
            PageSection::PaymentMethods(_) => "payment-methods",
            PageSection::Games(_) => "games",
            PageSection::GameProviders(_) => "game-providers",
            PageSection::RegisterCta(_) => "register",
        }
    }
}

/// Header, byline, body and the major-details column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainSection {
    /// `"{title} Review"`, absent for an untitled record.
    pub heading: Option<String>,
    pub image: Option<String>,
    pub reputation: Reputation,
    pub affiliate_link: Option<String>,
    pub byline: Option<Byline>,
    pub body: Option<RichText>,
    pub details: MajorDetails,
    pub interesting_facts: Option<Vec<String>>,
    pub pros: Option<Vec<String>>,
    pub cons: Option<Vec<String>>,
    pub related: Option<RelatedSection>,
}

/// Author and last-updated line. Only built when both are known.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Byline {
    pub author: String,
    pub updated: String,
}

/// The key/value column under the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MajorDetails {
    pub residency: Option<ResidencyLine>,
    pub ip_address_from: Option<String>,
    pub vpn_usage: bool,
    /// Flagged bonuses; empty renders no bonus block.
    pub bonus_listing: Vec<ListingBonus>,
    pub language_options: Option<Vec<LanguageOptionRow>>,
    pub payment_methods: Option<Vec<PaymentMethodRow>>,
    pub game_providers: Option<Vec<GameProviderTile>>,
    pub owner: Option<String>,
    pub established: Option<String>,
    /// Monthly limit as entered, without currency.
    pub withdrawal_limit: Option<String>,
    pub licensing_authorities: Option<Vec<String>>,
}

/// "Casinos related to …" block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedSection {
    pub heading: String,
    pub tiles: Vec<RelatedReviewTile>,
}

/// Tab strip over the lower sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionNav {
    pub tabs: Vec<NavTab>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavTab {
    pub label: String,
    pub anchor: &'static str,
}

impl SectionNav {
    /// Tab labels in order; the first is the default.
    pub fn labels(&self) -> Vec<String> {
        self.tabs.iter().map(|tab| tab.label.clone()).collect()
    }
}

/// The full five-slot bonus list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonusSection {
    pub heading: String,
    pub rows: Vec<FullListBonus>,
    /// Shown beside every bonus row.
    pub review_image: Option<String>,
    pub reputation: Reputation,
}

/// A facet table or tile grid. `rows` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetSection<T> {
    pub heading: String,
    pub rows: Vec<T>,
}

/// Closing call to action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterCta {
    pub label: String,
    pub href: String,
}

impl ReviewPage {
    /// Compose the page for one review.
    ///
    /// Order is fixed: main, section nav, bonuses, payment methods, games,
    /// game providers, register. Absent facets drop their section; empty
    /// facets keep it with no rows.
    pub fn compose(record: &ReviewRecord, settings: Option<&RatingSettings>) -> Self {
        let fields = &record.fields;
        let title = record.title.as_str();

        let reputation = classify(fields.rating, settings);
        let bonuses = BonusAggregator::for_review(fields);
        let affiliate_link = non_empty(fields.affiliate_link.as_deref()).map(str::to_string);

        let payment_rows = build_payment_rows(fields.payment_methods.as_deref());
        let provider_tiles = build_provider_tiles(fields.game_provider.as_deref());
        let game_tiles = build_game_tiles(fields.available_games.as_deref());

        let main = MainSection {
            heading: non_empty(Some(title)).map(|t| format!("{} Review", t)),
            image: record
                .featured_image
                .as_ref()
                .and_then(FeaturedImage::display_url)
                .map(str::to_string),
            reputation: reputation.clone(),
            affiliate_link: affiliate_link.clone(),
            byline: byline(record),
            body: RichText::from_field(record.content.as_deref()),
            details: MajorDetails {
                residency: build_residency(fields.residents_from.as_ref()),
                ip_address_from: fields
                    .ip_address_from
                    .as_ref()
                    .and_then(|term| non_empty(Some(term.name.as_str())))
                    .map(str::to_string),
                vpn_usage: fields.vpn_usage,
                bonus_listing: bonuses.build_listing(),
                language_options: build_language_options(fields.language_options.as_deref()),
                payment_methods: payment_rows.clone(),
                game_providers: provider_tiles.clone(),
                owner: non_empty(fields.owner.as_deref()).map(str::to_string),
                established: non_empty(fields.established.as_deref()).map(str::to_string),
                withdrawal_limit: non_empty(fields.withdrawal_limit.as_deref())
                    .map(str::to_string),
                licensing_authorities: build_licensing(fields.licensing_authority.as_deref()),
            },
            interesting_facts: build_text_items(
                "interesting_facts",
                fields.interesting_facts.as_deref(),
            ),
            pros: build_text_items("pros", fields.pros.as_deref()),
            cons: build_text_items("cons", fields.cons.as_deref()),
            related: build_related_tiles(fields.related_casinos.as_deref()).map(|tiles| {
                RelatedSection {
                    heading: format!("Casinos related to {} ({})", title, tiles.len()),
                    tiles,
                }
            }),
        };

        let bonus_section = BonusSection {
            heading: format!("{} Bonus", title),
            rows: bonuses.build_full_list(),
            review_image: main.image.clone(),
            reputation,
        };

        let mut lower = vec![PageSection::Bonuses(bonus_section)];
        if let Some(rows) = payment_rows {
            lower.push(PageSection::PaymentMethods(FacetSection {
                heading: format!("{} Payment methods", title),
                rows,
            }));
        }
        if let Some(rows) = game_tiles {
            lower.push(PageSection::Games(FacetSection {
                heading: format!("{} Games", title),
                rows,
            }));
        }
        if let Some(rows) = provider_tiles {
            lower.push(PageSection::GameProviders(FacetSection {
                heading: format!("{} Game providers", title),
                rows,
            }));
        }

        let nav = SectionNav {
            tabs: lower
                .iter()
                .filter_map(|section| {
                    nav_label(section).map(|label| NavTab {
                        label: label.to_string(),
                        anchor: section.anchor(),
                    })
                })
                .collect(),
        };

        let mut sections = Vec::with_capacity(lower.len() + 3);
        sections.push(PageSection::Main(main));
        sections.push(PageSection::SectionNav(nav));
        sections.extend(lower);

        if let Some(href) = affiliate_link {
            sections.push(PageSection::RegisterCta(RegisterCta {
                label: format!("Register at {}", title),
                href,
            }));
        } else {
            tracing::debug!(uri = %record.uri, "no affiliate link, register button omitted");
        }

        let seo = record.seo.as_ref();
        let head = PageHead {
            title: seo
                .and_then(|s| non_empty(s.title.as_deref()))
                .unwrap_or(title)
                .to_string(),
            description: seo
                .and_then(|s| non_empty(s.meta_desc.as_deref()))
                .map(str::to_string),
            og_type: seo
                .and_then(|s| non_empty(s.opengraph_type.as_deref()))
                .map(str::to_string),
        };

        Self {
            uri: record.uri.clone(),
            head,
            sections,
        }
    }

    /// Section anchors in render order.
    pub fn anchors(&self) -> Vec<&'static str> {
        self.sections.iter().map(PageSection::anchor).collect()
    }

    pub fn main(&self) -> Option<&MainSection> {
        self.sections.iter().find_map(|section| match section {
            PageSection::Main(main) => Some(main),
            _ => None,
        })
    }
}

fn nav_label(section: &PageSection) -> Option<&'static str> {
    match section {
        PageSection::Bonuses(_) => Some("Bonuses"),
        PageSection::PaymentMethods(_) => Some("Payment methods"),
        PageSection::Games(_) => Some("Games"),
        PageSection::GameProviders(_) => Some("Game providers"),
        _ => None,
    }
}

fn byline(record: &ReviewRecord) -> Option<Byline> {
    let author = record.author()?;
    let date = non_empty(record.date.as_deref())?;
    Some(Byline {
        author: author.to_string(),
        updated: format_review_date(date),
    })
}

/// Format a backend date as `March 5, 2021`; unparseable input is kept as-is.
pub fn format_review_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format(BYLINE_DATE_FORMAT).to_string(),
        Err(_) => {
            tracing::debug!(date = raw, "unrecognized review date format");
            raw.to_string()
        }
    }
}
