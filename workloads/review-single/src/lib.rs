//! Single review page - server-rendered HTML for one casino review.
//!
//! This workload:
//! - Composes the page with `review_core` (one pass, no I/O)
//! - Renders each section to HTML in composer order
//! - Seeds tab strips and accordions from their selection groups
//! - Ships a small script applying the same selection transitions on click

mod config;
mod html;
mod sections;
mod shell;

use review_core::page::{PageSection, ReviewPage};
use review_core::{RatingSettings, ReviewRecord};

pub use config::PageConfig;
pub use shell::{HeadContent, Shell};

use sections::{
    render_bonuses, render_game_providers, render_games, render_main, render_payment_methods,
    render_register_cta, render_section_nav, SELECTION_SCRIPT,
};

/// Compose and render a review in one step.
pub fn render_review(
    record: &ReviewRecord,
    settings: Option<&RatingSettings>,
    config: &PageConfig,
) -> String {
    let page = ReviewPage::compose(record, settings);
    render_page(&page, config)
}

/// Render a composed page to a complete HTML document.
pub fn render_page(page: &ReviewPage, config: &PageConfig) -> String {
    let sections: String = page.sections.iter().map(render_section).collect();

    let html = create_shell(page, config).wrap(&sections);
    tracing::info!(
        uri = %page.uri,
        sections = page.sections.len(),
        bytes = html.len(),
        "rendered review page"
    );
    html
}

/// Render one section.
pub fn render_section(section: &PageSection) -> String {
    let anchor = section.anchor();
    match section {
        PageSection::Main(main) => render_main(main, anchor),
        PageSection::SectionNav(nav) => render_section_nav(nav, anchor),
        PageSection::Bonuses(bonuses) => render_bonuses(bonuses, anchor),
        PageSection::PaymentMethods(payments) => render_payment_methods(payments, anchor),
        PageSection::Games(games) => render_games(games, anchor),
        PageSection::GameProviders(providers) => render_game_providers(providers, anchor),
        PageSection::RegisterCta(cta) => render_register_cta(cta, anchor),
    }
}

fn create_shell(page: &ReviewPage, config: &PageConfig) -> Shell {
    let mut head = HeadContent::new(page.head.title.as_str())
        .with_meta("viewport", "width=device-width, initial-scale=1");
    if let Some(description) = &page.head.description {
        head = head.with_meta("description", description);
    }
    if let Some(og_type) = &page.head.og_type {
        head = head.with_property("og:type", og_type);
    }
    for href in &config.stylesheets {
        head = head.with_stylesheet(href);
    }
    if config.inline_styles {
        head = head.with_style(REVIEW_STYLES);
    }

    let site = html::text(&config.name);
    Shell::new(head)
        .with_lang(config.lang.as_str())
        .with_body_start(format!(
            r#"<body class="review-single">
<header class="site-header"><a href="/" class="logo">{}</a></header>
<main>
"#,
            site
        ))
        .with_body_end(format!(
            r#"</main>
<footer class="site-footer"><p>&copy; {}</p></footer>
{}
</body>
</html>"#,
            site, SELECTION_SCRIPT
        ))
}

const REVIEW_STYLES: &str = r##"
:root {
    --gold: #c2a57b;
    --text: #1e293b;
    --text-muted: #64748b;
    --bg-alt: #f8fafc;
    --border: #e2e8f0;
    --good: #5fcc6a;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    color: var(--text);
    line-height: 1.6;
}

main { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }

.site-header, .site-footer { padding: 1rem 1.5rem; border-bottom: 1px solid var(--border); }
.logo { font-weight: 700; color: var(--gold); text-decoration: none; }

.btn {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    background: var(--gold);
    color: #fff;
    border-radius: 6px;
    text-decoration: none;
    font-weight: 600;
}
.btn-center { display: table; margin: 2.5rem auto; }

/* Rating box */
.rating-box { display: inline-flex; flex-direction: column; gap: 0.25rem; }
.rating-box-inline { flex-direction: row; align-items: center; justify-content: space-between; }
.rating-box img { width: 32px; height: 32px; }
.rating-box.good .rating-box__rating { color: #3b82f6; }
.rating-box.very-good .rating-box__rating { color: var(--good); }
.rating-box.perfect .rating-box__rating { color: var(--gold); }
.award-box span { font-size: 2rem; font-weight: 700; color: var(--gold); }

/* Main */
.top-info { display: flex; justify-content: space-between; gap: 2rem; padding: 2rem 0; }
.author-date { color: var(--text-muted); font-size: 0.875rem; }
.review-details { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin: 2rem 0; }
.detail-line { display: flex; align-items: center; gap: 0.5rem; }
.tc-apply { font-size: 0.75rem; color: var(--text-muted); }
.pros-cons { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.related-casinos__list { display: flex; gap: 1rem; flex-wrap: wrap; }

/* Tabs and accordions */
.tab-list { display: flex; gap: 1rem; list-style: none; padding: 0; border-bottom: 1px solid var(--border); }
.tab-list-item a { display: block; padding: 0.75rem 1rem; color: var(--text); text-decoration: none; }
.tab-list-active a { border-bottom: 2px solid var(--gold); font-weight: 600; }
.accordion__head { width: 100%; text-align: left; background: none; border: 0; padding: 0.5rem 0; cursor: pointer; }
.accordion__item.is-active .accordion__head { font-weight: 600; }

/* Bonuses */
.main-bonus-list__item { display: flex; justify-content: space-between; gap: 2rem; padding: 1.5rem; margin: 1rem 0; background: var(--bg-alt); border-radius: 8px; }
.main-bonus-list__item.is-inactive { opacity: 0.6; }
.english-badge { margin-left: 0.5rem; padding: 0 0.375rem; border: 1px solid var(--good); border-radius: 4px; color: var(--good); font-size: 0.75rem; }

/* Facet tables */
.pm-table__head, .pm-table__row { display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; gap: 1rem; padding: 0.75rem 0; border-bottom: 1px solid var(--border); }
.pm-table__head { font-weight: 600; color: var(--text-muted); }
.review-games__list, .review-game-providers__list { display: flex; flex-wrap: wrap; gap: 1rem; }
.game-category, .provider { display: flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1rem; border: 1px solid var(--border); border-radius: 6px; color: var(--text); text-decoration: none; }

@media (max-width: 768px) {
    .top-info, .main-bonus-list__item { flex-direction: column; }
    .review-details, .pros-cons { grid-template-columns: 1fr; }
}
"##;
