//! Full-document rendering from query-response fixtures.

use review_core::page::ReviewPage;
use review_core::{RatingSettings, ReviewRecord};
use review_single::{render_page, render_review, PageConfig};

const REVIEW: &str = include_str!("fixtures/review.json");
const SETTINGS: &str = include_str!("fixtures/settings.json");

fn render(config: &PageConfig) -> String {
    let record = ReviewRecord::from_json(REVIEW).unwrap();
    let settings = RatingSettings::from_json(SETTINGS).unwrap();
    render_review(&record, Some(&settings), config)
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?} in rendered page"))
}

#[test]
fn test_document_head() {
    let html = render(&PageConfig::default());

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    assert!(html.contains("<title>Rox Casino Review 2021</title>"));
    assert!(html.contains(
        r#"<meta name="description" content="Bonuses, payments &amp; games at Rox Casino">"#
    ));
    assert!(html.contains(r#"<meta property="og:type" content="article">"#));
    assert!(html.contains("<style>"));
}

#[test]
fn test_sections_in_order() {
    let html = render(&PageConfig::default());

    let order = [
        r#"id="review""#,
        r#"id="review-sections""#,
        r#"id="bonuses""#,
        r#"id="payment-methods""#,
        r#"id="games""#,
        r#"id="game-providers""#,
        r#"id="register""#,
    ];
    let positions: Vec<usize> = order.iter().map(|needle| position(&html, needle)).collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_reputation_rendered() {
    let html = render(&PageConfig::default());

    assert!(html.contains(r#"<div class="very-good rating-box">"#));
    assert!(html.contains(r#"<div class="very-good rating-box rating-box-inline">"#));
    assert!(html.contains(r#"<img src="icon-vg.png" alt="">"#));
    assert!(html.contains("Very Good Reputation"));
    assert!(html.contains("8.5 / 10"));
}

#[test]
fn test_rich_text_verbatim_plain_text_escaped() {
    let html = render(&PageConfig::default());

    // Body and bonus texts are CMS HTML.
    assert!(html.contains("<p>Rox Casino opened in <strong>2017</strong>.</p>"));
    assert!(html.contains("<p>No deposit needed</p>"));
    assert!(html.contains("<b>40x</b>"));

    // Plain text fields are escaped.
    assert!(html.contains("<p>Malta Gaming Authority</p>"));
    assert!(html.contains(r#"<li><img src="https://cdn.test/en.png" alt="">Website</li>"#));
}

#[test]
fn test_details_and_placeholders() {
    let html = render(&PageConfig::default());

    assert!(html.contains("Residents from UK"));
    assert!(html.contains("IP addr. from UK"));
    assert!(html.contains("VPN usage"));
    assert!(html.contains("<b>$5000</b> per month"));
    assert!(html.contains(r#"<span class="bonus-name">no deposit bonus</span>"#));
    assert!(html.contains("*T&amp;C's apply"));
    assert!(html.contains("Casinos related to Rox Casino (1)"));
    assert!(html.contains("Author: Anna Petrova"));
    assert!(html.contains("This review was last updated: March 5, 2021"));

    // Skrill has neither withdrawal limits nor time.
    let skrill = position(&html, "<span>Skrill</span>");
    let after = &html[skrill..];
    assert!(after.contains("<span>-</span>"));
}

#[test]
fn test_selection_groups_seeded() {
    let html = render(&PageConfig::default());

    assert!(html.contains(r#"data-selection-group="review-sections" data-selection-mode="tabs" data-selection-active="Bonuses""#));
    assert!(html.contains(r#"data-selection-group="details-payment-methods" data-selection-mode="toggle""#));
    assert!(html.contains(r#"data-selection-group="bonus-no-deposit-bonus""#));
    assert!(html.contains("document.querySelectorAll('[data-selection-group]')"));
}

#[test]
fn test_provider_without_logo_shows_title() {
    let html = render(&PageConfig::default());
    let grid = &html[position(&html, r#"id="game-providers""#)..];

    assert!(grid.contains(r#"<a href="/providers/netent/" class="provider"><img src="https://cdn.test/netent.png" alt=""></a>"#));
    assert!(grid.contains(r#"<a href="/providers/yggdrasil/" class="provider"><span>Yggdrasil</span></a>"#));
}

#[test]
fn test_config_options() {
    let config = PageConfig::default()
        .with_name("Rox Reviews")
        .with_stylesheet("/assets/site.css")
        .without_inline_styles();
    let html = render(&config);

    assert!(html.contains(r#"<link rel="stylesheet" href="/assets/site.css">"#));
    assert!(!html.contains("<style>"));
    assert!(html.contains(r#"<a href="/" class="logo">Rox Reviews</a>"#));
    assert!(html.contains("<p>&copy; Rox Reviews</p>"));
    assert!(html.contains("<title>Rox Casino Review 2021</title>"));
}

#[test]
fn test_sparse_record_omits_sections() {
    let record = ReviewRecord::from_json(
        r#"{"uri": "/reviews/bare/", "title": "Bare Casino", "cpt_reviews": {"paymentMethods": []}}"#,
    )
    .unwrap();
    let page = ReviewPage::compose(&record, None);
    let html = render_page(&page, &PageConfig::default());

    assert!(html.contains(r#"id="payment-methods""#));
    assert!(!html.contains(r#"id="games""#));
    assert!(!html.contains(r#"id="game-providers""#));
    assert!(!html.contains(r#"id="register""#));
    assert!(!html.contains("rating-box__bottom\">Good"));
    assert!(!html.contains(r#"class="bonus-list""#));
}
