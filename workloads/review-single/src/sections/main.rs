//! Main review section: header, byline, body and the details column.

use review_core::facets::{GameProviderTile, PaymentMethodRow, ProviderFace};
use review_core::page::{MainSection, MajorDetails, RelatedSection};
use review_core::RatingLayout;

use super::rating_box::{render_award_badge, render_rating_box};
use super::selection::{render_accordion, AccordionItem};
use crate::html::{attr, img, text};

/// Render the main section.
pub fn render_main(section: &MainSection, anchor: &str) -> String {
    let heading = section
        .heading
        .as_deref()
        .map(|h| format!("<h1>{}</h1>", text(h)))
        .unwrap_or_default();

    let visit = section
        .affiliate_link
        .as_deref()
        .map(|href| format!(r#"<a href="{}" class="btn">Visit Casino</a>"#, attr(href)))
        .unwrap_or_default();

    let byline = section
        .byline
        .as_ref()
        .map(|b| {
            format!(
                r#"<div class="author-date"><span class="author">Author: {}</span> | <span class="date">This review was last updated: {}</span></div>"#,
                text(&b.author),
                text(&b.updated)
            )
        })
        .unwrap_or_default();

    // Review body is CMS HTML and goes in verbatim.
    let body = section
        .body
        .as_ref()
        .map(|b| format!(r#"<div class="review-content-box">{}</div>"#, b.as_html()))
        .unwrap_or_default();

    format!(
        r#"<section class="review-main" id="{}">
    <div class="top-info">
        <div class="top-info__title">{}{}{}</div>
        <div class="top-info__reputation-box">{}{}</div>
    </div>
    {}
    {}
    {}
    <div class="review-facts-info">{}<div class="pros-cons">{}{}</div>{}</div>
</section>"#,
        attr(anchor),
        img(section.image.as_deref(), "review-logo"),
        heading,
        visit,
        render_rating_box(&section.reputation, RatingLayout::Block),
        render_award_badge(&section.reputation),
        byline,
        body,
        render_details(&section.details),
        render_text_list(section.interesting_facts.as_deref(), "facts", "Interesting Facts"),
        render_text_list(section.pros.as_deref(), "review-pros", "Positives"),
        render_text_list(section.cons.as_deref(), "review-cons", "Negatives"),
        section.related.as_ref().map(render_related).unwrap_or_default()
    )
}

fn render_details(details: &MajorDetails) -> String {
    let mut left = String::new();

    if let Some(residency) = &details.residency {
        left.push_str(&format!(
            r#"<div class="detail-line residents"><span>{}{}</span></div>"#,
            text(&residency.text()),
            img(residency.flag.as_deref(), "")
        ));
    }
    if let Some(ip) = &details.ip_address_from {
        left.push_str(&format!(
            r#"<div class="detail-line ip"><span>IP addr. from {}</span></div>"#,
            text(ip)
        ));
    }
    if details.vpn_usage {
        left.push_str(r#"<div class="detail-line vpn"><span>VPN usage</span></div>"#);
    }
    if !details.bonus_listing.is_empty() {
        let lines: String = details
            .bonus_listing
            .iter()
            .map(|bonus| {
                let terms = if bonus.terms_apply {
                    r#"<span class="tc-apply"> *T&amp;C's apply</span>"#
                } else {
                    ""
                };
                format!(
                    r#"<div class="detail-line"><div class="bonus-info"><span class="bonus-text">{}</span><br><span class="bonus-name">{}</span>{}</div></div>"#,
                    text(&bonus.name),
                    text(&bonus.category_label),
                    terms
                )
            })
            .collect();
        left.push_str(&format!(r#"<div class="bonus-list">{}</div>"#, lines));
    }

    let mut middle = String::new();

    if let Some(options) = &details.language_options {
        let items: String = options
            .iter()
            .map(|option| {
                format!(
                    "<li>{}{}</li>",
                    img(option.icon.as_deref(), ""),
                    text(&option.description)
                )
            })
            .collect();
        middle.push_str(&format!(
            r#"<div class="language-opt"><span>Language options</span><ul>{}</ul></div>"#,
            items
        ));
    }
    if let Some(methods) = &details.payment_methods {
        middle.push_str(&render_accordion(
            "details-payment-methods",
            "payment-methods",
            vec![AccordionItem {
                label: "Payment methods".to_string(),
                head: format!("Payment methods ({})", methods.len()),
                body: payment_method_list(methods),
            }],
        ));
    }
    if let Some(providers) = &details.game_providers {
        middle.push_str(&render_accordion(
            "details-game-providers",
            "game-provider",
            vec![AccordionItem {
                label: "Game providers".to_string(),
                head: format!("Game providers ({})", providers.len()),
                body: provider_list(providers),
            }],
        ));
    }

    let mut right = String::new();

    for (class, label, value) in [
        ("owner", "Owner", details.owner.as_deref()),
        ("established", "Established", details.established.as_deref()),
    ] {
        if let Some(value) = value {
            right.push_str(&format!(
                r#"<div class="{}"><span>{}</span><p>{}</p></div>"#,
                class,
                label,
                text(value)
            ));
        }
    }
    if let Some(limit) = &details.withdrawal_limit {
        right.push_str(&format!(
            r#"<div class="withdrawal-limit"><span>Withdrawal Limit</span><p><b>${}</b> per month</p></div>"#,
            text(limit)
        ));
    }
    if let Some(authorities) = &details.licensing_authorities {
        let names: String = authorities
            .iter()
            .map(|name| format!("<p>{}</p>", text(name)))
            .collect();
        right.push_str(&format!(
            r#"<div class="licensing-authority"><span>Licensing Authority</span>{}</div>"#,
            names
        ));
    }

    format!(
        r#"<div class="review-details">
        <div class="left-side">{}</div>
        <div class="middle-side">{}</div>
        <div class="right-side">{}</div>
    </div>"#,
        left, middle, right
    )
}

fn payment_method_list(methods: &[PaymentMethodRow]) -> String {
    let items: String = methods
        .iter()
        .map(|method| {
            format!(
                "<li>{}<span>{}</span></li>",
                img(method.image.as_deref(), ""),
                text(&method.title)
            )
        })
        .collect();
    format!("<ul>{}</ul>", items)
}

fn provider_list(providers: &[GameProviderTile]) -> String {
    let items: String = providers
        .iter()
        .map(|provider| {
            let face = match provider.face() {
                ProviderFace::Image(src) => img(Some(src), ""),
                ProviderFace::Title(title) => format!("<span>{}</span>", text(title)),
            };
            format!(r#"<li><a href="{}">{}</a></li>"#, attr(&provider.uri), face)
        })
        .collect();
    format!("<ul>{}</ul>", items)
}

fn render_text_list(items: Option<&[String]>, class: &str, heading: &str) -> String {
    let Some(items) = items else {
        return String::new();
    };
    let lines: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", text(item)))
        .collect();
    format!(
        r#"<div class="{}"><h6>{}</h6><ul>{}</ul></div>"#,
        class, heading, lines
    )
}

fn render_related(related: &RelatedSection) -> String {
    let tiles: String = related
        .tiles
        .iter()
        .map(|tile| {
            format!(
                r#"<a href="{}" class="related-casino">{}<span>{}</span><span class="rating">{}</span></a>"#,
                attr(&tile.uri),
                img(tile.image.as_deref(), ""),
                text(&tile.title),
                text(&tile.rating_text())
            )
        })
        .collect();
    format!(
        r#"<div class="related-casinos"><h6>{}</h6><div class="related-casinos__list">{}</div></div>"#,
        text(&related.heading),
        tiles
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_list_absent_renders_nothing() {
        assert_eq!(render_text_list(None, "review-pros", "Positives"), "");

        let html = render_text_list(Some(&["Fast <payouts>".to_string()]), "review-pros", "Positives");
        assert!(html.contains("<h6>Positives</h6>"));
        assert!(html.contains("<li>Fast &lt;payouts&gt;</li>"));
    }

    #[test]
    fn test_provider_list_faces() {
        let providers = vec![
            GameProviderTile {
                uri: "/providers/netent/".to_string(),
                title: "NetEnt".to_string(),
                image: Some("https://cdn.test/netent.png".to_string()),
            },
            GameProviderTile {
                uri: "/providers/yggdrasil/".to_string(),
                title: "Yggdrasil".to_string(),
                image: None,
            },
        ];
        let html = provider_list(&providers);

        assert!(html.contains(r#"<img src="https://cdn.test/netent.png" alt="">"#));
        assert!(!html.contains("<span>NetEnt</span>"));
        assert!(html.contains("<span>Yggdrasil</span>"));
    }
}
