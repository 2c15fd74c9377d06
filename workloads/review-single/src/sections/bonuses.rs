//! Bonus section: all five slots with their details.

use review_core::bonus::FullListBonus;
use review_core::page::BonusSection;
use review_core::RatingLayout;

use super::rating_box::render_rating_box;
use super::selection::{render_accordion, AccordionItem};
use crate::html::{attr, img, text};

/// Render the bonus section.
pub fn render_bonuses(section: &BonusSection, anchor: &str) -> String {
    // Shared by every row.
    let review_info = format!(
        r#"<div class="review-info">{}{}</div>"#,
        img(section.review_image.as_deref(), ""),
        render_rating_box(&section.reputation, RatingLayout::Inline)
    );

    let rows: String = section
        .rows
        .iter()
        .map(|bonus| render_bonus_row(bonus, &review_info))
        .collect();

    format!(
        r#"<section class="main-bonus-list" id="{}">
    <h2>{}</h2>
    {}
</section>"#,
        attr(anchor),
        text(&section.heading),
        rows
    )
}

fn render_bonus_row(bonus: &FullListBonus, review_info: &str) -> String {
    let english = if bonus.has_english_language_support {
        r#"<span class="english-badge" title="English website">EN</span>"#
    } else {
        ""
    };

    // Rich-text fields are inserted verbatim.
    let present = bonus
        .present_text
        .as_ref()
        .map(|t| format!(r#"<div class="present-text">{}</div>"#, t.as_html()))
        .unwrap_or_default();
    let exclusive = bonus
        .exclusive_text
        .as_ref()
        .map(|t| format!(r#"<div class="exclusive-text"><span>{}</span></div>"#, t.as_html()))
        .unwrap_or_default();
    let final_comment = bonus
        .final_comment
        .as_ref()
        .map(|t| format!(r#"<div class="final-comment">{}</div>"#, t.as_html()))
        .unwrap_or_default();

    let details = if bonus.details.is_empty() {
        String::new()
    } else {
        let items = bonus
            .details
            .iter()
            .enumerate()
            .map(|(i, detail)| AccordionItem {
                label: format!("detail-{}", i + 1),
                head: format!("{}{}", img(detail.image.as_deref(), ""), detail.head.as_html()),
                body: detail.body.as_html().to_string(),
            })
            .collect();
        render_accordion(
            &format!("bonus-{}", bonus.slot.tag().replace('_', "-")),
            "bonus-details",
            items,
        )
    };

    let promocode = bonus
        .promocode
        .as_deref()
        .map(|code| {
            format!(
                r#"<div class="promocode-section"><h6>Use promo code in your account</h6><input type="text" readonly value="{}"></div>"#,
                attr(code)
            )
        })
        .unwrap_or_default();

    let get_bonus = bonus
        .affiliate_link
        .as_deref()
        .map(|href| format!(r#"<a href="{}" class="bonus-aff btn">GET BONUS</a>"#, attr(href)))
        .unwrap_or_default();

    format!(
        r#"<div class="main-bonus-list__item{}" data-bonus-slot="{}">
        <div class="left-section">
            <span class="name">{}{}</span>
            <span class="bonus-category">{}</span>
            {}{}{}{}
        </div>
        <div class="right-section">{}{}{}</div>
    </div>"#,
        if bonus.has_this_bonus { "" } else { " is-inactive" },
        bonus.slot.tag(),
        text(&bonus.name),
        english,
        text(&bonus.category_label),
        present,
        exclusive,
        details,
        final_comment,
        review_info,
        promocode,
        get_bonus
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_core::bonus::DetailView;
    use review_core::record::BonusSlot;
    use review_core::RichText;

    fn bonus() -> FullListBonus {
        FullListBonus {
            slot: BonusSlot::Deposit,
            name: "100% up to €500".to_string(),
            category_label: "deposit bonus".to_string(),
            has_this_bonus: true,
            show_in_listing: true,
            terms_apply: false,
            promocode: Some("ROX100".to_string()),
            affiliate_link: Some("https://rox.test/go?a=1&b=2".to_string()),
            present_text: Some(RichText::new("<p>Welcome <em>package</em></p>")),
            exclusive_text: None,
            final_comment: None,
            details: vec![DetailView {
                image: None,
                head: RichText::new("Wagering"),
                body: RichText::new("<b>35x</b>"),
            }],
            has_english_language_support: true,
        }
    }

    #[test]
    fn test_row_keeps_rich_text_verbatim() {
        let html = render_bonus_row(&bonus(), "");

        assert!(html.contains("<p>Welcome <em>package</em></p>"));
        assert!(html.contains("<b>35x</b>"));
        assert!(!html.contains("exclusive-text"));
        assert!(html.contains(r#"value="ROX100""#));
        assert!(html.contains(r#"href="https://rox.test/go?a=1&amp;b=2""#));
        assert!(html.contains("english-badge"));
        assert!(html.contains(r#"data-selection-group="bonus-deposit-bonus""#));
    }

    #[test]
    fn test_inactive_row_is_marked() {
        let mut inactive = bonus();
        inactive.has_this_bonus = false;
        inactive.details.clear();

        let html = render_bonus_row(&inactive, "");
        assert!(html.contains("main-bonus-list__item is-inactive"));
        assert!(!html.contains("data-selection-group"));
    }
}
