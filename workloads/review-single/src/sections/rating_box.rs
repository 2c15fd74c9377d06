//! Rating box in its two layouts.

use review_core::{RatingLayout, Reputation};

use crate::html::{img, text};

/// Render a rating box. Both layouts show the same reputation.
pub fn render_rating_box(reputation: &Reputation, layout: RatingLayout) -> String {
    let icon = img(reputation.icon.as_deref(), "");
    let score = format!("{} / 10", text(&reputation.rating_text()));
    let label = reputation_line(reputation);

    match layout {
        RatingLayout::Block => format!(
            r#"<div class="{}rating-box">
    <div class="rating-box__top">{}<span class="rating-box__rating">{}</span></div>
    <span class="rating-box__bottom">{}</span>
</div>"#,
            modifier(reputation),
            icon,
            score,
            label
        ),
        RatingLayout::Inline => format!(
            r#"<div class="{}rating-box rating-box-inline">
    <div class="rating-box__left">{}<span class="rating-box__rating">{}</span></div>
    <span class="rating-box__right">{}</span>
</div>"#,
            modifier(reputation),
            icon,
            label,
            score
        ),
    }
}

/// The score badge next to the header.
pub fn render_award_badge(reputation: &Reputation) -> String {
    match reputation.rating {
        Some(_) => format!(
            r#"<div class="award-box"><span>{}</span></div>"#,
            text(&reputation.rating_text())
        ),
        None => String::new(),
    }
}

fn reputation_line(reputation: &Reputation) -> String {
    if reputation.has_tier() {
        format!("{} Reputation", reputation.label)
    } else {
        String::new()
    }
}

fn modifier(reputation: &Reputation) -> String {
    if reputation.style_class.is_empty() {
        String::new()
    } else {
        format!("{} ", reputation.style_class)
    }
}
