//! Payment methods table.

use review_core::facets::PaymentMethodRow;
use review_core::page::FacetSection;

use crate::html::{attr, img, text};

/// Render the payment methods section. An empty list renders the header row only.
pub fn render_payment_methods(section: &FacetSection<PaymentMethodRow>, anchor: &str) -> String {
    let rows: String = section
        .rows
        .iter()
        .map(|row| {
            format!(
                r#"<div class="pm-table__row">
            <span class="pm-table__method">{}<span>{}</span></span>
            <span>{}</span>
            <span>{}</span>
            <span>{}</span>
        </div>"#,
                img(row.image.as_deref(), ""),
                text(&row.title),
                text(&row.deposit_limits),
                text(&row.withdrawal_limits),
                text(&row.withdrawal_time)
            )
        })
        .collect();

    format!(
        r#"<section class="pm-section" id="{}">
    <h2>{}</h2>
    <div class="pm-table">
        <div class="pm-table__head">
            <span>Payment Method</span>
            <span>Deposit<br>Limits &amp; Fees</span>
            <span>Withdrawal<br>Limits &amp; Fees</span>
            <span>Withdrawal<br>Time</span>
        </div>
        {}
    </div>
</section>"#,
        attr(anchor),
        text(&section.heading),
        rows
    )
}
