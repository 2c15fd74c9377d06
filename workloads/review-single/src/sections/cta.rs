//! Closing register button.

use review_core::page::RegisterCta;

use crate::html::{attr, text};

pub fn render_register_cta(cta: &RegisterCta, anchor: &str) -> String {
    format!(
        r#"<div class="register-cta" id="{}">
    <a href="{}" class="btn btn-center btn-big single-review-btn">{}</a>
</div>"#,
        attr(anchor),
        attr(&cta.href),
        text(&cta.label)
    )
}
