//! Section navigation tab strip.

use review_core::page::SectionNav;

use super::selection::{render_tab_strip, TabLink};
use crate::html::attr;

/// Render the tab strip linking to the lower sections.
pub fn render_section_nav(nav: &SectionNav, anchor: &str) -> String {
    let tabs: Vec<TabLink> = nav
        .tabs
        .iter()
        .map(|tab| TabLink {
            label: tab.label.clone(),
            href: format!("#{}", tab.anchor),
        })
        .collect();

    format!(
        r#"<nav class="review-tabs" id="{}">
{}
</nav>"#,
        attr(anchor),
        render_tab_strip(anchor, &tabs)
    )
}
