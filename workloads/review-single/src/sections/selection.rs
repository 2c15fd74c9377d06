//! Accordion and tab-strip markup.
//!
//! Each widget is one `SelectionGroup`. Its initial state decides which item
//! is rendered open; the page script takes over from there using the
//! `data-selection-*` attributes.

use review_core::selection::SelectionGroup;

use crate::html::{attr, text};

/// One collapsible item. `head` and `body` are pre-rendered HTML.
#[derive(Debug, Clone)]
pub struct AccordionItem {
    pub label: String,
    pub head: String,
    pub body: String,
}

/// Render a closed accordion.
pub fn render_accordion(group_id: &str, class: &str, items: Vec<AccordionItem>) -> String {
    let group = SelectionGroup::accordion(items.iter().map(|item| item.label.clone()));

    let items_html: String = items
        .iter()
        .map(|item| {
            let open = group.is_active(&item.label);
            format!(
                r#"<div class="accordion__item{}" data-selection-item="{}">
    <button type="button" class="accordion__head" data-selection-trigger="{}" aria-expanded="{}">{}</button>
    <div class="accordion__body" data-selection-body{}>{}</div>
</div>"#,
                if open { " is-active" } else { "" },
                attr(&item.label),
                attr(&item.label),
                open,
                item.head,
                if open { "" } else { " hidden" },
                item.body
            )
        })
        .collect();

    format!(
        r#"<div class="accordion {}" data-selection-group="{}" data-selection-mode="{}">
{}
</div>"#,
        class,
        attr(group_id),
        group.mode().as_str(),
        items_html
    )
}

/// One tab: a label and the element it links to.
#[derive(Debug, Clone)]
pub struct TabLink {
    pub label: String,
    pub href: String,
}

/// Render a tab strip open on its first tab.
pub fn render_tab_strip(group_id: &str, tabs: &[TabLink]) -> String {
    let mut group = SelectionGroup::tabs(tabs.iter().map(|tab| tab.label.clone()));
    if let Some(first) = tabs.first() {
        if let Err(error) = group.select(&first.label) {
            tracing::debug!(%error, group_id, "tab strip has no default tab");
        }
    }

    let tabs_html: String = tabs
        .iter()
        .map(|tab| {
            let active = group.is_active(&tab.label);
            format!(
                r#"<li class="tab-list-item{}" data-selection-item="{}"><a href="{}" data-selection-trigger="{}" aria-selected="{}">{}</a></li>"#,
                if active { " tab-list-active" } else { "" },
                attr(&tab.label),
                attr(&tab.href),
                attr(&tab.label),
                active,
                text(&tab.label)
            )
        })
        .collect();

    format!(
        r#"<ul class="tab-list" role="tablist" data-selection-group="{}" data-selection-mode="{}" data-selection-active="{}">
{}
</ul>"#,
        attr(group_id),
        group.mode().as_str(),
        group.active().map(|label| attr(label).into_owned()).unwrap_or_default(),
        tabs_html
    )
}

/// Client-side transitions, same table as `SelectionGroup::select`.
pub const SELECTION_SCRIPT: &str = r#"<script>
document.querySelectorAll('[data-selection-group]').forEach(function (group) {
    var mode = group.dataset.selectionMode;
    group.addEventListener('click', function (event) {
        var trigger = event.target.closest('[data-selection-trigger]');
        if (!trigger || trigger.closest('[data-selection-group]') !== group) return;
        var label = trigger.dataset.selectionTrigger;
        var active = group.dataset.selectionActive || '';
        var next = label;
        if (active === label) {
            next = mode === 'toggle' ? '' : label;
        }
        group.dataset.selectionActive = next;
        group.querySelectorAll('[data-selection-item]').forEach(function (item) {
            if (item.closest('[data-selection-group]') !== group) return;
            var open = next !== '' && item.dataset.selectionItem === next;
            item.classList.toggle(mode === 'tabs' ? 'tab-list-active' : 'is-active', open);
            var body = item.querySelector('[data-selection-body]');
            if (body) body.hidden = !open;
            var head = item.querySelector('[data-selection-trigger]');
            if (head) head.setAttribute(mode === 'tabs' ? 'aria-selected' : 'aria-expanded', open);
        });
    });
});
</script>"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &str) -> AccordionItem {
        AccordionItem {
            label: label.to_string(),
            head: format!("<span>{}</span>", label),
            body: "<p>body</p>".to_string(),
        }
    }

    #[test]
    fn test_accordion_renders_closed() {
        let html = render_accordion("payments", "payment-methods", vec![item("Visa"), item("Skrill")]);

        assert!(html.contains(r#"data-selection-group="payments""#));
        assert!(html.contains(r#"data-selection-mode="toggle""#));
        assert_eq!(html.matches("data-selection-body hidden").count(), 2);
        assert!(!html.contains("is-active"));
    }

    #[test]
    fn test_tab_strip_opens_first() {
        let tabs = vec![
            TabLink {
                label: "Bonuses".to_string(),
                href: "#bonuses".to_string(),
            },
            TabLink {
                label: "Games".to_string(),
                href: "#games".to_string(),
            },
        ];
        let html = render_tab_strip("review-sections", &tabs);

        assert!(html.contains(r#"data-selection-mode="tabs""#));
        assert!(html.contains(r#"data-selection-active="Bonuses""#));
        assert_eq!(html.matches("tab-list-active").count(), 1);
        assert!(html.contains(r##"<a href="#games" data-selection-trigger="Games" aria-selected="false">Games</a>"##));
    }

    #[test]
    fn test_empty_tab_strip() {
        let html = render_tab_strip("empty", &[]);
        assert!(html.contains(r#"data-selection-active="""#));
    }
}
