//! Document shell: `<head>` and the body wrapper around the sections.

use crate::html::{attr, text};

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// `<meta name=…>` tags.
    pub meta: Vec<(String, String)>,
    /// `<meta property=…>` tags (Open Graph).
    pub properties: Vec<(String, String)>,
    /// Stylesheet links and inline styles, rendered as-is.
    pub links: Vec<String>,
}

impl HeadContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    pub fn with_property(mut self, property: &str, content: &str) -> Self {
        self.properties
            .push((property.to_string(), content.to_string()));
        self
    }

    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.links
            .push(format!(r#"<link rel="stylesheet" href="{}">"#, attr(href)));
        self
    }

    /// Add inline CSS. Not escaped.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", text(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                attr(name),
                attr(content)
            ));
            html.push('\n');
        }

        for (property, content) in &self.properties {
            html.push_str(&format!(
                r#"<meta property="{}" content="{}">"#,
                attr(property),
                attr(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Document shell wrapping the rendered sections.
#[derive(Debug, Clone)]
pub struct Shell {
    pub lang: String,
    pub head: HeadContent,
    pub body_start: String,
    pub body_end: String,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            lang: "en".to_string(),
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Everything before the first section.
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", attr(&self.lang)));
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Everything after the last section.
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }

    /// The whole document around pre-rendered sections.
    pub fn wrap(&self, sections: &str) -> String {
        let mut html = self.render_opening();
        html.push_str(sections);
        html.push_str(&self.render_closing());
        html
    }
}
