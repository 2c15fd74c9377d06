//! Page-level rendering options.

use serde::{Deserialize, Serialize};

/// Site chrome and asset options shared by every rendered review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Site name, shown in the header and footer. The `<title>` is the review's own.
    pub name: String,
    /// `<html lang>` value.
    pub lang: String,
    /// External stylesheet URLs.
    pub stylesheets: Vec<String>,
    /// Embed the built-in stylesheet.
    pub inline_styles: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            name: "Casino Reviews".to_string(),
            lang: "en".to_string(),
            stylesheets: Vec::new(),
            inline_styles: true,
        }
    }
}

impl PageConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    pub fn without_inline_styles(mut self) -> Self {
        self.inline_styles = false;
        self
    }
}
