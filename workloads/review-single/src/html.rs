//! Escaping helpers shared by the section renderers.

use std::borrow::Cow;

/// Escape text content.
pub(crate) fn text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escape a double-quoted attribute value.
pub(crate) fn attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// `<img>` tag, or nothing without a source.
pub(crate) fn img(src: Option<&str>, class: &str) -> String {
    match src {
        Some(src) if class.is_empty() => format!(r#"<img src="{}" alt="">"#, attr(src)),
        Some(src) => format!(r#"<img class="{}" src="{}" alt="">"#, class, attr(src)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaping() {
        assert_eq!(text("Tom & <Jerry>"), "Tom &amp; &lt;Jerry&gt;");
        assert_eq!(attr(r#"a"b"#), "a&quot;b");
        assert_eq!(img(None, "logo"), "");
        assert_eq!(
            img(Some("https://cdn.test/a.png?x=1&y=2"), ""),
            r#"<img src="https://cdn.test/a.png?x=1&amp;y=2" alt="">"#
        );
    }
}
