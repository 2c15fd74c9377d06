//! Media references.

use serde::Deserialize;

use crate::de;
use crate::record::non_empty;

/// A media library item (`{ mediaItemUrl }`).
///
/// The backend sends `null` for a deleted upload; that is no image, not a
/// parse failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(default)]
    pub media_item_url: Option<String>,
}

impl MediaItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            media_item_url: Some(url.into()),
        }
    }

    /// The upload URL, if non-empty.
    pub fn url(&self) -> Option<&str> {
        non_empty(self.media_item_url.as_deref())
    }
}

/// A term icon that must be present for the term to be shown at all.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermIcon {
    pub media_item_url: String,
}

impl TermIcon {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            media_item_url: url.into(),
        }
    }
}

/// A post's featured image edge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeaturedImage {
    #[serde(default)]
    pub node: Option<ImageNode>,
}

/// The image node behind a featured image edge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    #[serde(default)]
    pub media_item_url: Option<String>,
    #[serde(default)]
    pub media_details: Option<MediaDetails>,
}

/// Image size variants generated by the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDetails {
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub filtered_sizes: Vec<FilteredSize>,
}

/// One resized variant of an image.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredSize {
    #[serde(default)]
    pub source_url: Option<String>,
}

impl FeaturedImage {
    /// Build an image edge with only the original URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            node: Some(ImageNode {
                media_item_url: Some(url.into()),
                media_details: None,
            }),
        }
    }

    /// Build an image edge with a single filtered size.
    pub fn from_sized_url(url: impl Into<String>) -> Self {
        Self {
            node: Some(ImageNode {
                media_item_url: None,
                media_details: Some(MediaDetails {
                    filtered_sizes: vec![FilteredSize {
                        source_url: Some(url.into()),
                    }],
                }),
            }),
        }
    }

    /// The original upload URL.
    pub fn url(&self) -> Option<&str> {
        self.node
            .as_ref()
            .and_then(|node| non_empty(node.media_item_url.as_deref()))
    }

    /// The first filtered size, as requested by the query's `filteredSizes(sizes: …)`.
    pub fn sized_url(&self) -> Option<&str> {
        self.node
            .as_ref()
            .and_then(|node| node.media_details.as_ref())
            .and_then(|d| d.filtered_sizes.first())
            .and_then(|s| non_empty(s.source_url.as_deref()))
    }

    /// The first filtered size, else the original upload.
    pub fn display_url(&self) -> Option<&str> {
        self.sized_url().or_else(|| self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_url_reads_first_variant() {
        let image: FeaturedImage = serde_json::from_str(
            r#"{"node": {"mediaDetails": {"filteredSizes": [
                {"sourceUrl": "https://cdn.test/a-70x70.png", "width": "70", "height": "70"},
                {"sourceUrl": "https://cdn.test/a-300x300.png"}
            ]}}}"#,
        )
        .unwrap();

        assert_eq!(image.sized_url(), Some("https://cdn.test/a-70x70.png"));
        assert_eq!(image.url(), None);
    }

    #[test]
    fn test_sized_url_tolerates_null_sizes() {
        let image: FeaturedImage = serde_json::from_str(
            r#"{"node": {"mediaItemUrl": "https://cdn.test/a.png", "mediaDetails": {"filteredSizes": null}}}"#,
        )
        .unwrap();

        assert_eq!(image.sized_url(), None);
        assert_eq!(image.url(), Some("https://cdn.test/a.png"));
        assert_eq!(image.display_url(), Some("https://cdn.test/a.png"));
    }

    #[test]
    fn test_display_url_prefers_sized_variant() {
        let image: FeaturedImage = serde_json::from_str(
            r#"{"node": {
                "mediaItemUrl": "https://cdn.test/a.png",
                "mediaDetails": {"filteredSizes": [{"sourceUrl": "https://cdn.test/a-300x300.png"}]}
            }}"#,
        )
        .unwrap();

        assert_eq!(image.display_url(), Some("https://cdn.test/a-300x300.png"));
    }

    #[test]
    fn test_null_node_is_no_image() {
        let image: FeaturedImage = serde_json::from_str(r#"{"node": null}"#).unwrap();

        assert_eq!(image.url(), None);
        assert_eq!(image.display_url(), None);
    }

    #[test]
    fn test_null_media_url_is_no_image() {
        let item: MediaItem = serde_json::from_str(r#"{"mediaItemUrl": null}"#).unwrap();
        assert_eq!(item.url(), None);

        let empty: MediaItem = serde_json::from_str(r#"{"mediaItemUrl": ""}"#).unwrap();
        assert_eq!(empty.url(), None);

        assert!(serde_json::from_str::<TermIcon>(r#"{"mediaItemUrl": null}"#).is_err());
    }
}
