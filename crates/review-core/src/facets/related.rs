//! Related review tiles.

use serde::Serialize;

use super::build_facet;
use crate::record::RelatedCasino;
use crate::reputation::format_rating;

/// A related review. One level deep: nothing nested is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedReviewTile {
    pub uri: String,
    pub title: String,
    pub image: Option<String>,
    pub rating: Option<f64>,
}

impl RelatedReviewTile {
    /// Rating formatted for display, empty when missing.
    pub fn rating_text(&self) -> String {
        self.rating.map(format_rating).unwrap_or_default()
    }
}

impl From<&RelatedCasino> for RelatedReviewTile {
    fn from(casino: &RelatedCasino) -> Self {
        Self {
            uri: casino.uri.clone(),
            title: casino.title.clone(),
            image: casino
                .featured_image
                .as_ref()
                .and_then(|image| image.sized_url())
                .map(str::to_string),
            rating: casino.fields.as_ref().and_then(|f| f.rating),
        }
    }
}

/// Related review tiles, `None` when the review links none.
pub fn build_related_tiles(casinos: Option<&[RelatedCasino]>) -> Option<Vec<RelatedReviewTile>> {
    build_facet("related_casinos", casinos, RelatedReviewTile::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_tile_from_query_shape() {
        let casinos: Vec<RelatedCasino> = serde_json::from_str(
            r#"[
                {
                    "title": "Spin Palace",
                    "uri": "/reviews/spin-palace/",
                    "featuredImage": {"node": {"mediaDetails": {"filteredSizes": [{"sourceUrl": "https://cdn.test/sp-40.png"}]}}},
                    "cpt_reviews": {"rating": 9.1}
                },
                {"title": "Bare Casino", "uri": "/reviews/bare/", "featuredImage": null, "cpt_reviews": null}
            ]"#,
        )
        .unwrap();

        let tiles = build_related_tiles(Some(&casinos)).unwrap();

        assert_eq!(tiles[0].title, "Spin Palace");
        assert_eq!(tiles[0].image.as_deref(), Some("https://cdn.test/sp-40.png"));
        assert_eq!(tiles[0].rating_text(), "9.1");

        assert_eq!(tiles[1].image, None);
        assert_eq!(tiles[1].rating, None);
        assert_eq!(tiles[1].rating_text(), "");
    }

    #[test]
    fn test_absent_related() {
        assert_eq!(build_related_tiles(None), None);
    }
}
