//! Game category and game provider tiles.

use serde::Serialize;

use super::build_facet;
use crate::record::{GameCategory, GameProvider};

/// A linked game category with its icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameCategoryTile {
    pub uri: String,
    pub name: String,
    pub icon: String,
}

impl From<&GameCategory> for GameCategoryTile {
    fn from(category: &GameCategory) -> Self {
        Self {
            uri: category.uri.clone(),
            name: category.name.clone(),
            icon: category.terms.term_icon.media_item_url.clone(),
        }
    }
}

/// A linked game provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameProviderTile {
    pub uri: String,
    pub title: String,
    pub image: Option<String>,
}

/// What a provider tile shows: its logo, or its title when there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFace<'a> {
    Image(&'a str),
    Title(&'a str),
}

impl GameProviderTile {
    pub fn face(&self) -> ProviderFace<'_> {
        match self.image.as_deref() {
            Some(url) => ProviderFace::Image(url),
            None => ProviderFace::Title(&self.title),
        }
    }
}

impl From<&GameProvider> for GameProviderTile {
    fn from(provider: &GameProvider) -> Self {
        Self {
            uri: provider.uri.clone(),
            title: provider.title.clone(),
            image: provider
                .featured_image
                .as_ref()
                .and_then(|image| image.url())
                .map(str::to_string),
        }
    }
}

/// Game category tiles, `None` when the review lists no games.
pub fn build_game_tiles(categories: Option<&[GameCategory]>) -> Option<Vec<GameCategoryTile>> {
    build_facet("available_games", categories, GameCategoryTile::from)
}

/// Game provider tiles, `None` when the review lists no providers.
pub fn build_provider_tiles(providers: Option<&[GameProvider]>) -> Option<Vec<GameProviderTile>> {
    build_facet("game_provider", providers, GameProviderTile::from)
}
