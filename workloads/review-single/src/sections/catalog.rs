//! Game category and game provider grids.

use review_core::facets::{GameCategoryTile, GameProviderTile, ProviderFace};
use review_core::page::FacetSection;

use crate::html::{attr, img, text};

/// Render the games section.
pub fn render_games(section: &FacetSection<GameCategoryTile>, anchor: &str) -> String {
    let tiles: String = section
        .rows
        .iter()
        .map(|tile| {
            format!(
                r#"<a href="{}" class="game-category">{}<span>{}</span></a>"#,
                attr(&tile.uri),
                img(Some(tile.icon.as_str()), ""),
                text(&tile.name)
            )
        })
        .collect();

    render_grid("review-games", anchor, &section.heading, &tiles)
}

/// Render the game providers section.
pub fn render_game_providers(section: &FacetSection<GameProviderTile>, anchor: &str) -> String {
    let tiles: String = section
        .rows
        .iter()
        .map(|tile| {
            let face = match tile.face() {
                ProviderFace::Image(src) => img(Some(src), ""),
                ProviderFace::Title(title) => format!("<span>{}</span>", text(title)),
            };
            format!(
                r#"<a href="{}" class="provider">{}</a>"#,
                attr(&tile.uri),
                face
            )
        })
        .collect();

    render_grid("review-game-providers", anchor, &section.heading, &tiles)
}

fn render_grid(class: &str, anchor: &str, heading: &str, tiles: &str) -> String {
    format!(
        r#"<section class="{class}" id="{}">
    <h2>{}</h2>
    <div class="{class}__list">{}</div>
</section>"#,
        attr(anchor),
        text(heading),
        tiles,
        class = class
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_games_grid() {
        let section = FacetSection {
            heading: "Rox Casino Games".to_string(),
            rows: vec![GameCategoryTile {
                uri: "/games/slots/".to_string(),
                name: "Slots".to_string(),
                icon: "https://cdn.test/slots.svg".to_string(),
            }],
        };
        let html = render_games(&section, "games");

        assert!(html.contains(r#"<section class="review-games" id="games">"#));
        assert!(html.contains(
            r#"<a href="/games/slots/" class="game-category"><img src="https://cdn.test/slots.svg" alt=""><span>Slots</span></a>"#
        ));
    }

    #[test]
    fn test_empty_provider_grid_keeps_shell() {
        let section = FacetSection {
            heading: "Rox Casino Game providers".to_string(),
            rows: Vec::new(),
        };
        let html = render_game_providers(&section, "game-providers");

        assert!(html.contains("<h2>Rox Casino Game providers</h2>"));
        assert!(html.contains(r#"<div class="review-game-providers__list"></div>"#));
    }
}
