//! Text rendering of tile lists for the terminal

use crate::io::session::Session;
use crate::tiles::domino::Tile;

/// A tile as a two-value card, `[a|b]`
pub fn render_tile(tile: Tile) -> String {
    tile.to_string()
}

/// Cards separated by spaces, or `(empty)`
pub fn render_list(tiles: &[Tile]) -> String {
    if tiles.is_empty() {
        return "(empty)".to_string();
    }
    tiles
        .iter()
        .map(|&tile| render_tile(tile))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The seed in array notation, `[[6,1],[4,3]]`
pub fn render_source(seed: &[Tile]) -> String {
    let entries = seed
        .iter()
        .map(|tile| format!("[{},{}]", tile.a, tile.b))
        .collect::<Vec<_>>()
        .join(",");
    format!("[{entries}]")
}

/// Source, doubles count and current cards on three lines
pub fn render_summary(session: &Session) -> String {
    format!(
        "Source: {}\nDoubles: {}\nTiles: {}",
        render_source(session.seed()),
        session.doubles(),
        render_list(session.tiles())
    )
}
