//! Text rendering of floors, tiles, and orphan lists
//!
//! Pure formatting over the query interface; no placement logic lives here.

use crate::algorithm::floor::Floor;
use crate::spatial::coordinate::Coordinate;
use crate::spatial::tiles::Tile;

/// Render one matrix row of a tile as `[a, b, c, d]`
fn matrix_row(tile: &Tile, row: usize) -> String {
    let symbols: Vec<String> = tile
        .matrix()
        .row(row)
        .iter()
        .map(ToString::to_string)
        .collect();
    format!("[{}]", symbols.join(", "))
}

/// Render the placed floor over its full current extent
///
/// Each grid row becomes one band of matrix rows; empty cells render as
/// whitespace of the same width so columns stay aligned.
pub fn render_floor(floor: &Floor) -> String {
    let grid = floor.grid();
    let size = grid.size() as i32;
    let offset = grid.offset();
    let edge_length = floor.tiles().first().map_or(0, Tile::edge_length);

    let cell_width = grid
        .coordinates()
        .filter_map(|cell| floor.tile_at(cell))
        .flat_map(|tile| (0..edge_length).map(move |row| matrix_row(tile, row).len()))
        .max()
        .unwrap_or(0);

    let mut out = String::from("Result:\n");
    for y in -offset..size - offset {
        for row in 0..edge_length {
            for x in -offset..size - offset {
                match floor.tile_at(Coordinate::new(x, y)) {
                    Some(tile) => {
                        let cell = matrix_row(tile, row);
                        out.push_str(&format!("{cell:<cell_width$}"));
                    }
                    None => out.push_str(&" ".repeat(cell_width)),
                }
            }
            out.push('\n');
        }
    }
    out
}

/// Render a single tile with its cumulative rotation
pub fn render_tile(tile: &Tile) -> String {
    let mut out = format!("Rotation: {}\n", tile.rotation());
    for row in 0..tile.edge_length() {
        out.push_str(&format!(" {} \n", matrix_row(tile, row)));
    }
    out
}

/// Render the tiles left unplaced after a run
pub fn render_orphans(floor: &Floor) -> String {
    let orphans = floor.orphans();
    if orphans.is_empty() {
        return String::from("Orphan tiles: none\n");
    }

    let mut out = String::from("Orphan tiles:\n");
    for id in orphans {
        if let Some(tile) = floor.tiles().get(id) {
            out.push_str(&format!("Tile {id}:\n"));
            out.push_str(&render_tile(tile));
        }
    }
    out
}
