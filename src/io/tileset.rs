//! Tile-set acquisition: the built-in demo set, plain-text files, and
//! seeded random generation
//!
//! The text format is blank-line-separated blocks, each block N lines of N
//! whitespace-separated symbols in 0..=255. Lines starting with `#` are
//! comments. Generated sets are cut from one random symbol board with
//! one-cell overlaps, so adjacent cuts mirror each other's edges and a full
//! tiling exists by construction; whether the greedy pass finds it is up to
//! the algorithm.

use crate::io::configuration::GENERATED_SYMBOL_BOUND;
use crate::io::error::{Result, TilingError, invalid_input};
use crate::spatial::tiles::{Symbol, Tile};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;

/// The eight-tile 4x4 demo set
///
/// # Errors
///
/// Never fails in practice; the signature propagates tile construction
/// errors rather than panicking.
pub fn demo_tiles() -> Result<Vec<Tile>> {
    let specs: [[[Symbol; 4]; 4]; 8] = [
        [[1, 0, 0, 7], [8, 2, 0, 4], [2, 0, 0, 5], [1, 4, 5, 8]],
        [[7, 3, 5, 7], [7, 3, 0, 8], [1, 0, 0, 8], [1, 7, 1, 1]],
        [[1, 0, 4, 1], [7, 4, 0, 8], [3, 0, 0, 2], [7, 8, 8, 8]],
        [[7, 0, 0, 1], [3, 6, 0, 1], [5, 0, 0, 2], [7, 9, 3, 1]],
        [[1, 7, 7, 7], [1, 7, 0, 3], [7, 0, 0, 3], [6, 5, 2, 0]],
        [[8, 2, 8, 1], [5, 8, 0, 1], [4, 0, 0, 1], [1, 5, 3, 1]],
        [[1, 7, 1, 1], [8, 9, 0, 1], [6, 0, 0, 1], [1, 9, 3, 2]],
        [[1, 2, 1, 1], [9, 0, 0, 3], [0, 0, 0, 1], [3, 6, 3, 0]],
    ];

    specs
        .iter()
        .map(|matrix| {
            let rows: Vec<Vec<Symbol>> = matrix.iter().map(|row| row.to_vec()).collect();
            Tile::from_rows(&rows)
        })
        .collect()
}

/// Load a tile set from a plain-text file
///
/// # Errors
///
/// Returns [`TilingError::FileSystem`] if the file cannot be read and
/// [`TilingError::TileSetParse`] on malformed content.
pub fn load_tiles(path: &Path) -> Result<Vec<Tile>> {
    let content = fs::read_to_string(path).map_err(|source| TilingError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;
    parse_tiles(&content, path)
}

/// Parse tile blocks from text
///
/// # Errors
///
/// Returns [`TilingError::TileSetParse`] on unparseable symbols or blocks
/// that do not form a square matrix; `path` only labels the error.
pub fn parse_tiles(content: &str, path: &Path) -> Result<Vec<Tile>> {
    let mut tiles = Vec::new();
    let mut block: Vec<Vec<Symbol>> = Vec::new();
    let mut block_start = 0;

    for (number, raw) in content.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        let line = raw.trim();
        if line.starts_with('#') {
            continue;
        }
        if line.is_empty() {
            flush_block(&mut tiles, &mut block, block_start, path)?;
            continue;
        }

        if block.is_empty() {
            block_start = number;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<Symbol>().map_err(|error| TilingError::TileSetParse {
                    path: path.to_path_buf(),
                    line: number,
                    reason: format!("invalid symbol '{token}': {error}"),
                })
            })
            .collect::<Result<Vec<Symbol>>>()?;
        block.push(row);
    }
    flush_block(&mut tiles, &mut block, block_start, path)?;

    if tiles.is_empty() {
        return Err(TilingError::TileSetParse {
            path: path.to_path_buf(),
            line: 1,
            reason: "file contains no tiles".to_owned(),
        });
    }
    Ok(tiles)
}

/// Convert an accumulated block of rows into a tile
fn flush_block(
    tiles: &mut Vec<Tile>,
    block: &mut Vec<Vec<Symbol>>,
    block_start: usize,
    path: &Path,
) -> Result<()> {
    if block.is_empty() {
        return Ok(());
    }

    let rows = std::mem::take(block);
    let tile = Tile::from_rows(&rows).map_err(|error| TilingError::TileSetParse {
        path: path.to_path_buf(),
        line: block_start,
        reason: error.to_string(),
    })?;
    tiles.push(tile);
    Ok(())
}

/// Generate a mutually matchable tile set from a seeded random board
///
/// Cuts a `rows` x `cols` arrangement of `edge_length`-sized tiles out of
/// one random board, overlapping adjacent cuts by one cell so touching
/// edges mirror. Tiles are returned row-major, left to right.
///
/// # Errors
///
/// Returns [`TilingError::InvalidInput`] for zero dimensions or an edge
/// length below two.
pub fn generated_tiles(
    rows: usize,
    cols: usize,
    edge_length: usize,
    seed: u64,
) -> Result<Vec<Tile>> {
    if rows == 0 || cols == 0 {
        return Err(invalid_input("generated dimensions must be at least 1x1"));
    }
    if edge_length < 2 {
        return Err(invalid_input("generated edge length must be at least 2"));
    }

    let span = edge_length - 1;
    let board_rows = rows * span + 1;
    let board_cols = cols * span + 1;
    let mut rng = StdRng::seed_from_u64(seed);
    let board: Array2<Symbol> = Array2::from_shape_fn((board_rows, board_cols), |_| {
        rng.random_range(0..GENERATED_SYMBOL_BOUND)
    });

    let mut tiles = Vec::with_capacity(rows * cols);
    for tile_row in 0..rows {
        for tile_col in 0..cols {
            let matrix = Array2::from_shape_fn((edge_length, edge_length), |(i, j)| {
                board
                    .get((tile_row * span + i, tile_col * span + j))
                    .copied()
                    .unwrap_or_default()
            });
            tiles.push(Tile::new(matrix)?);
        }
    }
    Ok(tiles)
}
