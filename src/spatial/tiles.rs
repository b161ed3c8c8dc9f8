//! Tile pattern matrices with derived edges and clockwise rotation
//!
//! A tile owns an N x N symbol matrix and caches the four edge sequences read
//! off its sides under a fixed walking convention: Top is row 0 left to
//! right, Left is column 0 bottom to top, Bottom is the last row right to
//! left, Right is the last column top to bottom. Walking every side in the
//! same rotational sense is what makes "my edge equals the reverse of the
//! neighbor's facing edge" the correct gluing test.
//!
//! Rotation swaps in a freshly computed matrix and a relabelled edge set in
//! one assignment each, so no caller ever observes a half-rotated tile.

use crate::io::error::{Result, invalid_input};
use crate::spatial::coordinate::{Coordinate, Side};
use ndarray::Array2;
use std::fmt;

/// A single pattern cell value
pub type Symbol = u8;

/// An ordered, immutable sequence of symbols along one side of a tile
///
/// Structural equality and hashing let edge sequences serve as associative
/// keys in the availability index and the frontier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge(Box<[Symbol]>);

impl Edge {
    /// Create an edge from a symbol sequence
    pub fn new(symbols: impl Into<Box<[Symbol]>>) -> Self {
        Self(symbols.into())
    }

    /// The symbols in side-walking order
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// The symbol-for-symbol reverse of this edge
    ///
    /// Two touching edges glue correctly exactly when each equals the
    /// reverse of the other.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Number of symbols along the edge
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the edge carries no symbols
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A clockwise rotation in quarter-turn steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// No rotation
    #[default]
    R0,
    /// Quarter turn clockwise
    R90,
    /// Half turn
    R180,
    /// Three-quarter turn clockwise
    R270,
}

impl Rotation {
    /// Number of clockwise quarter turns
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }

    /// Rotation in degrees
    pub const fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }

    /// Rotation from a quarter-turn count, wrapping mod 4
    pub const fn from_quarter_turns(turns: usize) -> Self {
        match turns % 4 {
            0 => Self::R0,
            1 => Self::R90,
            2 => Self::R180,
            _ => Self::R270,
        }
    }

    /// The single rotation equivalent to this one followed by `next`
    pub const fn then(self, next: Self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + next.quarter_turns())
    }

    /// Rotation that glues a candidate tile onto a placed tile
    ///
    /// `glue` is the placed tile's side exposing the frontier edge;
    /// `candidate` is the candidate's side whose edge matches it in reverse.
    /// The returned rotation turns the candidate so that side ends up facing
    /// the placed tile.
    pub const fn aligning(glue: Side, candidate: Side) -> Self {
        // candidate side must land on opposite(glue); a clockwise quarter
        // turn moves an edge one position backward in the side cycle
        Self::from_quarter_turns(candidate.index() + 6 - glue.index())
    }

    /// Side of an unrotated tile that faces direction `side` once this
    /// rotation is applied
    pub const fn source_side(self, side: Side) -> Side {
        Side::from_index(side.index() + self.quarter_turns())
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// The four cached edges of a tile, labelled by side
#[derive(Debug, Clone)]
struct EdgeSet {
    top: Edge,
    left: Edge,
    bottom: Edge,
    right: Edge,
}

impl EdgeSet {
    const fn get(&self, side: Side) -> &Edge {
        match side {
            Side::Top => &self.top,
            Side::Left => &self.left,
            Side::Bottom => &self.bottom,
            Side::Right => &self.right,
        }
    }

    /// Relabel edges for a clockwise rotation: the edge that ends up on each
    /// side is the one currently that many positions forward in the cycle
    fn rotated(&self, quarter_turns: usize) -> Self {
        Self {
            top: self.get(Side::from_index(quarter_turns)).clone(),
            left: self.get(Side::from_index(1 + quarter_turns)).clone(),
            bottom: self.get(Side::from_index(2 + quarter_turns)).clone(),
            right: self.get(Side::from_index(3 + quarter_turns)).clone(),
        }
    }
}

/// A square tile: pattern matrix, cached edges, cumulative rotation, and the
/// coordinate it occupies once placed
#[derive(Debug, Clone)]
pub struct Tile {
    matrix: Array2<Symbol>,
    edges: EdgeSet,
    rotation: Rotation,
    coordinate: Option<Coordinate>,
}

impl Tile {
    /// Create a tile from a square pattern matrix
    ///
    /// # Errors
    ///
    /// Returns [`crate::TilingError::InvalidInput`] if the matrix is empty or
    /// not square.
    pub fn new(matrix: Array2<Symbol>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows == 0 || rows != cols {
            return Err(invalid_input(format!(
                "tile matrix must be square and non-empty, got {rows}x{cols}"
            )));
        }

        let edges = derive_edges(&matrix);
        Ok(Self {
            matrix,
            edges,
            rotation: Rotation::R0,
            coordinate: None,
        })
    }

    /// Create a tile from row slices
    ///
    /// # Errors
    ///
    /// Returns [`crate::TilingError::InvalidInput`] if the rows do not form a
    /// non-empty square matrix.
    pub fn from_rows(rows: &[Vec<Symbol>]) -> Result<Self> {
        let n = rows.len();
        if n == 0 || rows.iter().any(|row| row.len() != n) {
            return Err(invalid_input(format!(
                "tile rows must form a square matrix, got {n} rows"
            )));
        }

        let flat: Vec<Symbol> = rows.iter().flatten().copied().collect();
        let matrix = Array2::from_shape_vec((n, n), flat)
            .map_err(|error| invalid_input(format!("tile matrix shape invalid: {error}")))?;
        Self::new(matrix)
    }

    /// Number of symbols along one side
    pub fn edge_length(&self) -> usize {
        self.matrix.nrows()
    }

    /// The current pattern matrix
    pub const fn matrix(&self) -> &Array2<Symbol> {
        &self.matrix
    }

    /// The current edge on the given side
    pub const fn edge(&self, side: Side) -> &Edge {
        self.edges.get(side)
    }

    /// All four current edges in canonical side order
    pub const fn edges(&self) -> [(Side, &Edge); 4] {
        [
            (Side::Top, self.edges.get(Side::Top)),
            (Side::Left, self.edges.get(Side::Left)),
            (Side::Bottom, self.edges.get(Side::Bottom)),
            (Side::Right, self.edges.get(Side::Right)),
        ]
    }

    /// Cumulative rotation applied since construction
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Coordinate this tile occupies, if placed
    pub const fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    /// Whether the tile has been placed on the floor
    pub const fn is_placed(&self) -> bool {
        self.coordinate.is_some()
    }

    /// Rotate the tile clockwise
    ///
    /// Recomputes the matrix and relabels the cached edges together, then
    /// swaps both in so matrix and edges stay mutually consistent at every
    /// observable point.
    pub fn rotate(&mut self, rotation: Rotation) {
        let turns = rotation.quarter_turns();
        if turns == 0 {
            return;
        }

        self.matrix = rotate_matrix(&self.matrix, turns);
        self.edges = self.edges.rotated(turns);
        self.rotation = self.rotation.then(rotation);
    }

    /// First side (in canonical order) whose current edge equals `edge`
    ///
    /// Returns `None` when no side matches; for a sequence known to belong
    /// to this tile that indicates caller bookkeeping gone wrong.
    pub fn side_of_edge(&self, edge: &Edge) -> Option<Side> {
        Side::ALL.into_iter().find(|&side| self.edges.get(side) == edge)
    }

    /// Record the coordinate this tile occupies
    ///
    /// Idempotent; a repeated call moves the tile's recorded position.
    pub const fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinate = Some(coordinate);
    }
}

/// Read the four edges off a matrix under the fixed walking convention
fn derive_edges(matrix: &Array2<Symbol>) -> EdgeSet {
    let n = matrix.nrows();
    let cell = |row: usize, col: usize| matrix.get((row, col)).copied().unwrap_or_default();

    EdgeSet {
        top: Edge::new((0..n).map(|i| cell(0, i)).collect::<Vec<_>>()),
        left: Edge::new((0..n).map(|i| cell(n - 1 - i, 0)).collect::<Vec<_>>()),
        bottom: Edge::new((0..n).map(|i| cell(n - 1, n - 1 - i)).collect::<Vec<_>>()),
        right: Edge::new((0..n).map(|i| cell(i, n - 1)).collect::<Vec<_>>()),
    }
}

/// Geometric clockwise rotation of a square matrix by quarter turns
fn rotate_matrix(matrix: &Array2<Symbol>, quarter_turns: usize) -> Array2<Symbol> {
    let n = matrix.nrows();
    let cell = |row: usize, col: usize| matrix.get((row, col)).copied().unwrap_or_default();

    match quarter_turns % 4 {
        1 => Array2::from_shape_fn((n, n), |(i, j)| cell(n - 1 - j, i)),
        2 => Array2::from_shape_fn((n, n), |(i, j)| cell(n - 1 - i, n - 1 - j)),
        3 => Array2::from_shape_fn((n, n), |(i, j)| cell(j, n - 1 - i)),
        _ => matrix.clone(),
    }
}
