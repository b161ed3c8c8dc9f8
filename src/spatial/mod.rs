//! Spatial data structures for floor tiling
//!
//! This module contains spatial-related functionality including:
//! - Signed planar coordinates and cardinal sides
//! - Tile pattern matrices with edge derivation and rotation
//! - The growable coordinate-addressed floor grid

/// Signed coordinates and cardinal side directions
pub mod coordinate;
/// Growable tile-slot grid with offset-based addressing
pub mod grid;
/// Tile pattern matrices, edges, and rotation
pub mod tiles;

pub use coordinate::{Coordinate, Side};
pub use grid::Grid;
pub use tiles::{Edge, Rotation, Tile};
