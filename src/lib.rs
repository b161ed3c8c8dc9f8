//! Greedy edge-matching tile placement on an unbounded floor grid
//!
//! Square tiles carry a symbol sequence along each of their four edges. The
//! engine places them on a growable planar grid so that every pair of
//! orthogonally adjacent tiles has mirror-matching edges, rotating tiles as
//! needed and expanding greedily along a FIFO frontier of exposed edges.

#![forbid(unsafe_code)]

/// Placement engine: edge index, glue-edge frontier, and the greedy floor loop
pub mod algorithm;
/// Input/output operations, rendering, and error handling
pub mod io;
/// Spatial primitives: coordinates, tiles, and the growable grid
pub mod spatial;

pub use io::error::{Result, TilingError};
