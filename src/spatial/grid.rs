//! Growable square grid of tile slots addressed by signed coordinates
//!
//! Logical coordinates are unbounded and may be negative; the backing store
//! is a bounded `ndarray::Array2` indexed through a centering offset of
//! floor(size / 2). When a placement lands outside the current bounds the
//! store grows by one ring (two cells per dimension) and re-centers every
//! existing entry, which shifts array indices but never the logical
//! coordinate a tile lives at.
//!
//! Growth copies the whole store, so its cost dominates for large sparse
//! tilings; the placement algorithm only ever steps one cell past the placed
//! region, which a single ring always absorbs.

use crate::io::configuration::{GRID_GROWTH_STEP, INITIAL_GRID_SIZE};
use crate::io::error::{Result, invariant_violation};
use crate::spatial::coordinate::Coordinate;
use ndarray::Array2;

/// Square array of tile slots with offset-adjusted coordinate addressing
///
/// Slots hold indices into the placement engine's tile arena rather than
/// tiles themselves, so the grid stays cheap to copy on growth.
#[derive(Debug, Clone)]
pub struct Grid {
    slots: Array2<Option<usize>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid at the initial size
    pub fn new() -> Self {
        Self {
            slots: Array2::from_elem((INITIAL_GRID_SIZE, INITIAL_GRID_SIZE), None),
        }
    }

    /// Current backing-store side length
    pub fn size(&self) -> usize {
        self.slots.nrows()
    }

    /// Centering offset mapping signed coordinates to array indices
    pub fn offset(&self) -> i32 {
        (self.size() / 2) as i32
    }

    /// Backing-store index for a coordinate, if within current bounds
    fn index_of(&self, coordinate: Coordinate) -> Option<(usize, usize)> {
        let offset = self.offset();
        let size = self.size() as i32;
        let row = coordinate.y + offset;
        let col = coordinate.x + offset;
        (row >= 0 && row < size && col >= 0 && col < size)
            .then_some((row as usize, col as usize))
    }

    /// Tile occupying a coordinate, if any
    ///
    /// Out-of-bounds coordinates report as empty; absence is the normal
    /// "no neighbor here" case, not an error.
    pub fn get(&self, coordinate: Coordinate) -> Option<usize> {
        self.index_of(coordinate)
            .and_then(|index| self.slots.get(index).copied())
            .flatten()
    }

    /// Place a tile at a coordinate, growing the store if needed
    ///
    /// # Errors
    ///
    /// Returns [`crate::TilingError::InvariantViolation`] if the coordinate
    /// is still out of bounds after one growth step; the algorithm only ever
    /// places one cell beyond the occupied region, so a longer jump means
    /// broken bookkeeping upstream.
    pub fn set(&mut self, coordinate: Coordinate, tile: usize) -> Result<()> {
        if self.index_of(coordinate).is_none() {
            self.grow();
        }

        let Some(index) = self.index_of(coordinate) else {
            return Err(invariant_violation(
                "grid growth",
                format!(
                    "coordinate ({}, {}) out of bounds after growing to size {}",
                    coordinate.x,
                    coordinate.y,
                    self.size()
                ),
            ));
        };

        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(tile);
                Ok(())
            }
            None => Err(invariant_violation(
                "grid store",
                format!("index {index:?} missing from backing store"),
            )),
        }
    }

    /// Grow the store by one symmetric ring and re-center existing entries
    fn grow(&mut self) {
        let old_size = self.size();
        let new_size = old_size + GRID_GROWTH_STEP;
        let shift = GRID_GROWTH_STEP / 2;
        let mut grown = Array2::from_elem((new_size, new_size), None);

        for row in 0..old_size {
            for col in 0..old_size {
                if let (Some(src), Some(dst)) = (
                    self.slots.get((row, col)),
                    grown.get_mut((row + shift, col + shift)),
                ) {
                    *dst = *src;
                }
            }
        }

        self.slots = grown;
    }

    /// All coordinates within current bounds, row-major top to bottom
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let size = self.size() as i32;
        let offset = self.offset();
        (0..size).flat_map(move |row| {
            (0..size).map(move |col| Coordinate::new(col - offset, row - offset))
        })
    }
}
