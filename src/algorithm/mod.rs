//! Greedy frontier-expansion placement engine

/// Greedy floor placement loop and query interface
pub mod floor;
/// FIFO glue-edge queue with constant-time eviction
pub mod frontier;
/// Reverse-edge availability index over unplaced tiles
pub mod index;

pub use floor::{Floor, StepOutcome};
