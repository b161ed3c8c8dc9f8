//! Algorithm constants and runtime configuration defaults

/// Initial side length of the floor grid's backing store
pub const INITIAL_GRID_SIZE: usize = 3;

// One symmetric ring; always absorbs a single step past the placed region
/// Cells added per dimension when the grid grows
pub const GRID_GROWTH_STEP: usize = 2;

/// Symbols along one tile edge in the demo and generated sets
pub const DEFAULT_EDGE_LENGTH: usize = 4;

/// Fixed seed for reproducible generated tile sets
pub const DEFAULT_SEED: u64 = 42;

// Generated boards draw from a small alphabet so edges still collide
// occasionally, which exercises the conflict check
/// Exclusive upper bound of the generated symbol alphabet
pub const GENERATED_SYMBOL_BOUND: u8 = 10;
