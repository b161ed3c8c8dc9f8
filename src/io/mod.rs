//! Input/output operations, rendering, and error handling

/// Command-line interface and placement orchestration
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Placement progress reporting
pub mod progress;
/// Text rendering of floors and tiles
pub mod render;
/// Tile-set acquisition: demo set, file parsing, and random generation
pub mod tileset;
