//! Error types for tile construction, placement, and tile-set I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// Construction data is malformed
    ///
    /// Covers empty tile sets, non-square matrices, and mixed edge lengths.
    /// Surfaced immediately and never recovered internally.
    InvalidInput {
        /// Description of what is wrong with the input
        reason: String,
    },

    /// Internal bookkeeping reached an impossible state
    ///
    /// Examples: a coordinate still out of bounds after grid growth, or a
    /// satisfied neighbor edge missing from the frontier at eviction time.
    /// Indicates a logic defect, not bad puzzle data; never retried.
    InvariantViolation {
        /// Bookkeeping operation that failed
        operation: &'static str,
        /// Description of the inconsistency
        reason: String,
    },

    /// A queried edge sequence is absent from a tile
    EdgeNotFound {
        /// Index of the tile queried
        tile: usize,
        /// The sequence that failed to match any side
        edge: Box<[u8]>,
    },

    /// A tile-set file failed to parse
    TileSetParse {
        /// Path to the tile-set file
        path: PathBuf,
        /// One-based line where parsing failed
        line: usize,
        /// Description of the malformed content
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => {
                write!(f, "Invalid tile input: {reason}")
            }
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Internal invariant violated during {operation}: {reason}")
            }
            Self::EdgeNotFound { tile, edge } => {
                write!(f, "Edge {edge:?} not found on any side of tile {tile}")
            }
            Self::TileSetParse { path, line, reason } => {
                write!(
                    f,
                    "Failed to parse tile set '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid input error
pub fn invalid_input(reason: impl Into<String>) -> TilingError {
    TilingError::InvalidInput {
        reason: reason.into(),
    }
}

/// Create an internal invariant violation error
pub fn invariant_violation(operation: &'static str, reason: impl Into<String>) -> TilingError {
    TilingError::InvariantViolation {
        operation,
        reason: reason.into(),
    }
}
