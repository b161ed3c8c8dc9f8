//! Command-line interface for placing tile sets on a floor

use crate::algorithm::floor::{Floor, StepOutcome};
use crate::io::configuration::{DEFAULT_EDGE_LENGTH, DEFAULT_SEED};
use crate::io::error::{Result, TilingError, invalid_input};
use crate::io::progress::PlacementProgress;
use crate::io::render::{render_floor, render_orphans};
use crate::io::tileset::{demo_tiles, generated_tiles, load_tiles};
use crate::spatial::tiles::Tile;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "floortile")]
#[command(
    author,
    version,
    about = "Place edge-matching square tiles with a greedy frontier algorithm"
)]
/// Command-line arguments for the floor tiling tool
pub struct Cli {
    /// Tile-set file to place (defaults to the built-in demo set)
    #[arg(value_name = "TILESET")]
    pub tileset: Option<PathBuf>,

    /// Generate a random mutually matchable tile set, e.g. 4x6
    #[arg(short, long, value_name = "ROWSxCOLS", conflicts_with = "tileset")]
    pub generate: Option<String>,

    /// Random seed for generated tile sets
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the rendered floor to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates tile-set acquisition, placement, and output
pub struct FloorProcessor {
    cli: Cli,
}

impl FloorProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Place the requested tile set and emit the rendered result
    ///
    /// # Errors
    ///
    /// Returns an error if tile-set acquisition, placement, or output fails.
    pub fn process(&mut self) -> Result<()> {
        let tiles = self.collect_tiles()?;
        let mut floor = Floor::new(tiles)?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| PlacementProgress::new(floor.tiles().len()));

        loop {
            match floor.step()? {
                StepOutcome::Exhausted => break,
                StepOutcome::Placed { .. } => {
                    if let Some(bar) = &progress {
                        bar.placed(floor.placed_count());
                    }
                }
                StepOutcome::Unmatched => {}
            }
        }

        if let Some(bar) = &progress {
            bar.finish(floor.placed_count(), floor.orphans().len());
        }

        let mut report = render_floor(&floor);
        report.push('\n');
        report.push_str(&render_orphans(&floor));
        self.emit(&report)
    }

    fn collect_tiles(&self) -> Result<Vec<Tile>> {
        if let Some(spec) = &self.cli.generate {
            let (rows, cols) = parse_dimensions(spec)?;
            return generated_tiles(rows, cols, DEFAULT_EDGE_LENGTH, self.cli.seed);
        }
        if let Some(path) = &self.cli.tileset {
            return load_tiles(path);
        }
        demo_tiles()
    }

    // Allow print for the primary user-facing output channel
    #[allow(clippy::print_stdout)]
    fn emit(&self, report: &str) -> Result<()> {
        match &self.cli.output {
            Some(path) => {
                std::fs::write(path, report).map_err(|source| TilingError::FileSystem {
                    path: path.clone(),
                    operation: "write",
                    source,
                })
            }
            None => {
                println!("{report}");
                Ok(())
            }
        }
    }
}

/// Parse a `ROWSxCOLS` dimension specification
fn parse_dimensions(spec: &str) -> Result<(usize, usize)> {
    let Some((rows, cols)) = spec.split_once('x') else {
        return Err(invalid_input(format!(
            "dimension spec '{spec}' must look like ROWSxCOLS, e.g. 4x6"
        )));
    };
    let rows = rows
        .trim()
        .parse::<usize>()
        .map_err(|error| invalid_input(format!("invalid row count in '{spec}': {error}")))?;
    let cols = cols
        .trim()
        .parse::<usize>()
        .map_err(|error| invalid_input(format!("invalid column count in '{spec}': {error}")))?;
    if rows == 0 || cols == 0 {
        return Err(invalid_input("generated dimensions must be at least 1x1"));
    }
    Ok((rows, cols))
}
