//! CLI entry point for the greedy floor tiling solver

use clap::Parser;
use floortile::io::cli::{Cli, FloorProcessor};

fn main() -> floortile::Result<()> {
    let cli = Cli::parse();
    let mut processor = FloorProcessor::new(cli);
    processor.process()
}
