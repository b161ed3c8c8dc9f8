//! Placement progress reporting

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over tiles committed to the floor
///
/// The frontier length is unknowable up front, so the bar tracks placed
/// tiles against the tile-set size; a partial tiling simply finishes short.
pub struct PlacementProgress {
    bar: ProgressBar,
}

impl PlacementProgress {
    /// Create a bar sized to the tile set
    pub fn new(total_tiles: usize) -> Self {
        let bar = ProgressBar::new(total_tiles as u64);
        bar.set_style(PLACEMENT_STYLE.clone());
        bar.set_message("Placing tiles");
        Self { bar }
    }

    /// Report the number of tiles placed so far
    pub fn placed(&self, count: usize) {
        self.bar.set_position(count as u64);
    }

    /// Close out the bar with a placement summary
    pub fn finish(&self, placed: usize, orphans: usize) {
        self.bar
            .finish_with_message(format!("Placed {placed} tiles, {orphans} orphaned"));
    }
}
