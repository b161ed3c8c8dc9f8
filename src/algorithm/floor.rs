//! Greedy floor placement: seed one tile, then expand along the frontier
//!
//! Every tile is either unplaced-available or placed; a tile rejected for
//! one frontier edge stays available for later ones. The engine seeds the
//! first tile at the origin, then processes exposed edges strictly in FIFO
//! order: look up candidates whose reversed edge matches, align the first
//! conflict-free candidate by rotation, commit it into the grid, and queue
//! its newly exposed edges. No backtracking; unresolved edges and orphan
//! tiles are accepted partial results.
//!
//! Iteration order is part of the observable contract: candidates are tried
//! in index insertion order (tile construction order, then side order), so
//! identical input always reproduces the identical layout.

use crate::algorithm::frontier::Frontier;
use crate::algorithm::index::EdgeIndex;
use crate::io::error::{Result, TilingError, invalid_input, invariant_violation};
use crate::spatial::coordinate::{Coordinate, Side};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::{Edge, Rotation, Tile};

/// Result of processing one frontier entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A tile was committed to the floor
    Placed {
        /// Index of the placed tile
        tile: usize,
        /// Cell the tile now occupies
        coordinate: Coordinate,
    },
    /// The frontier entry found no conflict-free candidate and was dropped
    Unmatched,
    /// The frontier is empty; placement has run to completion
    Exhausted,
}

/// The placement engine owning the tile arena, index, frontier, and grid
#[derive(Debug)]
pub struct Floor {
    tiles: Vec<Tile>,
    index: EdgeIndex,
    frontier: Frontier,
    grid: Grid,
    seeded: bool,
    placed_count: usize,
}

impl Floor {
    /// Create a placement engine over an ordered tile set
    ///
    /// The order of `tiles` is semantically significant: it fixes the
    /// candidate tie-break and with it the final layout.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::InvalidInput`] if the set is empty or the
    /// tiles do not all share one edge length.
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let Some(first) = tiles.first() else {
            return Err(invalid_input("tile set must contain at least one tile"));
        };

        let edge_length = first.edge_length();
        for (id, tile) in tiles.iter().enumerate() {
            if tile.edge_length() != edge_length {
                return Err(invalid_input(format!(
                    "tile {id} has edge length {} but the set uses {edge_length}",
                    tile.edge_length()
                )));
            }
        }

        let index = EdgeIndex::build(&tiles);
        Ok(Self {
            tiles,
            index,
            frontier: Frontier::new(),
            grid: Grid::new(),
            seeded: false,
            placed_count: 0,
        })
    }

    /// Run placement to completion
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::InvariantViolation`] on impossible bookkeeping
    /// states (see [`Floor::step`]); partial tilings are not errors.
    pub fn place_tiles(&mut self) -> Result<()> {
        loop {
            match self.step()? {
                StepOutcome::Exhausted => return Ok(()),
                StepOutcome::Placed { .. } | StepOutcome::Unmatched => {}
            }
        }
    }

    /// Process the next frontier entry (seeding on the first call)
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::InvariantViolation`] when the grid cannot
    /// absorb a placement after one growth step or a satisfied neighbor edge
    /// is missing from the frontier, and [`TilingError::EdgeNotFound`] when
    /// an indexed sequence is absent from its own tile. All indicate logic
    /// defects, not bad puzzle data.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if !self.seeded {
            return self.seed();
        }

        let Some((glue_edge, glue_tile)) = self.frontier.next() else {
            return Ok(StepOutcome::Exhausted);
        };

        // Resolve which side of the placed tile this entry refers to; a
        // stale entry (every matching side already satisfied) is dropped
        let Some((glue_side, target)) = self.exposed_glue_side(glue_tile, &glue_edge)? else {
            return Ok(StepOutcome::Unmatched);
        };
        let anchor = target.step(glue_side.opposite());

        let candidates: Vec<usize> = self
            .index
            .candidates(&glue_edge)
            .map_or_else(Vec::new, <[usize]>::to_vec);
        let reversed = glue_edge.reversed();

        for candidate in candidates {
            let Some(candidate_side) = self.tile(candidate)?.side_of_edge(&reversed) else {
                return Err(TilingError::EdgeNotFound {
                    tile: candidate,
                    edge: reversed.symbols().into(),
                });
            };
            let rotation = Rotation::aligning(glue_side, candidate_side);

            // Already-placed cells around the target, excluding the glue tile
            let neighbors = self.placed_neighbors(target, anchor);
            if self.has_conflict(candidate, rotation, &neighbors)? {
                continue;
            }

            self.commit(candidate, candidate_side, rotation, target, &neighbors)?;
            return Ok(StepOutcome::Placed {
                tile: candidate,
                coordinate: target,
            });
        }

        Ok(StepOutcome::Unmatched)
    }

    /// Place the first tile at the origin and queue its four edges
    fn seed(&mut self) -> Result<StepOutcome> {
        self.seeded = true;
        let first = 0;
        let origin = Coordinate::new(0, 0);

        let edges: Vec<Edge> = self
            .tile(first)?
            .edges()
            .into_iter()
            .map(|(_, edge)| edge.clone())
            .collect();
        for edge in edges {
            self.frontier.push(edge, first);
        }

        self.grid.set(origin, first)?;
        if let Some(tile) = self.tiles.get_mut(first) {
            tile.set_coordinate(origin);
        }
        if let Some(placed) = self.tiles.get(first) {
            self.index.remove(first, placed);
        }
        self.placed_count += 1;

        Ok(StepOutcome::Placed {
            tile: first,
            coordinate: origin,
        })
    }

    /// First side of the glue tile carrying this edge with a vacant cell
    /// beyond it, together with that vacant target cell
    ///
    /// For tiles with distinct edges the matching side is unique. A tile
    /// with repeated edge sequences queues indistinguishable entries, so
    /// sides already built against are skipped; `None` means every matching
    /// side has been satisfied and the entry is stale.
    fn exposed_glue_side(
        &self,
        glue_tile: usize,
        glue_edge: &Edge,
    ) -> Result<Option<(Side, Coordinate)>> {
        let tile = self.tile(glue_tile)?;
        let anchor = tile.coordinate().ok_or_else(|| {
            invariant_violation(
                "frontier processing",
                format!("glue tile {glue_tile} carries no coordinate"),
            )
        })?;

        let mut matched = false;
        for side in Side::ALL {
            if tile.edge(side) == glue_edge {
                matched = true;
                let target = anchor.step(side);
                if self.grid.get(target).is_none() {
                    return Ok(Some((side, target)));
                }
            }
        }

        if matched {
            Ok(None)
        } else {
            Err(TilingError::EdgeNotFound {
                tile: glue_tile,
                edge: glue_edge.symbols().into(),
            })
        }
    }

    /// Placed tiles orthogonally adjacent to the target cell, at most three,
    /// in side enumeration order, excluding the glue tile's cell
    fn placed_neighbors(&self, target: Coordinate, anchor: Coordinate) -> Vec<(Side, usize)> {
        let mut neighbors = Vec::with_capacity(3);
        for side in Side::ALL {
            let cell = target.step(side);
            if cell == anchor {
                continue;
            }
            if let Some(id) = self.grid.get(cell) {
                neighbors.push((side, id));
            }
        }
        neighbors
    }

    /// Whether any neighbor edge fails to mirror the candidate's facing edge
    /// under its prospective rotation; the first mismatch short-circuits
    fn has_conflict(
        &self,
        candidate: usize,
        rotation: Rotation,
        neighbors: &[(Side, usize)],
    ) -> Result<bool> {
        for &(side, neighbor) in neighbors {
            let prospect_side = rotation.source_side(side);
            let prospect_edge = self.tile(candidate)?.edge(prospect_side);
            let neighbor_edge = self.tile(neighbor)?.edge(side.opposite());
            if *prospect_edge != neighbor_edge.reversed() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Commit a conflict-free candidate: evict satisfied neighbor edges,
    /// write the grid, rotate, de-index, and queue newly exposed edges
    fn commit(
        &mut self,
        candidate: usize,
        candidate_side: Side,
        rotation: Rotation,
        target: Coordinate,
        neighbors: &[(Side, usize)],
    ) -> Result<()> {
        // Sides of the unrotated candidate consumed by this placement: the
        // glued side plus every side now facing a satisfied neighbor
        let mut consumed = vec![candidate_side];
        for &(side, _) in neighbors {
            consumed.push(rotation.source_side(side));
        }

        // Satisfied neighbor edges are consumed, not newly exposed; they
        // must still be pending in the frontier
        for &(side, neighbor) in neighbors {
            let neighbor_edge = self.tile(neighbor)?.edge(side.opposite()).clone();
            if !self.frontier.evict(&neighbor_edge, neighbor) {
                return Err(invariant_violation(
                    "frontier eviction",
                    format!("satisfied edge of tile {neighbor} not pending in the frontier"),
                ));
            }
        }

        // Capture exposures before rotating; the sequences are rotation
        // invariant but the side labels are not
        let exposed: Vec<Edge> = {
            let tile = self.tile(candidate)?;
            Side::ALL
                .into_iter()
                .filter(|side| !consumed.contains(side))
                .map(|side| tile.edge(side).clone())
                .collect()
        };

        self.grid.set(target, candidate)?;

        let tile = self.tile_mut(candidate)?;
        tile.rotate(rotation);
        tile.set_coordinate(target);

        if let Some(placed) = self.tiles.get(candidate) {
            self.index.remove(candidate, placed);
        }

        for edge in exposed {
            self.frontier.push(edge, candidate);
        }
        self.placed_count += 1;

        Ok(())
    }

    fn tile(&self, id: usize) -> Result<&Tile> {
        self.tiles
            .get(id)
            .ok_or_else(|| invariant_violation("tile lookup", format!("dangling tile id {id}")))
    }

    fn tile_mut(&mut self, id: usize) -> Result<&mut Tile> {
        self.tiles
            .get_mut(id)
            .ok_or_else(|| invariant_violation("tile lookup", format!("dangling tile id {id}")))
    }

    /// Tile occupying a coordinate, if any
    pub fn tile_at(&self, coordinate: Coordinate) -> Option<&Tile> {
        self.grid
            .get(coordinate)
            .and_then(|id| self.tiles.get(id))
    }

    /// All tiles in construction order, placed or not
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Indices of tiles never placed, in construction order
    pub fn orphans(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| !tile.is_placed())
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of tiles committed to the floor so far
    pub const fn placed_count(&self) -> usize {
        self.placed_count
    }

    /// The underlying grid, for extent queries and rendering
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }
}
