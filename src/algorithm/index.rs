//! Availability index mapping reversed edges to the tiles exposing them
//!
//! Every unplaced tile is indexed under the reverse of each of its four edge
//! sequences; the reversal encodes what a correctly glued neighbor edge must
//! look like from outside, so a frontier edge can be used as a lookup key
//! directly. Buckets preserve insertion order (tile construction order, then
//! side enumeration order), which is the deterministic candidate tie-break.

use crate::spatial::tiles::{Edge, Tile};
use std::collections::HashMap;

/// Multimap from reversed edge sequence to unplaced tile ids
#[derive(Debug, Default)]
pub struct EdgeIndex {
    buckets: HashMap<Edge, Vec<usize>>,
}

impl EdgeIndex {
    /// Index every tile under the reverse of each of its edges
    ///
    /// A tile with repeated edge sequences appears multiple times in the
    /// same bucket, once per contributing side.
    pub fn build(tiles: &[Tile]) -> Self {
        let mut buckets: HashMap<Edge, Vec<usize>> = HashMap::new();
        for (id, tile) in tiles.iter().enumerate() {
            for (_, edge) in tile.edges() {
                buckets.entry(edge.reversed()).or_default().push(id);
            }
        }
        Self { buckets }
    }

    /// Tiles that could glue onto the given exposed edge, in insertion order
    pub fn candidates(&self, edge: &Edge) -> Option<&[usize]> {
        self.buckets.get(edge).map(Vec::as_slice)
    }

    /// Remove a placed tile from every bucket it contributes to
    ///
    /// Removes one occurrence per tile edge, mirroring how insertion added
    /// one per edge; emptied buckets are dropped.
    pub fn remove(&mut self, id: usize, tile: &Tile) {
        for (_, edge) in tile.edges() {
            let key = edge.reversed();
            if let Some(bucket) = self.buckets.get_mut(&key) {
                if let Some(position) = bucket.iter().position(|&entry| entry == id) {
                    bucket.remove(position);
                }
                if bucket.is_empty() {
                    self.buckets.remove(&key);
                }
            }
        }
    }

    /// Whether any tile remains indexed
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
