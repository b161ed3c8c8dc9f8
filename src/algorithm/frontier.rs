//! FIFO queue of exposed glue edges with constant-time eviction
//!
//! Frontier entries are (edge sequence, tile) pairs describing exposed,
//! unsatisfied boundary edges of the placed region. Processing order is
//! strictly append order. Entries consumed out of band (a neighbor edge
//! satisfied by a new placement) are evicted through a secondary position
//! index and tombstoned in place, so eviction never scans the queue.

use crate::spatial::tiles::Edge;
use std::collections::{HashMap, VecDeque};

/// FIFO glue-edge queue with a position index for out-of-band eviction
#[derive(Debug, Default)]
pub struct Frontier {
    entries: Vec<Option<(Edge, usize)>>,
    positions: HashMap<(Edge, usize), VecDeque<usize>>,
    cursor: usize,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an exposed edge of a tile
    ///
    /// The same (edge, tile) pair may be queued more than once when a tile
    /// exposes the same sequence on several sides.
    pub fn push(&mut self, edge: Edge, tile: usize) {
        let position = self.entries.len();
        self.positions
            .entry((edge.clone(), tile))
            .or_default()
            .push_back(position);
        self.entries.push(Some((edge, tile)));
    }

    /// Take the next live entry in FIFO order
    ///
    /// Skips tombstones left by eviction. Returns `None` once the queue is
    /// exhausted.
    pub fn next(&mut self) -> Option<(Edge, usize)> {
        while self.cursor < self.entries.len() {
            let position = self.cursor;
            self.cursor += 1;

            if let Some(entry) = self.entries.get_mut(position).and_then(Option::take) {
                let key = (entry.0.clone(), entry.1);
                let mut emptied = false;
                if let Some(queue) = self.positions.get_mut(&key) {
                    if let Some(found) = queue.iter().position(|&p| p == position) {
                        queue.remove(found);
                    }
                    emptied = queue.is_empty();
                }
                if emptied {
                    self.positions.remove(&key);
                }
                return Some(entry);
            }
        }
        None
    }

    /// Remove the earliest pending entry for an (edge, tile) pair
    ///
    /// Used when a new placement satisfies a neighbor's exposed edge: that
    /// edge is consumed, not newly exposed, so it must leave the queue.
    /// Returns false when no pending entry exists, which callers treat as an
    /// invariant violation.
    pub fn evict(&mut self, edge: &Edge, tile: usize) -> bool {
        let key = (edge.clone(), tile);
        let Some(queue) = self.positions.get_mut(&key) else {
            return false;
        };
        let Some(position) = queue.pop_front() else {
            return false;
        };
        if queue.is_empty() {
            self.positions.remove(&key);
        }

        match self.entries.get_mut(position) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }
}
