//! Tests for FIFO ordering and out-of-band eviction in the glue-edge queue

#[cfg(test)]
mod tests {
    use floortile::algorithm::frontier::Frontier;
    use floortile::spatial::tiles::Edge;

    fn edge(symbols: &[u8]) -> Edge {
        Edge::new(symbols.to_vec())
    }

    #[test]
    fn entries_come_back_in_append_order() {
        let mut frontier = Frontier::new();
        frontier.push(edge(&[1, 2]), 0);
        frontier.push(edge(&[3, 4]), 0);
        frontier.push(edge(&[5, 6]), 1);

        assert_eq!(frontier.next(), Some((edge(&[1, 2]), 0)));
        assert_eq!(frontier.next(), Some((edge(&[3, 4]), 0)));
        assert_eq!(frontier.next(), Some((edge(&[5, 6]), 1)));
        assert_eq!(frontier.next(), None);
    }

    #[test]
    fn eviction_tombstones_without_reordering() {
        let mut frontier = Frontier::new();
        frontier.push(edge(&[1, 2]), 0);
        frontier.push(edge(&[3, 4]), 1);
        frontier.push(edge(&[5, 6]), 2);

        assert!(frontier.evict(&edge(&[3, 4]), 1));
        assert_eq!(frontier.next(), Some((edge(&[1, 2]), 0)));
        assert_eq!(frontier.next(), Some((edge(&[5, 6]), 2)));
        assert_eq!(frontier.next(), None);
    }

    #[test]
    fn eviction_of_missing_entries_reports_failure() {
        let mut frontier = Frontier::new();
        frontier.push(edge(&[1, 2]), 0);
        assert!(!frontier.evict(&edge(&[1, 2]), 1));
        assert!(!frontier.evict(&edge(&[9, 9]), 0));

        // Consumed entries are no longer evictable
        frontier.next();
        assert!(!frontier.evict(&edge(&[1, 2]), 0));
    }

    #[test]
    fn duplicate_pairs_evict_earliest_first() {
        let mut frontier = Frontier::new();
        frontier.push(edge(&[9, 9]), 0);
        frontier.push(edge(&[9, 9]), 0);

        assert!(frontier.evict(&edge(&[9, 9]), 0));
        assert_eq!(frontier.next(), Some((edge(&[9, 9]), 0)));
        assert_eq!(frontier.next(), None);
    }
}
