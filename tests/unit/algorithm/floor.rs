//! Tests for placement engine construction and seeding

#[cfg(test)]
mod tests {
    use floortile::algorithm::floor::{Floor, StepOutcome};
    use floortile::spatial::coordinate::Coordinate;
    use floortile::spatial::tiles::Tile;

    #[test]
    fn empty_tile_set_is_rejected() {
        assert!(Floor::new(Vec::new()).is_err());
    }

    #[test]
    fn mixed_edge_lengths_are_rejected() {
        let tiles = vec![
            Tile::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap(),
            Tile::from_rows(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap(),
        ];
        assert!(Floor::new(tiles).is_err());
    }

    #[test]
    fn first_step_seeds_the_first_tile_at_the_origin() {
        let tiles = vec![
            Tile::from_rows(&[
                vec![1, 2, 3, 4],
                vec![5, 0, 0, 6],
                vec![7, 0, 0, 8],
                vec![9, 0, 1, 2],
            ])
            .unwrap(),
        ];
        let mut floor = Floor::new(tiles).unwrap();
        let outcome = floor.step().unwrap();
        assert_eq!(
            outcome,
            StepOutcome::Placed {
                tile: 0,
                coordinate: Coordinate::new(0, 0)
            }
        );
        assert!(floor.tile_at(Coordinate::new(0, 0)).is_some());
        assert_eq!(floor.placed_count(), 1);
    }

    #[test]
    fn single_unmatchable_tile_terminates_with_no_orphans() {
        let tiles = vec![
            Tile::from_rows(&[
                vec![1, 2, 3, 4],
                vec![5, 0, 0, 6],
                vec![7, 0, 0, 8],
                vec![9, 0, 1, 2],
            ])
            .unwrap(),
        ];
        let mut floor = Floor::new(tiles).unwrap();
        floor.place_tiles().unwrap();
        assert_eq!(floor.placed_count(), 1);
        assert!(floor.orphans().is_empty());
    }
}
