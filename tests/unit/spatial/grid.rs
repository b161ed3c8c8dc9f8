//! Tests for the growable offset-addressed tile-slot grid

#[cfg(test)]
mod tests {
    use floortile::spatial::coordinate::Coordinate;
    use floortile::spatial::grid::Grid;

    #[test]
    fn empty_and_out_of_bounds_cells_read_as_absent() {
        let grid = Grid::new();
        assert_eq!(grid.get(Coordinate::new(0, 0)), None);
        assert_eq!(grid.get(Coordinate::new(100, -100)), None);
    }

    #[test]
    fn set_then_get_round_trips_at_negative_coordinates() {
        let mut grid = Grid::new();
        grid.set(Coordinate::new(-1, 1), 7).unwrap();
        assert_eq!(grid.get(Coordinate::new(-1, 1)), Some(7));
        assert_eq!(grid.get(Coordinate::new(1, -1)), None);
    }

    #[test]
    fn growth_preserves_logical_coordinates() {
        let mut grid = Grid::new();
        grid.set(Coordinate::new(0, 0), 0).unwrap();
        grid.set(Coordinate::new(1, 0), 1).unwrap();
        let initial_size = grid.size();

        // One step past the initial bounds forces a ring of growth
        grid.set(Coordinate::new(2, 0), 2).unwrap();
        assert!(grid.size() > initial_size);

        assert_eq!(grid.get(Coordinate::new(0, 0)), Some(0));
        assert_eq!(grid.get(Coordinate::new(1, 0)), Some(1));
        assert_eq!(grid.get(Coordinate::new(2, 0)), Some(2));
    }

    #[test]
    fn jumping_past_one_ring_of_growth_is_an_invariant_violation() {
        let mut grid = Grid::new();
        // Initial size 3 covers [-1, 1]; one ring covers [-2, 2]
        assert!(grid.set(Coordinate::new(5, 0), 0).is_err());
    }

    #[test]
    fn coordinates_cover_the_current_bounds() {
        let grid = Grid::new();
        let all: Vec<_> = grid.coordinates().collect();
        assert_eq!(all.len(), grid.size() * grid.size());
        assert_eq!(all.first(), Some(&Coordinate::new(-1, -1)));
        assert_eq!(all.last(), Some(&Coordinate::new(1, 1)));
    }
}
