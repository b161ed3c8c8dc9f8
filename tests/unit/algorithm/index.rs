//! Tests for the reverse-edge availability index

#[cfg(test)]
mod tests {
    use floortile::algorithm::index::EdgeIndex;
    use floortile::spatial::coordinate::Side;
    use floortile::spatial::tiles::Tile;

    fn tiles() -> Vec<Tile> {
        vec![
            Tile::from_rows(&[
                vec![1, 2, 3, 4],
                vec![5, 0, 0, 6],
                vec![7, 0, 0, 8],
                vec![9, 0, 1, 2],
            ])
            .unwrap(),
            Tile::from_rows(&[
                vec![4, 3, 2, 1],
                vec![6, 0, 0, 5],
                vec![8, 0, 0, 7],
                vec![2, 1, 0, 9],
            ])
            .unwrap(),
        ]
    }

    #[test]
    fn candidates_match_under_reversal() {
        let tiles = tiles();
        let index = EdgeIndex::build(&tiles);

        // Tile 1's top edge is the reverse of tile 0's top edge, so tile 1
        // is a candidate for gluing onto it
        let glue = tiles.first().unwrap().edge(Side::Top);
        let candidates = index.candidates(glue).unwrap();
        assert!(candidates.contains(&1));
    }

    #[test]
    fn removal_clears_every_contribution() {
        let tiles = tiles();
        let mut index = EdgeIndex::build(&tiles);
        index.remove(0, tiles.first().unwrap());
        index.remove(1, tiles.get(1).unwrap());
        assert!(index.is_empty());
    }

    #[test]
    fn repeated_edges_index_once_per_side() {
        let uniform = vec![Tile::from_rows(&vec![vec![9; 4]; 4]).unwrap()];
        let index = EdgeIndex::build(&uniform);
        let glue = uniform.first().unwrap().edge(Side::Top);
        assert_eq!(index.candidates(glue), Some([0, 0, 0, 0].as_slice()));

        let mut index = index;
        index.remove(0, uniform.first().unwrap());
        assert!(index.is_empty());
    }
}
