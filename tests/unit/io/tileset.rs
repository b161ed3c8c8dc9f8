//! Tests for the demo set, tile-set text parsing, and seeded generation

#[cfg(test)]
mod tests {
    use floortile::io::tileset::{demo_tiles, generated_tiles, parse_tiles};
    use floortile::spatial::coordinate::Side;
    use std::path::Path;

    #[test]
    fn demo_set_has_eight_uniform_tiles() {
        let tiles = demo_tiles().unwrap();
        assert_eq!(tiles.len(), 8);
        assert!(tiles.iter().all(|tile| tile.edge_length() == 4));
    }

    #[test]
    fn parses_blocks_separated_by_blank_lines() {
        let text = "# two small tiles\n1 2\n3 4\n\n5 6\n7 8\n";
        let tiles = parse_tiles(text, Path::new("inline")).unwrap();
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles.first().unwrap().edge(Side::Top).symbols(), &[1, 2]);
        assert_eq!(tiles.get(1).unwrap().edge(Side::Top).symbols(), &[5, 6]);
    }

    #[test]
    fn rejects_bad_symbols_and_ragged_blocks() {
        assert!(parse_tiles("1 x\n3 4\n", Path::new("inline")).is_err());
        assert!(parse_tiles("1 2 3\n4 5\n", Path::new("inline")).is_err());
        assert!(parse_tiles("999 1\n2 3\n", Path::new("inline")).is_err());
        assert!(parse_tiles("# only a comment\n", Path::new("inline")).is_err());
    }

    #[test]
    fn generated_neighbors_mirror_along_their_seams() {
        let tiles = generated_tiles(2, 3, 4, 7).unwrap();
        assert_eq!(tiles.len(), 6);

        // Horizontal neighbors: right edge of (r, c) mirrors left edge of
        // (r, c + 1); vertical: bottom of (r, c) mirrors top of (r + 1, c)
        let at = |r: usize, c: usize| tiles.get(r * 3 + c).unwrap();
        for r in 0..2 {
            for c in 0..2 {
                assert_eq!(
                    at(r, c).edge(Side::Right).reversed(),
                    *at(r, c + 1).edge(Side::Left)
                );
            }
        }
        for c in 0..3 {
            assert_eq!(
                at(0, c).edge(Side::Bottom).reversed(),
                *at(1, c).edge(Side::Top)
            );
        }
    }

    #[test]
    fn generation_is_reproducible_per_seed() {
        let first = generated_tiles(2, 2, 4, 11).unwrap();
        let second = generated_tiles(2, 2, 4, 11).unwrap();
        assert!(
            first
                .iter()
                .zip(second.iter())
                .all(|(a, b)| a.matrix() == b.matrix())
        );
    }
}
