//! Tests for floor, tile, and orphan text rendering

#[cfg(test)]
mod tests {
    use floortile::algorithm::floor::Floor;
    use floortile::io::render::{render_floor, render_orphans, render_tile};
    use floortile::spatial::tiles::Tile;

    fn small_floor() -> Floor {
        let tiles = vec![
            Tile::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap(),
            Tile::from_rows(&[vec![9, 9], vec![9, 9]]).unwrap(),
        ];
        let mut floor = Floor::new(tiles).unwrap();
        floor.place_tiles().unwrap();
        floor
    }

    #[test]
    fn floor_rendering_contains_the_seed_tile_rows() {
        let floor = small_floor();
        let text = render_floor(&floor);
        assert!(text.starts_with("Result:"));
        assert!(text.contains("[1, 2]"));
        assert!(text.contains("[3, 4]"));
    }

    #[test]
    fn tile_rendering_reports_rotation() {
        let floor = small_floor();
        let text = render_tile(floor.tiles().first().unwrap());
        assert!(text.starts_with("Rotation: 0"));
        assert!(text.contains("[1, 2]"));
    }

    #[test]
    fn orphan_rendering_lists_unplaced_tiles() {
        let floor = small_floor();
        let text = render_orphans(&floor);
        // Tile 1's all-nines edges match nothing on tile 0
        assert!(text.contains("Tile 1:"));
        assert!(text.contains("[9, 9]"));
    }
}
