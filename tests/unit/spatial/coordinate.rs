//! Tests for signed coordinates and cardinal side directions

#[cfg(test)]
mod tests {
    use floortile::spatial::coordinate::{Coordinate, Side};

    #[test]
    fn step_moves_one_cell_toward_each_side() {
        let origin = Coordinate::new(0, 0);
        assert_eq!(origin.step(Side::Top), Coordinate::new(0, -1));
        assert_eq!(origin.step(Side::Left), Coordinate::new(-1, 0));
        assert_eq!(origin.step(Side::Bottom), Coordinate::new(0, 1));
        assert_eq!(origin.step(Side::Right), Coordinate::new(1, 0));
    }

    #[test]
    fn opposite_sides_pair_up() {
        assert_eq!(Side::Top.opposite(), Side::Bottom);
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Bottom.opposite(), Side::Top);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn stepping_toward_a_side_and_back_returns_home() {
        let start = Coordinate::new(3, -2);
        for side in Side::ALL {
            assert_eq!(start.step(side).step(side.opposite()), start);
        }
    }
}
