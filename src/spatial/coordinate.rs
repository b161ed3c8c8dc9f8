//! Signed planar coordinates and the four cardinal sides of a square tile
//!
//! Coordinates are unbounded in both directions; (0, 0) is where the first
//! tile of a placement run is seeded. Sides double as directions: stepping a
//! coordinate toward a side yields the cell a tile glued on that side would
//! occupy.

/// A signed (x, y) position on the floor with value equality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Horizontal position, increasing rightward
    pub x: i32,
    /// Vertical position, increasing downward
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one cell away toward the given side
    pub const fn step(self, side: Side) -> Self {
        match side {
            Side::Top => Self::new(self.x, self.y - 1),
            Side::Left => Self::new(self.x - 1, self.y),
            Side::Bottom => Self::new(self.x, self.y + 1),
            Side::Right => Self::new(self.x + 1, self.y),
        }
    }
}

/// One of the four sides of a square tile
///
/// The declaration order (Top, Left, Bottom, Right) is load-bearing: side
/// enumeration order feeds the edge index and the frontier, and with it the
/// deterministic tie-break among equally viable candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Upper side, edge read left to right
    Top,
    /// Left side, edge read bottom to top
    Left,
    /// Lower side, edge read right to left
    Bottom,
    /// Right side, edge read top to bottom
    Right,
}

impl Side {
    /// All sides in canonical enumeration order
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Bottom, Self::Right];

    /// Position of this side in the canonical cycle
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Left => 1,
            Self::Bottom => 2,
            Self::Right => 3,
        }
    }

    /// Side at the given position in the canonical cycle, wrapping mod 4
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Top,
            1 => Self::Left,
            2 => Self::Bottom,
            _ => Self::Right,
        }
    }

    /// The side facing this one from a neighboring cell
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }
}
