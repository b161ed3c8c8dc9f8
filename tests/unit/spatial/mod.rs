pub mod coordinate;
pub mod grid;
