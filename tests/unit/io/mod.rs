pub mod render;
pub mod tileset;
