pub mod input;
pub mod tile;

pub use input::{parse_int, parse_tiles, Ignored, ImportError};
pub use tile::Tile;
