pub mod color;
pub mod constants;
pub mod cursor;
pub mod grid;
pub mod tile;

pub use constants::*;
pub use cursor::*;
pub use grid::*;
pub use tile::*;
