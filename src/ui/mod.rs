pub mod layout;
pub mod palette;

pub use layout::Layout;
pub use palette::Palette;
