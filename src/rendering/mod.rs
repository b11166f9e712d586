pub mod frame;
pub mod surface;

pub use frame::render_frame;
pub use surface::{DrawSurface, MacroquadSurface};
