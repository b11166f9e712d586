//! Editor state. One explicit value owns everything the dispatcher
//! mutates and the render pass reads; there are no ambient globals.

use crate::core::{Cursor, TileMap};
use crate::ui::Palette;

pub struct EditorState {
    /// Snapped cell the pointer last rested on.
    pub cursor: Cursor,
    /// All placed tiles, in placement order.
    pub tiles: TileMap,
    /// Tile selection and hover bookkeeping.
    pub palette: Palette,
    /// Whether the pointer is currently over the canvas. Maintained for
    /// diagnostics; nothing else consumes it yet.
    pub over_canvas: bool,
}

impl EditorState {
    pub fn new(palette: Palette) -> Self {
        Self {
            cursor: Cursor::new(),
            tiles: TileMap::new(),
            palette,
            over_canvas: false,
        }
    }
}
