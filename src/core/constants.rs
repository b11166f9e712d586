// Fixed editor geometry: a 10x10 grid of 50px cells, with the tile
// palette strip to the left of the canvas.
pub const CANVAS_WIDTH: i32 = 500;
pub const CANVAS_HEIGHT: i32 = 500;
pub const CELL_SIZE: i32 = 50;

pub const PALETTE_STRIP_WIDTH: f32 = 70.0;
pub const PALETTE_SLOT_PADDING: f32 = 10.0;

/// Redraw cadence of the render loop, best-effort.
pub const TICK_SECONDS: f32 = 0.03;

/// Tile images offered by the palette, in strip order.
pub const TILE_MANIFEST: &[&str] = &[
    "assets/grass.png",
    "assets/water.png",
    "assets/dirt.png",
    "assets/stone.png",
];
