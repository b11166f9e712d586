use macroquad::prelude::*;

use super::surface::DrawSurface;
use crate::core::color;
use crate::core::GridSpec;
use crate::state::EditorState;
use crate::ui::Layout;

const ACTIVE_BORDER_THICKNESS: f32 = 3.0;
const HOVER_BORDER_THICKNESS: f32 = 3.0;
const CURSOR_THICKNESS: f32 = 2.0;

/// Draw one full frame: palette strip, canvas background, placed tiles in
/// insertion order, then the cursor highlight on top. Pure function of the
/// editor state; a tick with unchanged state emits the same commands.
pub fn render_frame(
    surface: &mut impl DrawSurface,
    state: &EditorState,
    layout: &Layout,
    grid: &GridSpec,
) {
    draw_palette_strip(surface, state, layout);
    draw_canvas(surface, state, layout, grid);
}

fn draw_palette_strip(surface: &mut impl DrawSurface, state: &EditorState, layout: &Layout) {
    surface.fill_rect(layout.strip(), color::STRIP_BACKGROUND);

    for (i, slot) in layout.slots.iter().enumerate() {
        if let Some(image) = state.palette.slot(i) {
            surface.draw_image(image, *slot);
        }
        if state.palette.is_active(i) {
            surface.stroke_rect(*slot, ACTIVE_BORDER_THICKNESS, color::ACTIVE_BORDER);
        } else if state.palette.is_hovered(i) {
            surface.stroke_rect(*slot, HOVER_BORDER_THICKNESS, color::HIGHLIGHT);
        }
    }
}

fn draw_canvas(
    surface: &mut impl DrawSurface,
    state: &EditorState,
    layout: &Layout,
    grid: &GridSpec,
) {
    surface.fill_rect(layout.canvas, color::BACKGROUND);

    let cell = grid.cell_size_f();
    let origin = layout.canvas.point();

    for tile in state.tiles.iter() {
        let rect = Rect::new(origin.x + tile.x as f32, origin.y + tile.y as f32, cell, cell);
        surface.draw_image(&tile.image, rect);
    }

    // Cursor: preview the selected tile inside the cell, outline on top.
    let (cx, cy) = state.cursor.pos();
    let cursor_rect = Rect::new(origin.x + cx as f32, origin.y + cy as f32, cell, cell);
    if let Some(image) = state.palette.active() {
        surface.draw_image(image, cursor_rect);
    }
    surface.stroke_rect(cursor_rect, CURSOR_THICKNESS, color::HIGHLIGHT);
}
