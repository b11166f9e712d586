use macroquad::prelude::*;

use crate::core::{GridSpec, PALETTE_SLOT_PADDING, PALETTE_STRIP_WIDTH};

/// Screen placement of the palette strip and the map canvas. Computed once
/// at startup; the window is not resizable.
#[derive(Clone, Debug)]
pub struct Layout {
    pub canvas: Rect,
    pub slots: Vec<Rect>,
}

impl Layout {
    pub fn new(grid: &GridSpec, slot_count: usize) -> Self {
        let cell = grid.cell_size_f();
        let slots = (0..slot_count)
            .map(|i| {
                Rect::new(
                    PALETTE_SLOT_PADDING,
                    PALETTE_SLOT_PADDING + i as f32 * (cell + PALETTE_SLOT_PADDING),
                    cell,
                    cell,
                )
            })
            .collect();

        Self {
            canvas: Rect::new(
                PALETTE_STRIP_WIDTH,
                0.0,
                grid.width as f32,
                grid.height as f32,
            ),
            slots,
        }
    }

    pub fn strip(&self) -> Rect {
        Rect::new(0.0, 0.0, PALETTE_STRIP_WIDTH, self.canvas.h)
    }

    pub fn total_width(&self) -> f32 {
        self.canvas.x + self.canvas.w
    }

    pub fn total_height(&self) -> f32 {
        self.canvas.h
    }
}
