mod ticker;

use macroquad::prelude::*;

pub use self::ticker::{CancelToken, Ticker};
use crate::core::{GridSpec, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE, TICK_SECONDS, TILE_MANIFEST};
use crate::error::MapperError;
use crate::input::{Dispatcher, PointerSnapshot};
use crate::rendering::{render_frame, MacroquadSurface};
use crate::state::EditorState;
use crate::ui::{Layout, Palette};

pub async fn run() -> Result<(), MapperError> {
    let grid = GridSpec::new(CANVAS_WIDTH, CANVAS_HEIGHT, CELL_SIZE)?;
    let palette = Palette::from_manifest(TILE_MANIFEST);
    let layout = Layout::new(&grid, palette.len());

    let mut surface = MacroquadSurface::new(
        layout.total_width() as u32,
        layout.total_height() as u32,
        TILE_MANIFEST,
    )
    .await?;

    let mut state = EditorState::new(palette);
    let mut dispatcher = Dispatcher::new();
    let mut ticker = Ticker::new(TICK_SECONDS);
    let cancel = CancelToken::new();

    info!("mapper loaded");

    // First frame before any tick is due.
    surface.begin_tick();
    render_frame(&mut surface, &state, &layout, &grid);
    surface.end_tick();

    while !cancel.is_cancelled() {
        if is_key_pressed(KeyCode::Escape) {
            cancel.cancel();
        }

        let snapshot = PointerSnapshot {
            position: Vec2::from(mouse_position()),
            pressed: is_mouse_button_down(MouseButton::Left),
        };
        dispatcher.dispatch(snapshot, &layout, &grid, &mut state);

        if ticker.advance(get_frame_time()) > 0 {
            surface.begin_tick();
            render_frame(&mut surface, &state, &layout, &grid);
            surface.end_tick();
        }
        surface.present();

        next_frame().await;
    }

    info!("mapper stopped");
    Ok(())
}
