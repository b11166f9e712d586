use macroquad::prelude::*;

use super::events::{pointer_to_local, resolve_target, EventTarget, PointerSnapshot};
use crate::core::GridSpec;
use crate::state::EditorState;
use crate::ui::Layout;

/// Routes pointer events to the palette, cursor, and tile map.
///
/// Holds the previous frame's target and button state so enter/leave
/// transitions and press edges can be synthesized from plain per-frame
/// snapshots.
pub struct Dispatcher {
    prev_target: EventTarget,
    prev_pressed: bool,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            prev_target: EventTarget::Other,
            prev_pressed: false,
        }
    }

    pub fn dispatch(
        &mut self,
        snapshot: PointerSnapshot,
        layout: &Layout,
        grid: &GridSpec,
        state: &mut EditorState,
    ) {
        let target = resolve_target(layout, snapshot.position);

        if target != self.prev_target {
            Self::on_leave(self.prev_target, state);
            Self::on_enter(target, state);
        }

        // Move: track the snapped cell under the pointer.
        if target == EventTarget::Canvas {
            let local = pointer_to_local(snapshot.position, layout.canvas);
            let (x, y) = grid.snap_point(local);
            state.cursor.set(x, y);
        }

        // Press edge: route the click by target.
        if snapshot.pressed && !self.prev_pressed {
            Self::on_press(target, grid, state);
        }

        self.prev_target = target;
        self.prev_pressed = snapshot.pressed;
    }

    fn on_press(target: EventTarget, grid: &GridSpec, state: &mut EditorState) {
        match target {
            EventTarget::PaletteSlot(slot) => state.palette.select(slot),
            EventTarget::Canvas => {
                // Placement requires an active selection; otherwise the
                // click is a no-op.
                let Some(image) = state.palette.active().cloned() else {
                    return;
                };
                let (x, y) = state.cursor.pos();
                info!("added image {} to the map at ({}, {})", image, x, y);
                state.tiles.append(x, y, image);

                let summary = state.tiles.summarize(grid.cell_size);
                info!(
                    "the map will be {} rows and {} columns",
                    summary.rows, summary.cols
                );
            }
            EventTarget::Other => {}
        }
    }

    fn on_enter(target: EventTarget, state: &mut EditorState) {
        match target {
            EventTarget::PaletteSlot(slot) => state.palette.hover_enter(slot),
            EventTarget::Canvas => {
                state.over_canvas = true;
                info!("entering canvas");
            }
            EventTarget::Other => {}
        }
    }

    fn on_leave(target: EventTarget, state: &mut EditorState) {
        match target {
            EventTarget::PaletteSlot(slot) => state.palette.hover_leave(slot),
            EventTarget::Canvas => {
                state.over_canvas = false;
                info!("leaving canvas");
            }
            EventTarget::Other => {}
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Palette;

    fn fixture() -> (Dispatcher, Layout, GridSpec, EditorState) {
        let grid = GridSpec::new(500, 500, 50).unwrap();
        let layout = Layout::new(&grid, 2);
        let palette = Palette::from_manifest(&["assets/grass.png", "assets/water.png"]);
        (Dispatcher::new(), layout, grid, EditorState::new(palette))
    }

    fn over_canvas(layout: &Layout, local_x: f32, local_y: f32) -> Vec2 {
        layout.canvas.point() + Vec2::new(local_x, local_y)
    }

    fn step(
        dispatcher: &mut Dispatcher,
        layout: &Layout,
        grid: &GridSpec,
        state: &mut EditorState,
        position: Vec2,
        pressed: bool,
    ) {
        dispatcher.dispatch(PointerSnapshot { position, pressed }, layout, grid, state);
    }

    #[test]
    fn move_over_canvas_snaps_the_cursor() {
        let (mut dispatcher, layout, grid, mut state) = fixture();
        let pos = over_canvas(&layout, 73.0, 12.0);
        step(&mut dispatcher, &layout, &grid, &mut state, pos, false);
        assert_eq!(state.cursor.pos(), (50, 0));
    }

    #[test]
    fn click_without_selection_never_appends() {
        let (mut dispatcher, layout, grid, mut state) = fixture();
        let pos = over_canvas(&layout, 73.0, 12.0);
        step(&mut dispatcher, &layout, &grid, &mut state, pos, true);
        assert_eq!(state.tiles.len(), 0);
    }

    #[test]
    fn click_with_selection_appends_one_tile_at_the_cursor() {
        let (mut dispatcher, layout, grid, mut state) = fixture();

        // pick grass from the palette
        let slot = layout.slots[0].point() + Vec2::new(5.0, 5.0);
        step(&mut dispatcher, &layout, &grid, &mut state, slot, true);
        step(&mut dispatcher, &layout, &grid, &mut state, slot, false);

        // move onto the canvas and click
        let pos = over_canvas(&layout, 73.0, 12.0);
        step(&mut dispatcher, &layout, &grid, &mut state, pos, false);
        step(&mut dispatcher, &layout, &grid, &mut state, pos, true);

        assert_eq!(state.tiles.len(), 1);
        let tile = state.tiles.iter().next().unwrap();
        assert_eq!((tile.x, tile.y), (50, 0));
        assert_eq!(tile.image.path(), "assets/grass.png");
    }

    #[test]
    fn holding_the_button_places_only_once() {
        let (mut dispatcher, layout, grid, mut state) = fixture();
        let slot = layout.slots[0].point() + Vec2::new(5.0, 5.0);
        step(&mut dispatcher, &layout, &grid, &mut state, slot, true);
        step(&mut dispatcher, &layout, &grid, &mut state, slot, false);

        let pos = over_canvas(&layout, 10.0, 10.0);
        step(&mut dispatcher, &layout, &grid, &mut state, pos, true);
        step(&mut dispatcher, &layout, &grid, &mut state, pos, true);
        step(&mut dispatcher, &layout, &grid, &mut state, pos, true);
        assert_eq!(state.tiles.len(), 1);
    }

    #[test]
    fn crossing_the_canvas_edge_toggles_the_flag() {
        let (mut dispatcher, layout, grid, mut state) = fixture();
        assert!(!state.over_canvas);

        let inside = over_canvas(&layout, 1.0, 1.0);
        step(&mut dispatcher, &layout, &grid, &mut state, inside, false);
        assert!(state.over_canvas);

        let outside = Vec2::new(2.0, 2.0);
        step(&mut dispatcher, &layout, &grid, &mut state, outside, false);
        assert!(!state.over_canvas);
    }

    #[test]
    fn hover_moves_with_the_pointer_but_selection_stays() {
        let (mut dispatcher, layout, grid, mut state) = fixture();

        let slot_a = layout.slots[0].point() + Vec2::new(5.0, 5.0);
        let slot_b = layout.slots[1].point() + Vec2::new(5.0, 5.0);

        step(&mut dispatcher, &layout, &grid, &mut state, slot_a, true);
        step(&mut dispatcher, &layout, &grid, &mut state, slot_a, false);
        step(&mut dispatcher, &layout, &grid, &mut state, slot_b, false);
        assert!(state.palette.is_active(0));
        assert!(state.palette.is_hovered(1));

        let away = Vec2::new(2.0, 2.0);
        step(&mut dispatcher, &layout, &grid, &mut state, away, false);
        assert!(state.palette.is_active(0));
        assert!(!state.palette.is_hovered(1));
    }

    #[test]
    fn clicks_outside_both_surfaces_are_ignored() {
        let (mut dispatcher, layout, grid, mut state) = fixture();
        let away = Vec2::new(2.0, 2.0);
        step(&mut dispatcher, &layout, &grid, &mut state, away, true);
        assert_eq!(state.tiles.len(), 0);
        assert!(state.palette.active().is_none());
    }

    #[test]
    fn selecting_b_after_a_via_clicks_switches_the_highlight() {
        let (mut dispatcher, layout, grid, mut state) = fixture();
        let slot_a = layout.slots[0].point() + Vec2::new(5.0, 5.0);
        let slot_b = layout.slots[1].point() + Vec2::new(5.0, 5.0);

        step(&mut dispatcher, &layout, &grid, &mut state, slot_a, true);
        step(&mut dispatcher, &layout, &grid, &mut state, slot_a, false);
        step(&mut dispatcher, &layout, &grid, &mut state, slot_b, true);

        assert!(!state.palette.is_active(0));
        assert!(state.palette.is_active(1));
    }
}
