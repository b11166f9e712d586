use macroquad::prelude::*;

use crate::ui::Layout;

/// What a pointer event is aimed at, resolved once per event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventTarget {
    PaletteSlot(usize),
    Canvas,
    Other,
}

/// Pointer state sampled once per frame by the app loop. Keeping input as
/// plain data lets the dispatcher run without a window in tests.
#[derive(Copy, Clone, Debug)]
pub struct PointerSnapshot {
    /// Position in screen pixels.
    pub position: Vec2,
    /// Whether the primary button is held this frame.
    pub pressed: bool,
}

/// Convert a screen-space pointer position to coordinates local to a
/// surface rect. The contract is fixed: subtract the surface origin,
/// whatever the surrounding layout looks like.
pub fn pointer_to_local(screen: Vec2, surface: Rect) -> Vec2 {
    screen - surface.point()
}

/// Resolve a screen point against the layout. Palette slots are checked
/// first; anything outside both the slots and the canvas is `Other`.
pub fn resolve_target(layout: &Layout, point: Vec2) -> EventTarget {
    for (i, slot) in layout.slots.iter().enumerate() {
        if slot.contains(point) {
            return EventTarget::PaletteSlot(i);
        }
    }
    if layout.canvas.contains(point) {
        return EventTarget::Canvas;
    }
    EventTarget::Other
}
