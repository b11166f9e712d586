use crate::core::TileImage;

/// Which tile image is chosen for placement.
///
/// Two states: Idle (nothing chosen yet) and Active(slot). Clicking a slot
/// activates it; clicking the already-active slot keeps it active; nothing
/// the user does returns the selector to Idle. A non-active slot under the
/// pointer carries a transient hover highlight; hover never affects the
/// active slot's highlight.
#[derive(Clone, Debug)]
pub struct Palette {
    slots: Vec<TileImage>,
    active: Option<usize>,
    hovered: Option<usize>,
}

impl Palette {
    pub fn from_manifest(paths: &[&str]) -> Self {
        Self {
            slots: paths.iter().map(|p| TileImage::new(p)).collect(),
            active: None,
            hovered: None,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<&TileImage> {
        self.slots.get(index)
    }

    /// The image placements will use, if any slot has been clicked yet.
    pub fn active(&self) -> Option<&TileImage> {
        self.active.and_then(|i| self.slots.get(i))
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    /// Click on a slot. Out-of-range indices are filtered no-ops.
    pub fn select(&mut self, index: usize) {
        if index < self.slots.len() {
            self.active = Some(index);
        }
    }

    pub fn hover_enter(&mut self, index: usize) {
        if index < self.slots.len() {
            self.hovered = Some(index);
        }
    }

    /// Pointer left a slot; only clears the hover it set.
    pub fn hover_leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }
}
