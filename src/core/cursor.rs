/// The highlighted cell on the mapper canvas, in snapped pixel
/// coordinates. Updated on every pointer move over the canvas and read by
/// each render tick. Single-threaded access only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_starts_at_origin_and_tracks_sets() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.pos(), (0, 0));
        cursor.set(150, 300);
        assert_eq!(cursor.pos(), (150, 300));
        cursor.set(0, 450);
        assert_eq!(cursor.pos(), (0, 450));
    }
}
