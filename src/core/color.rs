#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
pub const MAGENTA: Rgba = Rgba::rgb(255, 0, 255);

/// Canvas background fill.
pub const BACKGROUND: Rgba = BLACK;
/// Cursor highlight and palette hover border.
pub const HIGHLIGHT: Rgba = MAGENTA;
/// Border of the active palette selection.
pub const ACTIVE_BORDER: Rgba = BLACK;
/// Background of the palette strip.
pub const STRIP_BACKGROUND: Rgba = Rgba::rgb(230, 230, 230);
