use thiserror::Error;

/// Fatal startup failures. Runtime inputs never error: events with an
/// unexpected target are filtered no-ops, and a missing tile image only
/// downgrades to a placeholder texture.
#[derive(Debug, Error)]
pub enum MapperError {
    #[error("drawing surface unsupported: {0}")]
    UnsupportedSurface(String),

    #[error("invalid grid: cell size {cell_size} does not fit a {width}x{height} canvas")]
    InvalidGrid {
        width: i32,
        height: i32,
        cell_size: i32,
    },
}
