use std::fmt;
use std::sync::Arc;

/// Cheap clonable reference to a tile's source image path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileImage(Arc<str>);

impl TileImage {
    pub fn new(path: &str) -> Self {
        Self(Arc::from(path))
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One placed tile. `x`/`y` are the snapped origin of the occupied cell,
/// always multiples of the cell size. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub image: TileImage,
}

/// Row/column extent of the placed map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MapSummary {
    pub rows: i32,
    pub cols: i32,
}

/// Append-only, insertion-ordered collection of placed tiles.
///
/// Several tiles may share one coordinate; draw order is insertion order,
/// so the last-inserted tile at a coordinate visually wins. Accepted
/// behavior, not enforced away.
#[derive(Clone, Debug, Default)]
pub struct TileMap {
    tiles: Vec<Tile>,
}

impl TileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, x: i32, y: i32, image: TileImage) {
        self.tiles.push(Tile { x, y, image });
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Row/column counts covered by the placed tiles, a pure query.
    /// An empty map reports zero rows and columns.
    pub fn summarize(&self, cell_size: i32) -> MapSummary {
        if self.tiles.is_empty() {
            return MapSummary::default();
        }

        let mut max_x = 0;
        let mut max_y = 0;
        for tile in &self.tiles {
            max_x = max_x.max(tile.x);
            max_y = max_y.max(tile.y);
        }

        MapSummary {
            rows: max_y / cell_size + 1,
            cols: max_x / cell_size + 1,
        }
    }
}
