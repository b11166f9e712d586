use macroquad::prelude::*;

use crate::error::MapperError;

/// Snap a raw pixel coordinate to the origin of its containing cell.
///
/// Exact cell boundaries belong to the cell starting at the boundary.
/// Out-of-range input is clamped into the grid: anything before the first
/// boundary snaps to 0, anything past the far edge snaps to the origin of
/// the last cell.
pub fn snap(p: f32, cell_size: i32, extent: i32) -> i32 {
    let snapped = (p / cell_size as f32).floor() as i32 * cell_size;
    snapped.clamp(0, extent - cell_size)
}

/// Canvas dimensions and cell size, fixed at startup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl GridSpec {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self, MapperError> {
        if cell_size <= 0 || cell_size > width || cell_size > height {
            return Err(MapperError::InvalidGrid {
                width,
                height,
                cell_size,
            });
        }
        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    /// Snap a canvas-local point to the origin of its cell.
    pub fn snap_point(&self, local: Vec2) -> (i32, i32) {
        (
            snap(local.x, self.cell_size, self.width),
            snap(local.y, self.cell_size, self.height),
        )
    }

    #[inline]
    pub fn cell_size_f(&self) -> f32 {
        self.cell_size as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_floors_to_cell_origin() {
        for p in 0..500 {
            let s = snap(p as f32, 50, 500);
            assert_eq!(s, (p / 50) * 50);
            assert!(s <= p && p < s + 50);
        }
    }

    #[test]
    fn snap_keeps_boundary_in_next_cell() {
        assert_eq!(snap(50.0, 50, 500), 50);
        assert_eq!(snap(49.999, 50, 500), 0);
        assert_eq!(snap(100.0, 50, 500), 100);
    }

    #[test]
    fn snap_clamps_out_of_range_input() {
        assert_eq!(snap(-30.0, 50, 500), 0);
        assert_eq!(snap(500.0, 50, 500), 450);
        assert_eq!(snap(9999.0, 50, 500), 450);
    }

    #[test]
    fn snap_point_snaps_both_axes() {
        let grid = GridSpec::new(500, 500, 50).unwrap();
        assert_eq!(grid.snap_point(Vec2::new(73.0, 12.0)), (50, 0));
        assert_eq!(grid.snap_point(Vec2::new(0.0, 499.0)), (0, 450));
    }

    #[test]
    fn grid_spec_rejects_bad_cell_size() {
        assert!(GridSpec::new(500, 500, 0).is_err());
        assert!(GridSpec::new(500, 500, -50).is_err());
        assert!(GridSpec::new(500, 500, 501).is_err());
        assert!(GridSpec::new(500, 500, 500).is_ok());
    }
}
