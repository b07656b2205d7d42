//! Grid geometry, computed once from the window size and the cell size.

use crate::types::{GridPosition, PixelRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub width_px: usize,
    pub height_px: usize,
    pub cell_size: usize,
    /// Number of cells along x
    pub num_x: usize,
    /// Number of cells along y
    pub num_y: usize,
}

impl GridConfig {
    /// 1024x768 window split in 16 pixel cells, i.e. a 64x48 grid.
    pub const DEFAULT: GridConfig = GridConfig::new(1024, 768, 16);

    /// Panics if the window cannot hold at least one cell.
    pub const fn new(width_px: usize, height_px: usize, cell_size: usize) -> Self {
        assert!(cell_size > 0 && width_px >= cell_size && height_px >= cell_size);
        GridConfig {
            width_px,
            height_px,
            cell_size,
            num_x: width_px / cell_size,
            num_y: height_px / cell_size,
        }
    }

    pub fn contains(&self, pos: GridPosition) -> bool {
        pos.x < self.num_x && pos.y < self.num_y
    }

    /// Pixel area covered by the cell at `pos`. Origin is the bottom left corner.
    pub fn cell_rect(&self, pos: GridPosition) -> PixelRect {
        let x1 = pos.x * self.cell_size;
        let y1 = pos.y * self.cell_size;
        PixelRect {
            x1,
            y1,
            x2: x1 + self.cell_size,
            y2: y1 + self.cell_size,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_dimensions() {
        let grid = GridConfig::default();
        assert_eq!((grid.num_x, grid.num_y), (64, 48));
    }

    #[test]
    fn leftover_pixels_are_not_a_cell() {
        let grid = GridConfig::new(100, 50, 16);
        assert_eq!((grid.num_x, grid.num_y), (6, 3));
        assert!(!grid.contains(GridPosition { x: 6, y: 0 }));
    }

    #[test]
    fn cell_rect_covers_one_cell() {
        let grid = GridConfig::DEFAULT;
        let rect = grid.cell_rect(GridPosition { x: 2, y: 3 });
        assert_eq!(
            rect,
            PixelRect {
                x1: 32,
                y1: 48,
                x2: 48,
                y2: 64
            }
        );
    }

    #[test]
    fn last_cell_ends_on_window_edge() {
        let grid = GridConfig::DEFAULT;
        let rect = grid.cell_rect(GridPosition { x: 63, y: 47 });
        assert_eq!((rect.x2, rect.y2), (grid.width_px, grid.height_px));
    }
}
