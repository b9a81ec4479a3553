//! Pixel viewport geometry for drivers that draw the grid.
//!
//! The engine never sees pixels; this helper lets a driver size its grid
//! to a window and translate pointer positions into cell coordinates
//! before calling [`RunController::handle_click`](crate::RunController::handle_click).
//!
//! Cells are laid out as `margin | cell | margin | cell | ... | margin`,
//! so cell `(row, col)` covers
//! `x in [margin + col * (cell + margin), .. + cell)` and likewise for `y`.

/// Window size and cell layout, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Window width.
    pub width: u32,
    /// Window height.
    pub height: u32,
    /// Side length of one square cell.
    pub cell: u32,
    /// Gap between cells and around the border.
    pub margin: u32,
}

impl Default for Viewport {
    /// 505x505 window of 20 px cells with 5 px gaps (a 20x20 grid).
    fn default() -> Self {
        Self {
            width: 505,
            height: 505,
            cell: 20,
            margin: 5,
        }
    }
}

impl Viewport {
    /// Distance between the starts of adjacent cells. `None` if it is 0
    /// or overflows.
    fn pitch(&self) -> Option<u32> {
        self.cell.checked_add(self.margin).filter(|&p| p > 0)
    }

    fn cells_along(&self, extent: u32) -> u32 {
        match self.pitch() {
            Some(pitch) => extent.saturating_sub(self.margin) / pitch,
            None => 0,
        }
    }

    /// Number of whole cells that fit vertically.
    pub fn rows(&self) -> u32 {
        self.cells_along(self.height)
    }

    /// Number of whole cells that fit horizontally.
    pub fn cols(&self) -> u32 {
        self.cells_along(self.width)
    }

    /// Top-left pixel of cell `(row, col)`, as `(x, y)`.
    ///
    /// `None` if the layout has no usable pitch or the pixel lies beyond
    /// `u32` space.
    pub fn cell_origin(&self, row: u32, col: u32) -> Option<(u32, u32)> {
        let pitch = self.pitch()?;
        let along = |i: u32| i.checked_mul(pitch)?.checked_add(self.margin);
        Some((along(col)?, along(row)?))
    }

    /// Cell under pixel `(x, y)`, or `None` on a margin or outside the grid.
    pub fn cell_at(&self, x: u32, y: u32) -> Option<(i32, i32)> {
        let col = self.axis_cell(x, self.cols())?;
        let row = self.axis_cell(y, self.rows())?;
        Some((row as i32, col as i32))
    }

    fn axis_cell(&self, px: u32, count: u32) -> Option<u32> {
        let offset = px.checked_sub(self.margin)?;
        let pitch = self.pitch()?;
        if offset % pitch >= self.cell {
            return None;
        }
        let idx = offset / pitch;
        (idx < count).then_some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_viewport_is_twenty_square() {
        let v = Viewport::default();
        assert_eq!((v.rows(), v.cols()), (20, 20));
    }

    #[test]
    fn cell_origin_matches_layout() {
        let v = Viewport::default();
        assert_eq!(v.cell_origin(0, 0), Some((5, 5)));
        assert_eq!(v.cell_origin(1, 2), Some((55, 30)));
    }

    #[test]
    fn cell_at_hits_and_misses() {
        let v = Viewport::default();
        assert_eq!(v.cell_at(5, 5), Some((0, 0)));
        assert_eq!(v.cell_at(24, 24), Some((0, 0)));
        assert_eq!(v.cell_at(25, 5), None); // gap after first column
        assert_eq!(v.cell_at(30, 55), Some((2, 1)));
        assert_eq!(v.cell_at(0, 0), None);
        assert_eq!(v.cell_at(504, 504), None);
        assert_eq!(v.cell_at(480, 480), Some((19, 19)));
    }

    #[test]
    fn degenerate_layout_has_no_cells() {
        let v = Viewport {
            width: 100,
            height: 100,
            cell: 0,
            margin: 0,
        };
        assert_eq!(v.rows(), 0);
        assert_eq!(v.cell_at(10, 10), None);
    }

    #[test]
    fn oversized_cells_yield_no_grid() {
        let v = Viewport {
            width: 505,
            height: 505,
            cell: u32::MAX,
            margin: 1,
        };
        assert_eq!((v.rows(), v.cols()), (0, 0));
        assert_eq!(v.cell_at(10, 10), None);
        assert_eq!(v.cell_origin(0, 0), None);
    }

    #[test]
    fn far_cell_origin_overflows_to_none() {
        let v = Viewport::default();
        assert_eq!(v.cell_origin(u32::MAX, 0), None);
        assert_eq!(v.cell_origin(0, u32::MAX / 25 + 1), None);
    }
}
