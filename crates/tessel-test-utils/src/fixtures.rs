//! Reusable grid fixtures for evolution tests.
//!
//! - [`block`]: 2x2 still life centred in a 4x4 dead border.
//! - [`blinker`]: horizontal blinker `{(2,1),(2,2),(2,3)}` on a 5x5 grid.
//! - [`glider`]: 5-cell glider at a given offset.

use tessel_core::GridState;

use crate::grid_with_cells;

/// Live cells of the standard down-right glider, anchored at `(0, 0)`.
pub const GLIDER_CELLS: [(i32, i32); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// 2x2 block at `(1, 1)` on a 4x4 grid.
pub fn block() -> GridState {
    grid_with_cells(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)])
}

/// Horizontal blinker on a 5x5 grid.
pub fn blinker() -> GridState {
    grid_with_cells(5, 5, &[(2, 1), (2, 2), (2, 3)])
}

/// Vertical phase of [`blinker`].
pub fn blinker_vertical() -> GridState {
    grid_with_cells(5, 5, &[(1, 2), (2, 2), (3, 2)])
}

/// Glider with its bounding box at `(row, col)` on a `rows x cols` grid.
pub fn glider(rows: u32, cols: u32, row: i32, col: i32) -> GridState {
    let cells: Vec<_> = GLIDER_CELLS
        .iter()
        .map(|&(r, c)| (r + row, c + col))
        .collect();
    grid_with_cells(rows, cols, &cells)
}
