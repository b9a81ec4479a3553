//! Moore-neighbourhood resolution and live-neighbour counting.

use crate::boundary::BoundaryPolicy;
use smallvec::SmallVec;
use tessel_core::{Cell, GridState};

/// All 8 Moore offsets as `(d_row, d_col)`: NW, N, NE, W, E, SW, S, SE.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counts live cells in the Moore neighbourhood under a fixed
/// [`BoundaryPolicy`].
///
/// Each of the 8 offsets is resolved through the policy first; only
/// resolved coordinates are read. Under [`BoundaryPolicy::Clamped`] edge
/// cells have fewer real neighbours (corners 3, edges 5). Under
/// [`BoundaryPolicy::Toroidal`] every cell has exactly 8 offsets, which
/// may alias the same cell on axes shorter than 3; each offset counts
/// on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborCounter {
    boundary: BoundaryPolicy,
}

impl NeighborCounter {
    /// Create a counter using `boundary` for every lookup.
    pub fn new(boundary: BoundaryPolicy) -> Self {
        Self { boundary }
    }

    /// The policy this counter resolves through.
    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Resolved neighbour coordinates of `(row, col)` on a `rows x cols`
    /// grid, in [`MOORE_OFFSETS`] order.
    pub fn neighbours(
        &self,
        row: i32,
        col: i32,
        rows: u32,
        cols: u32,
    ) -> SmallVec<[(i32, i32); 8]> {
        MOORE_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                self.boundary
                    .resolve(row as i64 + dr as i64, col as i64 + dc as i64, rows, cols)
            })
            .collect()
    }

    /// Number of Alive neighbours of `(row, col)`, in `0..=8`.
    ///
    /// Reads `grid` only. Never fails: the policy has already mapped every
    /// offset onto the grid or discarded it.
    pub fn count_alive(&self, grid: &GridState, row: i32, col: i32) -> u8 {
        let (rows, cols) = grid.dimensions();
        self.neighbours(row, col, rows, cols)
            .into_iter()
            .filter(|&(nr, nc)| matches!(grid.get(nr, nc), Ok(Cell::Alive)))
            .count() as u8
    }
}
