//! Fixed-size rectangular cell buffer.

use std::fmt;

use crate::cell::Cell;
use crate::error::GridError;
use crate::hash;

/// A `rows x cols` grid of [`Cell`]s stored row-major.
///
/// Dimensions are fixed at construction. Every coordinate-taking method
/// is bounds-checked and returns [`GridError::OutOfBounds`] for anything
/// outside `[0, rows) x [0, cols)`. Coordinates are `i32` so callers can
/// pass raw (possibly negative) values straight from input translation.
///
/// # Examples
///
/// ```
/// use tessel_core::{Cell, GridState};
///
/// let mut grid = GridState::new(3, 4).unwrap();
/// assert_eq!(grid.dimensions(), (3, 4));
/// grid.set(1, 2, Cell::Alive).unwrap();
/// assert_eq!(grid.get(1, 2).unwrap(), Cell::Alive);
/// assert!(grid.get(3, 0).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GridState {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl GridState {
    /// Coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-Dead grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        Self::filled(rows, cols, Cell::Dead)
    }

    /// Create a grid with every cell set to `fill`.
    pub fn filled(rows: u32, cols: u32, fill: Cell) -> Result<Self, GridError> {
        check_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![fill; (rows as usize) * (cols as usize)],
        })
    }

    /// Create a grid whose cells are produced by `f(row, col)`.
    pub fn from_fn(
        rows: u32,
        cols: u32,
        mut f: impl FnMut(i32, i32) -> Cell,
    ) -> Result<Self, GridError> {
        check_dims(rows, cols)?;
        let mut cells = Vec::with_capacity((rows as usize) * (cols as usize));
        for r in 0..rows as i32 {
            for c in 0..cols as i32 {
                cells.push(f(r, c));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `(row, col)` addresses a cell of this grid.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as u32) < self.rows && (col as u32) < self.cols
    }

    /// Read one cell.
    pub fn get(&self, row: i32, col: i32) -> Result<Cell, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrite exactly one cell.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Number of Alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Set every cell to Dead.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Overwrite every cell, row-major, with `f(row, col)`.
    pub fn fill_with(&mut self, mut f: impl FnMut(i32, i32) -> Cell) {
        let cols = self.cols as usize;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f((i / cols) as i32, (i % cols) as i32);
        }
    }

    /// Row-major iterator over `(row, col, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / cols) as i32, (i % cols) as i32, cell))
    }

    /// Coordinates of every Alive cell, in row-major order.
    pub fn alive_cells(&self) -> Vec<(i32, i32)> {
        self.iter()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    /// Deterministic 64-bit fingerprint of shape and contents.
    ///
    /// See [`hash::grid_fingerprint`].
    pub fn fingerprint(&self) -> u64 {
        hash::grid_fingerprint(self.rows, self.cols, &self.cells)
    }

    /// Row-major view of the underlying cells.
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable row-major view of every cell. The length is fixed, so the
    /// shape cannot change through it.
    pub fn as_mut_slice(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Row-major slice index of `(row, col)`.
    pub fn index(&self, row: i32, col: i32) -> Result<usize, GridError> {
        if !self.contains(row, col) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row as usize * self.cols as usize + col as usize)
    }
}

fn check_dims(rows: u32, cols: u32) -> Result<(), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyGrid);
    }
    if rows > GridState::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "rows",
            value: rows,
            max: GridState::MAX_DIM,
        });
    }
    if cols > GridState::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "cols",
            value: cols,
            max: GridState::MAX_DIM,
        });
    }
    Ok(())
}

impl fmt::Debug for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridState")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("population", &self.population())
            .finish()
    }
}

/// One line per row, `#` for Alive and `.` for Dead.
impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_is_all_dead() {
        let g = GridState::new(4, 6).unwrap();
        assert_eq!(g.dimensions(), (4, 6));
        assert_eq!(g.cell_count(), 24);
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn new_zero_rows_returns_error() {
        assert_eq!(GridState::new(0, 5), Err(GridError::EmptyGrid));
        assert_eq!(GridState::new(5, 0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            GridState::new(big, 1),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            GridState::new(1, big),
            Err(GridError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn get_out_of_bounds_reports_coordinate() {
        let g = GridState::new(3, 3).unwrap();
        assert_eq!(
            g.get(-1, 0),
            Err(GridError::OutOfBounds {
                row: -1,
                col: 0,
                rows: 3,
                cols: 3
            })
        );
        assert!(g.get(0, 3).is_err());
        assert!(g.get(3, 0).is_err());
        assert!(g.get(2, 2).is_ok());
    }

    #[test]
    fn set_out_of_bounds_leaves_grid_untouched() {
        let mut g = GridState::new(2, 2).unwrap();
        assert!(g.set(2, 0, Cell::Alive).is_err());
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn index_matches_row_major_slice() {
        let mut g = GridState::new(3, 4).unwrap();
        let i = g.index(2, 1).unwrap();
        assert_eq!(i, 9);
        g.as_mut_slice()[i] = Cell::Alive;
        assert_eq!(g.get(2, 1).unwrap(), Cell::Alive);
        assert_eq!(g.population(), 1);
        assert!(matches!(g.index(-1, 0), Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn iter_is_row_major() {
        let g = GridState::from_fn(2, 3, |r, c| Cell::from(r == 1 && c == 2)).unwrap();
        let coords: Vec<_> = g.iter().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(g.alive_cells(), vec![(1, 2)]);
    }

    #[test]
    fn clear_kills_everything() {
        let mut g = GridState::filled(3, 3, Cell::Alive).unwrap();
        assert_eq!(g.population(), 9);
        g.clear();
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn display_renders_rows() {
        let mut g = GridState::new(2, 3).unwrap();
        g.set(0, 1, Cell::Alive).unwrap();
        assert_eq!(g.to_string(), ".#.\n...\n");
    }

    #[test]
    fn fingerprint_tracks_contents_and_shape() {
        let a = GridState::new(2, 3).unwrap();
        let b = GridState::new(3, 2).unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());

        let mut c = a.clone();
        assert_eq!(a.fingerprint(), c.fingerprint());
        c.set(0, 0, Cell::Alive).unwrap();
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    proptest! {
        #[test]
        fn set_then_get_touches_one_cell(
            rows in 1u32..12,
            cols in 1u32..12,
            r in 0i32..12,
            c in 0i32..12,
        ) {
            let r = r % rows as i32;
            let c = c % cols as i32;
            let mut g = GridState::new(rows, cols).unwrap();
            g.set(r, c, Cell::Alive).unwrap();
            prop_assert_eq!(g.get(r, c).unwrap(), Cell::Alive);
            prop_assert_eq!(g.alive_cells(), vec![(r, c)]);
        }
    }
}
