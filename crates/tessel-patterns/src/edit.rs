//! Direct grid edits: pattern stamping and single-cell toggling.

use tessel_core::{Cell, GridError, GridState};

use crate::error::PatternError;
use crate::pattern::{Origin, Pattern};

/// Set every cell of `pattern`, offset by `origin`, to Alive.
///
/// Injection is all-or-nothing: every target coordinate is checked before
/// any cell is written. If one falls outside the grid the pattern is not
/// clipped; the grid is returned untouched with
/// [`PatternError::OutOfBounds`]. Cells already Alive stay Alive.
pub fn inject(
    grid: &mut GridState,
    pattern: &Pattern,
    origin: impl Into<Origin>,
) -> Result<(), PatternError> {
    let origin = origin.into();
    let mut targets = Vec::with_capacity(pattern.len());
    for &(dx, dy) in pattern.cells() {
        let index = origin
            .row
            .checked_add(dx)
            .zip(origin.col.checked_add(dy))
            .and_then(|(r, c)| grid.index(r, c).ok());
        match index {
            Some(i) => targets.push(i),
            None => {
                return Err(PatternError::OutOfBounds {
                    pattern: pattern.name().to_string(),
                    origin,
                    extent: pattern.bounding_box(),
                    grid: grid.dimensions(),
                })
            }
        }
    }
    let cells = grid.as_mut_slice();
    for i in targets {
        cells[i] = Cell::Alive;
    }
    Ok(())
}

/// Flip the state of one cell.
///
/// Applying it twice restores the original state; no other cell is
/// touched.
pub fn toggle(grid: &mut GridState, row: i32, col: i32) -> Result<(), GridError> {
    let cell = grid.get(row, col)?;
    grid.set(row, col, cell.flipped())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{BLOCK, GLIDER_GUN};
    use proptest::prelude::*;

    #[test]
    fn glider_gun_fits_at_valid_origin() {
        let mut grid = GridState::new(11, 38).unwrap();
        inject(&mut grid, &GLIDER_GUN, (1, 1)).unwrap();
        assert_eq!(grid.population(), 36);
        assert_eq!(grid.get(5, 1).unwrap(), Cell::Alive);
        assert_eq!(grid.get(4, 36).unwrap(), Cell::Alive);
    }

    #[test]
    fn glider_gun_exact_fit() {
        let mut grid = GridState::new(9, 36).unwrap();
        inject(&mut grid, &GLIDER_GUN, (0, 0)).unwrap();
        assert_eq!(grid.population(), 36);
    }

    #[test]
    fn glider_gun_overflow_leaves_grid_untouched() {
        let mut grid = GridState::new(20, 20).unwrap();
        grid.set(0, 0, Cell::Alive).unwrap();
        let before = grid.clone();
        let err = inject(&mut grid, &GLIDER_GUN, (1, 1)).unwrap_err();
        assert!(matches!(
            err,
            PatternError::OutOfBounds {
                extent: (9, 36),
                grid: (20, 20),
                ..
            }
        ));
        assert_eq!(grid, before);
    }

    #[test]
    fn negative_origin_rejected() {
        let mut grid = GridState::new(10, 10).unwrap();
        assert!(inject(&mut grid, &BLOCK, (-1, 3)).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn extreme_origin_does_not_overflow() {
        let mut grid = GridState::new(10, 10).unwrap();
        assert!(inject(&mut grid, &BLOCK, (i32::MAX, i32::MAX)).is_err());
    }

    #[test]
    fn inject_over_live_cells_keeps_them_alive() {
        let mut grid = GridState::new(4, 4).unwrap();
        grid.set(1, 1, Cell::Alive).unwrap();
        inject(&mut grid, &BLOCK, (1, 1)).unwrap();
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn inject_writes_only_pattern_cells() {
        let mut grid = GridState::new(5, 6).unwrap();
        inject(&mut grid, &BLOCK, (3, 4)).unwrap();
        assert_eq!(grid.alive_cells(), vec![(3, 4), (3, 5), (4, 4), (4, 5)]);
    }

    #[test]
    fn toggle_out_of_bounds() {
        let mut grid = GridState::new(3, 3).unwrap();
        assert!(matches!(
            toggle(&mut grid, 3, 0),
            Err(GridError::OutOfBounds { row: 3, col: 0, .. })
        ));
        assert!(toggle(&mut grid, 0, -1).is_err());
    }

    proptest! {
        #[test]
        fn toggle_twice_is_identity(
            rows in 1u32..12,
            cols in 1u32..12,
            r in 0i32..12,
            c in 0i32..12,
            bits in proptest::collection::vec(any::<bool>(), 144),
        ) {
            let r = r % rows as i32;
            let c = c % cols as i32;
            let original = GridState::from_fn(rows, cols, |gr, gc| {
                Cell::from(bits[(gr * 12 + gc) as usize])
            }).unwrap();
            let mut grid = original.clone();

            toggle(&mut grid, r, c).unwrap();
            prop_assert_ne!(grid.get(r, c).unwrap(), original.get(r, c).unwrap());
            for (gr, gc, cell) in grid.iter() {
                if (gr, gc) != (r, c) {
                    prop_assert_eq!(cell, original.get(gr, gc).unwrap());
                }
            }

            toggle(&mut grid, r, c).unwrap();
            prop_assert_eq!(grid, original);
        }
    }
}
