//! Pattern stamping against real grids: all-or-nothing injection,
//! live-cell accounting and shape preservation.

use std::collections::BTreeSet;

use tessel_core::{Cell, GridState};
use tessel_patterns::catalogue::{BLOCK, GLIDER_GUN};
use tessel_patterns::{
    inject, seed, seeded_rng, toggle, Density, Origin, PatternError, PatternLibrary,
};
use tessel_space::{BoundaryPolicy, NeighborCounter};
use tessel_test_utils::{alive_set, shifted};

#[test]
fn glider_gun_adds_exactly_its_cell_count() {
    let library = PatternLibrary::builtin();
    let mut grid = GridState::new(40, 60).unwrap();
    let before = grid.population();
    library
        .inject_named(&mut grid, "glider_gun", Origin::new(5, 10))
        .unwrap();
    assert_eq!(grid.population() - before, GLIDER_GUN.len());

    let expected: BTreeSet<_> = GLIDER_GUN
        .cells()
        .iter()
        .map(|&(r, c)| (r + 5, c + 10))
        .collect();
    assert_eq!(alive_set(&grid), expected);
}

#[test]
fn glider_gun_every_overflowing_origin_is_rejected() {
    // 9x36 box on a 12x40 grid: rows 0..=3 and cols 0..=4 fit.
    let library = PatternLibrary::builtin();
    for row in -1..6 {
        for col in -1..7 {
            let mut grid = GridState::new(12, 40).unwrap();
            let result = library.inject_named(&mut grid, "glider_gun", (row, col));
            let fits = (0..=3).contains(&row) && (0..=4).contains(&col);
            if fits {
                assert!(result.is_ok(), "origin ({row}, {col}) should fit");
                assert_eq!(grid.population(), 36);
            } else {
                assert!(
                    matches!(result, Err(PatternError::OutOfBounds { .. })),
                    "origin ({row}, {col}) should be rejected"
                );
                assert_eq!(grid.population(), 0, "grid modified at ({row}, {col})");
            }
        }
    }
}

#[test]
fn rejected_injection_preserves_seeded_grid() {
    let mut grid = GridState::new(16, 16).unwrap();
    seed(&mut grid, Density::new(0.3).unwrap(), &mut seeded_rng(9));
    let snapshot = grid.clone();
    assert!(inject(&mut grid, &GLIDER_GUN, (0, 0)).is_err());
    assert_eq!(grid, snapshot);
}

#[test]
fn stamped_block_has_three_neighbours_per_cell() {
    let mut grid = GridState::new(6, 6).unwrap();
    inject(&mut grid, &BLOCK, (2, 2)).unwrap();
    let counter = NeighborCounter::new(BoundaryPolicy::Clamped);
    for (r, c) in grid.alive_cells() {
        assert_eq!(counter.count_alive(&grid, r, c), 3);
    }
    let anchored = alive_set(&grid);
    let origin_shape: BTreeSet<_> = BLOCK.cells().iter().copied().collect();
    assert_eq!(anchored, shifted(&origin_shape, 2, 2));
}

#[test]
fn toggle_then_inject_then_toggle() {
    let mut grid = GridState::new(5, 5).unwrap();
    toggle(&mut grid, 0, 0).unwrap();
    inject(&mut grid, &BLOCK, (0, 0)).unwrap();
    assert_eq!(grid.population(), 4);
    toggle(&mut grid, 0, 0).unwrap();
    assert_eq!(grid.get(0, 0).unwrap(), Cell::Dead);
    assert_eq!(grid.population(), 3);
}
