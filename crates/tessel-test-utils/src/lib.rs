//! Test utilities and grid fixtures for Tessel development.
//!
//! Grids are easiest to read in tests as ASCII art. [`grid_from_ascii`]
//! parses one line per row (`#`, `O` or `*` for Alive, anything else
//! Dead) and [`alive_set`] turns a grid back into a comparable set of
//! live coordinates. [`random_grid`] builds reproducible soups for
//! determinism tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_core::{Cell, GridState};

pub mod fixtures;

/// Parse an ASCII picture into a grid.
///
/// Leading/trailing blank lines and per-line indentation are ignored;
/// short lines are padded with Dead cells to the widest line.
///
/// # Panics
///
/// Panics if the picture is empty. Test-only helper.
pub fn grid_from_ascii(picture: &str) -> GridState {
    let lines: Vec<&str> = picture
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!lines.is_empty(), "empty grid picture");
    let rows = lines.len() as u32;
    let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
    GridState::from_fn(rows, cols, |r, c| {
        let ch = lines[r as usize].chars().nth(c as usize).unwrap_or('.');
        Cell::from(matches!(ch, '#' | 'O' | '*'))
    })
    .expect("picture dimensions are non-zero")
}

/// Render a grid as `#`/`.` lines (same format [`grid_from_ascii`] reads).
pub fn to_ascii(grid: &GridState) -> String {
    grid.to_string()
}

/// A `rows x cols` grid with exactly `cells` Alive.
///
/// # Panics
///
/// Panics if a cell is out of bounds.
pub fn grid_with_cells(rows: u32, cols: u32, cells: &[(i32, i32)]) -> GridState {
    let mut grid = GridState::new(rows, cols).expect("non-zero dimensions");
    for &(r, c) in cells {
        grid.set(r, c, Cell::Alive)
            .unwrap_or_else(|e| panic!("fixture cell ({r}, {c}): {e}"));
    }
    grid
}

/// Deterministic RNG for tests.
pub fn test_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A `rows x cols` grid where each cell is Alive with probability
/// `density`, drawn row-major from [`test_rng`]`(seed)`.
///
/// # Panics
///
/// Panics on zero dimensions or a density outside `[0, 1]`.
pub fn random_grid(rows: u32, cols: u32, density: f64, seed: u64) -> GridState {
    let mut rng = test_rng(seed);
    GridState::from_fn(rows, cols, |_, _| Cell::from(rng.random_bool(density)))
        .expect("non-zero dimensions")
}

/// Set of live coordinates.
pub fn alive_set(grid: &GridState) -> BTreeSet<(i32, i32)> {
    grid.alive_cells().into_iter().collect()
}

/// Translate every coordinate in `cells` by `(dr, dc)`.
pub fn shifted(cells: &BTreeSet<(i32, i32)>, dr: i32, dc: i32) -> BTreeSet<(i32, i32)> {
    cells.iter().map(|&(r, c)| (r + dr, c + dc)).collect()
}

/// Assert two grids are identical, printing both on failure.
#[track_caller]
pub fn assert_grid_eq(actual: &GridState, expected: &GridState) {
    assert!(
        actual == expected,
        "grids differ\n--- actual ---\n{actual}--- expected ---\n{expected}"
    );
}
