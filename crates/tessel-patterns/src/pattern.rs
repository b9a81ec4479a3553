//! Pattern shapes and stamp origins.

use std::borrow::Cow;
use std::fmt;

/// Where a pattern's `(0, 0)` offset lands on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Origin {
    /// Grid row of the pattern's zero row offset.
    pub row: i32,
    /// Grid column of the pattern's zero column offset.
    pub col: i32,
}

impl Origin {
    /// Create an origin at `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<(i32, i32)> for Origin {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A named set of live-cell offsets.
///
/// Each offset is `(dx, dy)` where `dx` is added to the origin row and
/// `dy` to the origin column. Offsets are expected to be non-negative
/// with the shape touching row 0 and column 0, but nothing relies on it:
/// [`bounding_box`](Pattern::bounding_box) measures the actual extent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    name: Cow<'static, str>,
    cells: Cow<'static, [(i32, i32)]>,
}

impl Pattern {
    /// A pattern backed by static data (used by the built-in catalogue).
    pub const fn fixed(name: &'static str, cells: &'static [(i32, i32)]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            cells: Cow::Borrowed(cells),
        }
    }

    /// A pattern built at runtime.
    pub fn new(name: impl Into<String>, cells: Vec<(i32, i32)>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            cells: Cow::Owned(cells),
        }
    }

    /// Pattern name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Live-cell offsets.
    pub fn cells(&self) -> &[(i32, i32)] {
        &self.cells
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the pattern has no live cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Extent as `(rows, cols)`; `(0, 0)` for an empty pattern.
    pub fn bounding_box(&self) -> (u32, u32) {
        let mut it = self.cells.iter();
        let Some(&(r0, c0)) = it.next() else {
            return (0, 0);
        };
        let (mut min_r, mut max_r, mut min_c, mut max_c) = (r0, r0, c0, c0);
        for &(r, c) in it {
            min_r = min_r.min(r);
            max_r = max_r.max(r);
            min_c = min_c.min(c);
            max_c = max_c.max(c);
        }
        (
            (max_r as i64 - min_r as i64 + 1) as u32,
            (max_c as i64 - min_c as i64 + 1) as u32,
        )
    }
}
