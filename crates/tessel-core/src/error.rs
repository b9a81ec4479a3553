//! Error types for grid construction and cell access.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or coordinate access.
///
/// Out-of-range coordinates are a caller bug, not a systemic failure:
/// every variant is returned to the immediate caller and never absorbed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside `[0, rows) x [0, cols)`.
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension exceeds the maximum addressable size.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// Two grids that must share a shape do not.
    DimensionMismatch {
        /// Shape of the source grid.
        expected: (u32, u32),
        /// Shape of the destination grid.
        actual: (u32, u32),
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "cell ({row}, {col}) out of bounds: [0, {rows}) x [0, {cols})"
            ),
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "grid shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

impl Error for GridError {}
