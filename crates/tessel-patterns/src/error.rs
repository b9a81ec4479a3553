//! Error types for pattern seeding and injection.

use std::error::Error;
use std::fmt;

use crate::pattern::Origin;

/// Errors from [`inject`](crate::inject), the [`PatternLibrary`](crate::PatternLibrary)
/// and [`Density`](crate::Density) validation.
#[derive(Clone, Debug, PartialEq)]
pub enum PatternError {
    /// At least one pattern cell would land outside the grid. The grid
    /// was left unmodified.
    OutOfBounds {
        /// Name of the pattern being stamped.
        pattern: String,
        /// Requested origin.
        origin: Origin,
        /// Pattern bounding box as `(rows, cols)`.
        extent: (u32, u32),
        /// Grid dimensions as `(rows, cols)`.
        grid: (u32, u32),
    },
    /// No pattern is registered under this name.
    UnknownPattern {
        /// The requested name.
        name: String,
    },
    /// Seeding density is NaN, infinite, or outside `[0, 1]`.
    InvalidDensity {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                pattern,
                origin,
                extent,
                grid,
            } => write!(
                f,
                "pattern '{pattern}' ({}x{}) at {origin} does not fit a {}x{} grid",
                extent.0, extent.1, grid.0, grid.1
            ),
            Self::UnknownPattern { name } => write!(f, "unknown pattern '{name}'"),
            Self::InvalidDensity { value } => {
                write!(f, "density must be finite and in [0, 1], got {value}")
            }
        }
    }
}

impl Error for PatternError {}
