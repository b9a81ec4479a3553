//! Error type returned by [`RunController`](crate::RunController) operations.

use std::error::Error;
use std::fmt;

use tessel_core::GridError;
use tessel_patterns::PatternError;

/// Errors from controller commands and edits.
///
/// Each variant wraps the subsystem error that caused it; the grid is
/// never left half-edited when one of these is returned.
#[derive(Debug, PartialEq)]
pub enum ControlError {
    /// A cell edit addressed a coordinate outside the grid.
    Grid(GridError),
    /// A pattern could not be stamped.
    Pattern(PatternError),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid edit failed: {e}"),
            Self::Pattern(e) => write!(f, "pattern injection failed: {e}"),
        }
    }
}

impl Error for ControlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Pattern(e) => Some(e),
        }
    }
}

impl From<GridError> for ControlError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<PatternError> for ControlError {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}
