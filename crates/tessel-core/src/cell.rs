//! Binary cell state.

use std::fmt;

/// State of a single grid cell.
///
/// Exactly two states exist; there is no "unknown" value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Unpopulated.
    #[default]
    Dead,
    /// Populated.
    Alive,
}

impl Cell {
    /// Returns `true` for [`Cell::Alive`].
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The opposite state.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Dead => f.write_str("."),
            Cell::Alive => f.write_str("#"),
        }
    }
}
