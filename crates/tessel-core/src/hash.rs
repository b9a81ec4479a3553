//! Hashing utilities for grid comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of grid state. These
//! hashes are not cryptographically secure; they are used for cheap
//! equality checks such as cycle detection.

use crate::cell::Cell;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash a grid's shape and row-major cells.
///
/// Dimensions are folded in first so that two grids with the same cell
/// sequence but different shapes hash differently. Each cell contributes
/// one byte (`0` Dead, `1` Alive).
pub fn grid_fingerprint(rows: u32, cols: u32, cells: &[Cell]) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, rows);
    hash = fnv1a_u32(hash, cols);
    for &cell in cells {
        hash = fnv1a_byte(hash, cell.is_alive() as u8);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_cells_same_hash() {
        let a = [Cell::Alive, Cell::Dead, Cell::Alive];
        let b = [Cell::Alive, Cell::Dead, Cell::Alive];
        assert_eq!(grid_fingerprint(1, 3, &a), grid_fingerprint(1, 3, &b));
    }

    #[test]
    fn different_cells_different_hash() {
        let a = [Cell::Alive, Cell::Dead, Cell::Alive];
        let b = [Cell::Alive, Cell::Alive, Cell::Alive];
        assert_ne!(grid_fingerprint(1, 3, &a), grid_fingerprint(1, 3, &b));
    }

    #[test]
    fn shape_matters() {
        let cells = [Cell::Dead; 6];
        assert_ne!(grid_fingerprint(2, 3, &cells), grid_fingerprint(3, 2, &cells));
    }
}
