//! Edge (boundary) behaviour for neighbour lookups.

use std::fmt;

/// How neighbour coordinates that fall off the grid are treated.
///
/// The policy is applied uniformly to all four edges. It is chosen once
/// per engine and never varies per call.
///
/// # Examples
///
/// ```
/// use tessel_space::BoundaryPolicy;
///
/// // Clamped: off-grid neighbours resolve to nothing (counted Dead).
/// assert_eq!(BoundaryPolicy::Clamped.resolve(-1, 0, 4, 4), None);
///
/// // Toroidal: off-grid neighbours wrap to the opposite edge.
/// assert_eq!(BoundaryPolicy::Toroidal.resolve(-1, 0, 4, 4), Some((3, 0)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    /// Any coordinate outside the grid is Dead.
    #[default]
    Clamped,
    /// Coordinates wrap modulo rows/cols (torus topology).
    Toroidal,
}

impl BoundaryPolicy {
    /// Resolve one axis value against an axis of length `len`.
    ///
    /// Returns `Some(in_range_value)`, or `None` when the value is off-grid
    /// under [`BoundaryPolicy::Clamped`].
    #[inline]
    pub fn resolve_axis(self, val: i64, len: u32) -> Option<i32> {
        let n = len as i64;
        if (0..n).contains(&val) {
            return Some(val as i32);
        }
        match self {
            BoundaryPolicy::Clamped => None,
            BoundaryPolicy::Toroidal => Some(val.rem_euclid(n) as i32),
        }
    }

    /// Resolve a `(row, col)` pair on a `rows x cols` grid.
    ///
    /// Either both axes resolve or the neighbour is absent.
    #[inline]
    pub fn resolve(self, row: i64, col: i64, rows: u32, cols: u32) -> Option<(i32, i32)> {
        let r = self.resolve_axis(row, rows)?;
        let c = self.resolve_axis(col, cols)?;
        Some((r, c))
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryPolicy::Clamped => f.write_str("clamped"),
            BoundaryPolicy::Toroidal => f.write_str("toroidal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn in_range_is_identity_for_both() {
        for policy in [BoundaryPolicy::Clamped, BoundaryPolicy::Toroidal] {
            assert_eq!(policy.resolve_axis(0, 5), Some(0));
            assert_eq!(policy.resolve_axis(4, 5), Some(4));
        }
    }

    #[test]
    fn clamped_drops_both_sides() {
        assert_eq!(BoundaryPolicy::Clamped.resolve_axis(-1, 5), None);
        assert_eq!(BoundaryPolicy::Clamped.resolve_axis(5, 5), None);
        assert_eq!(BoundaryPolicy::Clamped.resolve(0, 5, 5, 5), None);
    }

    #[test]
    fn toroidal_wraps_both_sides() {
        assert_eq!(BoundaryPolicy::Toroidal.resolve_axis(-1, 5), Some(4));
        assert_eq!(BoundaryPolicy::Toroidal.resolve_axis(5, 5), Some(0));
        assert_eq!(BoundaryPolicy::Toroidal.resolve(-1, 5, 5, 5), Some((4, 0)));
    }

    #[test]
    fn toroidal_single_cell_axis() {
        assert_eq!(BoundaryPolicy::Toroidal.resolve_axis(-1, 1), Some(0));
        assert_eq!(BoundaryPolicy::Toroidal.resolve_axis(1, 1), Some(0));
    }

    proptest! {
        #[test]
        fn resolved_coordinates_are_always_in_range(
            val in -100i64..100,
            len in 1u32..20,
        ) {
            for policy in [BoundaryPolicy::Clamped, BoundaryPolicy::Toroidal] {
                if let Some(v) = policy.resolve_axis(val, len) {
                    prop_assert!(v >= 0 && (v as u32) < len);
                }
            }
        }
    }
}
