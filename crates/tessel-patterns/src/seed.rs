//! Random seeding.
//!
//! The RNG is always injected. For reproducible runs use [`seeded_rng`],
//! a ChaCha8 generator: identical seeds produce identical grids on every
//! platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_core::{Cell, GridState};

use crate::error::PatternError;

/// Probability that a seeded cell is Alive, validated to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density(f64);

impl Density {
    /// 10% live cells.
    pub const DEFAULT: Density = Density(0.1);

    /// Validate a density.
    ///
    /// # Errors
    ///
    /// [`PatternError::InvalidDensity`] for NaN, infinities, or values
    /// outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, PatternError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(PatternError::InvalidDensity { value });
        }
        Ok(Self(value))
    }

    /// The probability as a plain `f64`.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Deterministic RNG for seeding.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Overwrite every cell with an independent draw: Alive with probability
/// `density`, Dead otherwise.
///
/// Exactly one sample is drawn per cell, in row-major order, so a given
/// RNG state always produces the same grid.
pub fn seed(grid: &mut GridState, density: Density, rng: &mut impl Rng) {
    let p = density.get();
    grid.fill_with(|_, _| Cell::from(rng.random_bool(p)));
}
