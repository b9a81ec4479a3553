//! Benchmark profiles for the Tessel Life engine.
//!
//! Provides pre-built grids and [`EngineConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells)
//! - [`stress_profile`]: 316x316 grid (~100K cells)
//! - [`soup`]: deterministic random grid of any shape

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_core::{GridError, GridState};
use tessel_engine::{EngineConfig, RunState};
use tessel_patterns::{seed, seeded_rng, Density, PatternError};
use tessel_space::BoundaryPolicy;

/// Seeding density used by every profile.
pub const PROFILE_DENSITY: f64 = 0.3;

/// Build a reference benchmark profile: 100x100 toroidal grid (10K cells),
/// running from the first tick with cycle detection off.
pub fn reference_profile(seed: u64) -> EngineConfig {
    profile(100, 100, seed)
}

/// Build a stress benchmark profile: 316x316 grid (~100K cells).
///
/// Same settings as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> EngineConfig {
    profile(316, 316, seed)
}

fn profile(rows: u32, cols: u32, seed: u64) -> EngineConfig {
    EngineConfig {
        rows,
        cols,
        boundary: BoundaryPolicy::Toroidal,
        density: PROFILE_DENSITY,
        seed,
        initial_state: RunState::Running,
        cycle_window: 0,
        pause_on_cycle: false,
        seed_on_start: true,
        ..EngineConfig::default()
    }
}

/// Errors from building a benchmark grid.
#[derive(Debug)]
pub enum SoupError {
    /// Bad dimensions.
    Grid(GridError),
    /// Bad density.
    Density(PatternError),
}

impl std::fmt::Display for SoupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "soup grid: {e}"),
            Self::Density(e) => write!(f, "soup density: {e}"),
        }
    }
}

impl std::error::Error for SoupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Density(e) => Some(e),
        }
    }
}

/// A `rows x cols` grid seeded at `density` from `seeded_rng(seed)`.
pub fn soup(rows: u32, cols: u32, density: f64, seed_value: u64) -> Result<GridState, SoupError> {
    let density = Density::new(density).map_err(SoupError::Density)?;
    let mut grid = GridState::new(rows, cols).map_err(SoupError::Grid)?;
    seed(&mut grid, density, &mut seeded_rng(seed_value));
    Ok(grid)
}
