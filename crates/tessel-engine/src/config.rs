//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the builder-input for a
//! [`RunController`](crate::RunController). [`validate()`](EngineConfig::validate)
//! checks every structural invariant up front so the controller itself
//! never has to.

use std::error::Error;
use std::fmt;

use tessel_core::{GridError, GridState};
use tessel_patterns::{Density, PatternError};
use tessel_space::BoundaryPolicy;

use crate::controller::RunState;
use crate::viewport::Viewport;

/// Upper bound on [`EngineConfig::cycle_window`].
pub const MAX_CYCLE_WINDOW: usize = 1024;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions are zero or too large.
    Grid(GridError),
    /// Seeding density is out of range.
    Density(PatternError),
    /// `tick_rate_hz` is NaN, infinite, zero, or negative.
    InvalidTickRate {
        /// The invalid value.
        value: f64,
    },
    /// `cycle_window` exceeds [`MAX_CYCLE_WINDOW`].
    CycleWindowTooLarge {
        /// The configured window.
        configured: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Density(e) => write!(f, "density: {e}"),
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and positive, got {value}")
            }
            Self::CycleWindowTooLarge { configured } => write!(
                f,
                "cycle_window {configured} exceeds maximum of {MAX_CYCLE_WINDOW}"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Density(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for a [`RunController`](crate::RunController).
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Grid rows. Default: 20.
    pub rows: u32,
    /// Grid columns. Default: 20.
    pub cols: u32,
    /// Edge handling for neighbour lookups. Default: Clamped.
    pub boundary: BoundaryPolicy,
    /// Probability a cell is Alive after a reseed. Default: 0.1.
    pub density: f64,
    /// Seed for the controller's ChaCha8 RNG.
    pub seed: u64,
    /// State the controller starts in. Default: Paused.
    pub initial_state: RunState,
    /// Where `InjectGliderGun` stamps the gun, as `(row, col)`. Default: (1, 1).
    pub gun_origin: (i32, i32),
    /// Target ticks per second for drivers that pace the loop. Default: 10.
    pub tick_rate_hz: f64,
    /// Generations of fingerprint history kept for cycle detection.
    /// 0 disables detection. Default: 10.
    pub cycle_window: usize,
    /// Pause automatically when a cycle is detected. Default: true.
    pub pause_on_cycle: bool,
    /// Randomly seed the grid when the controller is built. Default: true.
    pub seed_on_start: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            boundary: BoundaryPolicy::Clamped,
            density: Density::DEFAULT.get(),
            seed: 0,
            initial_state: RunState::Paused,
            gun_origin: (1, 1),
            tick_rate_hz: 10.0,
            cycle_window: 10,
            pause_on_cycle: true,
            seed_on_start: true,
        }
    }
}

impl EngineConfig {
    /// Default configuration with the grid sized to fit `viewport`.
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            rows: viewport.rows(),
            cols: viewport.cols(),
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid shape must be constructible.
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Grid(GridError::EmptyGrid));
        }
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value > GridState::MAX_DIM {
                return Err(ConfigError::Grid(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: GridState::MAX_DIM,
                }));
            }
        }
        // 2. Density in [0, 1].
        self.density_checked()?;
        // 3. tick_rate_hz finite and positive, with a finite period
        //    (rejects subnormals where 1.0/hz = inf).
        let hz = self.tick_rate_hz;
        if !hz.is_finite() || hz <= 0.0 || !(1.0 / hz).is_finite() {
            return Err(ConfigError::InvalidTickRate { value: hz });
        }
        // 4. Bounded cycle history.
        if self.cycle_window > MAX_CYCLE_WINDOW {
            return Err(ConfigError::CycleWindowTooLarge {
                configured: self.cycle_window,
            });
        }
        Ok(())
    }

    /// The configured density as a validated [`Density`].
    pub fn density_checked(&self) -> Result<Density, ConfigError> {
        Density::new(self.density).map_err(ConfigError::Density)
    }

    /// Time between ticks implied by `tick_rate_hz`.
    ///
    /// Only meaningful after [`validate()`](EngineConfig::validate) succeeds.
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.tick_rate_hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_succeeds() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_zero_rows_fails() {
        let cfg = EngineConfig {
            rows: 0,
            ..EngineConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Grid(GridError::EmptyGrid)));
    }

    #[test]
    fn validate_huge_cols_fails() {
        let cfg = EngineConfig {
            cols: u32::MAX,
            ..EngineConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::Grid(GridError::DimensionTooLarge { name: "cols", .. })) => {}
            other => panic!("expected DimensionTooLarge(cols), got {other:?}"),
        }
    }

    #[test]
    fn validate_bad_density_fails() {
        for density in [-0.5, 1.01, f64::NAN] {
            let cfg = EngineConfig {
                density,
                ..EngineConfig::default()
            };
            match cfg.validate() {
                Err(ConfigError::Density(PatternError::InvalidDensity { .. })) => {}
                other => panic!("expected Density error for {density}, got {other:?}"),
            }
        }
    }

    #[test]
    fn validate_bad_tick_rate_fails() {
        for hz in [0.0, -1.0, f64::INFINITY, f64::NAN, f64::MIN_POSITIVE / 4.0] {
            let cfg = EngineConfig {
                tick_rate_hz: hz,
                ..EngineConfig::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidTickRate { .. })),
                "tick_rate_hz {hz} accepted"
            );
        }
    }

    #[test]
    fn validate_cycle_window_cap() {
        let cfg = EngineConfig {
            cycle_window: MAX_CYCLE_WINDOW + 1,
            ..EngineConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::CycleWindowTooLarge {
                configured: MAX_CYCLE_WINDOW + 1
            })
        );
    }

    #[test]
    fn from_viewport_sizes_grid() {
        let cfg = EngineConfig::from_viewport(&Viewport {
            width: 255,
            height: 130,
            cell: 20,
            margin: 5,
        });
        assert_eq!((cfg.rows, cfg.cols), (5, 10));
    }

    #[test]
    fn tick_interval_from_rate() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.tick_interval(), std::time::Duration::from_millis(100));
    }

    #[test]
    fn error_display() {
        let e = ConfigError::InvalidTickRate { value: -2.0 };
        assert_eq!(
            e.to_string(),
            "tick_rate_hz must be finite and positive, got -2"
        );
    }
}
