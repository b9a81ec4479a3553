//! Run/pause control and command dispatch.
//!
//! [`RunController`] is the one object a driver talks to. It owns the
//! active grid, a spare buffer of the same shape, the
//! [`EvolutionEngine`], the seeding RNG and the pattern library. The
//! driver feeds it decoded input ([`Command`]s and cell clicks) and calls
//! [`tick()`](RunController::tick) at its own fixed rate; the controller
//! decides whether a tick actually advances the grid.
//!
//! # Ownership model
//!
//! The controller is [`Send`]. All mutating methods take `&mut self`, and
//! [`grid()`](RunController::grid) hands out a shared borrow, so a renderer
//! can never observe a grid that is being written.

use std::fmt;
use std::time::{Duration, Instant};

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use tessel_core::{Generation, GridState};
use tessel_patterns::catalogue::GLIDER_GUN;
use tessel_patterns::{seed, seeded_rng, toggle, Density, Origin, PatternLibrary};
use tessel_space::BoundaryPolicy;

use crate::config::{ConfigError, EngineConfig};
use crate::cycle::CycleDetector;
use crate::error::ControlError;
use crate::evolution::EvolutionEngine;
use crate::metrics::StepMetrics;

// Fails to compile if any field is !Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<RunController>();
    }
};

// ── RunState / Command / Flow ──────────────────────────────────────

/// Whether ticks advance the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Ticks are ignored; edits still apply.
    #[default]
    Paused,
    /// Every tick advances one generation.
    Running,
}

impl RunState {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Paused => Self::Running,
            Self::Running => Self::Paused,
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paused => write!(f, "paused"),
            Self::Running => write!(f, "running"),
        }
    }
}

/// Keyboard-level commands, already decoded by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Flip between Running and Paused.
    ToggleRun,
    /// Stamp the Gosper glider gun at the configured origin.
    InjectGliderGun,
    /// Randomly refill the grid and restart the generation count.
    Reseed,
    /// Ask the driver to shut down.
    Quit,
    /// Kill every cell and restart the generation count.
    Clear,
    /// Advance exactly one generation while Paused.
    Step,
}

/// What the driver should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep looping.
    Continue,
    /// Leave the loop.
    Quit,
}

// ── RunController ──────────────────────────────────────────────────

/// Owns the simulation and applies driver input to it.
///
/// # Examples
///
/// ```
/// use tessel_engine::{Command, EngineConfig, Flow, RunController, RunState};
///
/// let mut ctl = RunController::new(EngineConfig::default()).unwrap();
/// assert_eq!(ctl.state(), RunState::Paused);
/// assert!(!ctl.tick().unwrap());
///
/// ctl.handle_key(Command::ToggleRun).unwrap();
/// assert!(ctl.tick().unwrap());
/// assert_eq!(ctl.generation().0, 1);
/// assert_eq!(ctl.handle_key(Command::Quit).unwrap(), Flow::Quit);
/// ```
pub struct RunController {
    engine: EvolutionEngine,
    grid: GridState,
    spare: GridState,
    state: RunState,
    rng: ChaCha8Rng,
    density: Density,
    library: PatternLibrary,
    gun_origin: Origin,
    tick_interval: Duration,
    cycles: CycleDetector,
    pause_on_cycle: bool,
    cycle_detected: bool,
    /// Set when the user resumes a detected cycle; cleared by any edit.
    cycle_acknowledged: bool,
    last_metrics: StepMetrics,
}

impl RunController {
    /// Build a controller from a validated [`EngineConfig`].
    ///
    /// The grid is seeded from `config.seed` when `seed_on_start` is set,
    /// otherwise it starts all Dead.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let density = config.density_checked()?;
        let mut grid = GridState::new(config.rows, config.cols)?;
        let mut rng = seeded_rng(config.seed);
        if config.seed_on_start {
            seed(&mut grid, density, &mut rng);
        }
        let spare = grid.clone();
        let mut ctl = Self {
            engine: EvolutionEngine::new(config.boundary),
            grid,
            spare,
            state: config.initial_state,
            rng,
            density,
            library: PatternLibrary::builtin(),
            gun_origin: Origin::from(config.gun_origin),
            tick_interval: config.tick_interval(),
            cycles: CycleDetector::new(config.cycle_window),
            pause_on_cycle: config.pause_on_cycle,
            cycle_detected: false,
            cycle_acknowledged: false,
            last_metrics: StepMetrics::default(),
        };
        ctl.restart_history();
        debug!(
            rows = config.rows,
            cols = config.cols,
            boundary = %config.boundary,
            state = %ctl.state,
            population = ctl.grid.population(),
            "controller created"
        );
        Ok(ctl)
    }

    // ── Driver input ───────────────────────────────────────────────

    /// Flip between Running and Paused; returns the new state.
    ///
    /// Resuming while a cycle is detected keeps the run going through
    /// that cycle: no further auto-pause until the grid is edited,
    /// reseeded, cleared or injected into.
    pub fn toggle_run(&mut self) -> RunState {
        self.state = self.state.toggled();
        if self.state == RunState::Running && self.cycle_detected {
            self.cycle_acknowledged = true;
        }
        debug!(state = %self.state, generation = %self.generation(), "run state toggled");
        self.state
    }

    /// Advance one generation if Running. Returns whether a step ran.
    pub fn tick(&mut self) -> Result<bool, ControlError> {
        if self.state == RunState::Paused {
            return Ok(false);
        }
        self.advance()?;
        Ok(true)
    }

    /// Advance exactly one generation regardless of run state.
    pub fn step_once(&mut self) -> Result<&StepMetrics, ControlError> {
        self.advance()?;
        Ok(&self.last_metrics)
    }

    /// Toggle the cell under a click. Works while Running or Paused.
    pub fn handle_click(&mut self, row: i32, col: i32) -> Result<(), ControlError> {
        toggle(&mut self.grid, row, col)?;
        self.restart_history();
        debug!(row, col, "cell toggled");
        Ok(())
    }

    /// Apply a decoded key command.
    ///
    /// `Step` is ignored while Running, since the next tick advances anyway.
    pub fn handle_key(&mut self, command: Command) -> Result<Flow, ControlError> {
        match command {
            Command::ToggleRun => {
                self.toggle_run();
            }
            Command::InjectGliderGun => self.inject_glider_gun()?,
            Command::Reseed => self.reseed(),
            Command::Quit => {
                debug!("quit requested");
                return Ok(Flow::Quit);
            }
            Command::Clear => self.clear(),
            Command::Step => {
                if self.state == RunState::Paused {
                    self.advance()?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    // ── Grid edits ─────────────────────────────────────────────────

    /// Refill the grid from the controller's RNG at the configured
    /// density and restart the generation count.
    pub fn reseed(&mut self) {
        seed(&mut self.grid, self.density, &mut self.rng);
        self.engine.reset_generation();
        self.restart_history();
        info!(population = self.grid.population(), "grid reseeded");
    }

    /// Kill every cell and restart the generation count.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.engine.reset_generation();
        self.restart_history();
        info!("grid cleared");
    }

    /// Stamp the glider gun at the configured origin.
    pub fn inject_glider_gun(&mut self) -> Result<(), ControlError> {
        self.inject_pattern(GLIDER_GUN.name(), self.gun_origin)
    }

    /// Stamp a named pattern from the library at `origin`.
    ///
    /// On error the grid is unchanged.
    pub fn inject_pattern(
        &mut self,
        name: &str,
        origin: impl Into<Origin>,
    ) -> Result<(), ControlError> {
        let origin = origin.into();
        self.library.inject_named(&mut self.grid, name, origin)?;
        self.restart_history();
        debug!(pattern = name, %origin, population = self.grid.population(), "pattern injected");
        Ok(())
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// The active grid.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Generations stepped since start, the last reseed, or the last clear.
    pub fn generation(&self) -> Generation {
        self.engine.generation()
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Whether the most recent step reproduced a grid still in the
    /// cycle-detection window.
    pub fn cycle_detected(&self) -> bool {
        self.cycle_detected
    }

    /// Boundary policy of the underlying engine.
    pub fn boundary(&self) -> BoundaryPolicy {
        self.engine.boundary()
    }

    /// Pattern catalogue used for injections.
    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    /// Mutable access to the catalogue, for registering extra patterns.
    pub fn library_mut(&mut self) -> &mut PatternLibrary {
        &mut self.library
    }

    /// Time between ticks the driver should aim for.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    // ── Internals ──────────────────────────────────────────────────

    fn advance(&mut self) -> Result<(), ControlError> {
        let start = Instant::now();
        let stats = self.engine.step_into(&self.grid, &mut self.spare)?;
        std::mem::swap(&mut self.grid, &mut self.spare);
        self.last_metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            births: stats.births,
            deaths: stats.deaths,
            population: stats.population,
        };

        self.cycle_detected = self.cycles.observe(self.grid.fingerprint());
        if self.cycle_detected && !self.cycle_acknowledged {
            info!(generation = %self.generation(), "repeated grid state detected");
            if self.pause_on_cycle && self.state == RunState::Running {
                self.state = RunState::Paused;
                info!(generation = %self.generation(), "paused on cycle");
            }
        }

        debug!(
            generation = %self.generation(),
            population = stats.population,
            births = stats.births,
            deaths = stats.deaths,
            us = self.last_metrics.total_us,
            "step"
        );
        Ok(())
    }

    /// Forget prior generations and remember only the current grid.
    fn restart_history(&mut self) {
        self.cycles.clear();
        self.cycles.observe(self.grid.fingerprint());
        self.cycle_detected = false;
        self.cycle_acknowledged = false;
    }
}

impl fmt::Debug for RunController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunController")
            .field("dimensions", &self.grid.dimensions())
            .field("generation", &self.generation())
            .field("state", &self.state)
            .field("boundary", &self.boundary())
            .field("population", &self.grid.population())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(rows: u32, cols: u32) -> RunController {
        RunController::new(EngineConfig {
            rows,
            cols,
            seed_on_start: false,
            ..EngineConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn starts_paused_by_default() {
        let mut ctl = blank(5, 5);
        assert_eq!(ctl.state(), RunState::Paused);
        assert!(!ctl.tick().unwrap());
        assert_eq!(ctl.generation(), Generation(0));
    }

    #[test]
    fn toggle_run_flips_state() {
        let mut ctl = blank(5, 5);
        assert_eq!(ctl.toggle_run(), RunState::Running);
        assert_eq!(ctl.toggle_run(), RunState::Paused);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = RunController::new(EngineConfig {
            rows: 0,
            ..EngineConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Grid(_)));
    }

    #[test]
    fn click_out_of_bounds_is_an_error() {
        let mut ctl = blank(3, 3);
        let before = ctl.grid().clone();
        assert!(matches!(
            ctl.handle_click(3, 0),
            Err(ControlError::Grid(_))
        ));
        assert_eq!(ctl.grid(), &before);
    }

    #[test]
    fn step_metrics_recorded() {
        let mut ctl = blank(5, 5);
        for c in 1..4 {
            ctl.handle_click(2, c).unwrap();
        }
        let m = ctl.step_once().unwrap().clone();
        assert_eq!((m.births, m.deaths, m.population), (2, 2, 3));
        assert_eq!(ctl.last_metrics(), &m);
    }

    #[test]
    fn step_key_ignored_while_running() {
        let mut ctl = blank(4, 4);
        ctl.toggle_run();
        ctl.handle_key(Command::Step).unwrap();
        assert_eq!(ctl.generation(), Generation(0));
    }

    #[test]
    fn debug_output_names_state() {
        let ctl = blank(2, 2);
        let s = format!("{ctl:?}");
        assert!(s.contains("RunController"));
        assert!(s.contains("Paused"));
    }
}
