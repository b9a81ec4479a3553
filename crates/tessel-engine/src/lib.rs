//! Generation stepping and run control for the Tessel Life engine.
//!
//! Two layers:
//!
//! - [`EvolutionEngine`]: the pure B3/S23 step, reading one grid and
//!   writing a disjoint one. No logging, no I/O, no randomness.
//! - [`RunController`]: owns the active grid, the RNG and the pattern
//!   library, and turns driver input ([`Command`]s, clicks, ticks) into
//!   engine calls. Emits `tracing` events.
//!
//! Drivers plug in a [`Renderer`] and, for pixel windows, a [`Viewport`]
//! to size the grid and translate clicks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod cycle;
pub mod error;
pub mod evolution;
pub mod metrics;
pub mod render;
pub mod viewport;

pub use config::{ConfigError, EngineConfig};
pub use controller::{Command, Flow, RunController, RunState};
pub use cycle::CycleDetector;
pub use error::ControlError;
pub use evolution::{evolve, next_state, EvolutionEngine, StepStats};
pub use metrics::StepMetrics;
pub use render::{AsciiRenderer, Renderer};
pub use viewport::Viewport;
