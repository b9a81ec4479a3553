//! Tessel: a deterministic Conway's Game of Life (B3/S23) engine.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessel sub-crates. For most users, adding `tessel` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // A 12x12 torus holding one glider.
//! let config = EngineConfig {
//!     rows: 12,
//!     cols: 12,
//!     boundary: BoundaryPolicy::Toroidal,
//!     seed_on_start: false,
//!     ..EngineConfig::default()
//! };
//! let mut ctl = RunController::new(config).unwrap();
//! ctl.inject_pattern("glider", (0, 0)).unwrap();
//! assert_eq!(ctl.grid().population(), 5);
//!
//! // Paused by default: ticks are ignored until the run is toggled.
//! assert!(!ctl.tick().unwrap());
//! assert_eq!(ctl.handle_key(Command::ToggleRun).unwrap(), Flow::Continue);
//! for _ in 0..4 {
//!     ctl.tick().unwrap();
//! }
//! assert_eq!(ctl.generation(), Generation(4));
//! assert_eq!(ctl.grid().get(1, 2).unwrap(), Cell::Alive);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | `Cell`, `GridState`, `Generation`, `GridError` |
//! | [`space`] | `tessel-space` | Boundary policies and neighbour counting |
//! | [`patterns`] | `tessel-patterns` | Random seeding, pattern catalogue, cell edits |
//! | [`engine`] | `tessel-engine` | Evolution step, run controller, rendering seams |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core grid types (`tessel-core`).
///
/// [`types::GridState`] is the fixed-size cell buffer every other layer
/// reads and writes.
pub use tessel_core as types;

/// Edge handling and neighbour counting (`tessel-space`).
pub use tessel_space as space;

/// Seeding, pattern stamping and toggling (`tessel-patterns`).
///
/// The built-in shapes live in [`patterns::catalogue`].
pub use tessel_patterns as patterns;

/// Generation stepping and run control (`tessel-engine`).
///
/// [`engine::EvolutionEngine`] for bare stepping,
/// [`engine::RunController`] for an interactive run loop.
pub use tessel_engine as engine;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessel_core::{Cell, Generation, GridError, GridState};

    // Space
    pub use tessel_space::{BoundaryPolicy, NeighborCounter};

    // Patterns
    pub use tessel_patterns::{inject, seed, seeded_rng, toggle, Density, Origin, Pattern};
    pub use tessel_patterns::{PatternError, PatternLibrary};

    // Engine
    pub use tessel_engine::{
        AsciiRenderer, Command, ConfigError, ControlError, EngineConfig, EvolutionEngine, Flow,
        Renderer, RunController, RunState, StepMetrics, Viewport,
    };
}
