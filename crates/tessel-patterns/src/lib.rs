//! Initial and injected cell configurations for Tessel grids.
//!
//! - [`seed`]: random fill at a given [`Density`] from an injected RNG
//! - [`inject`]: all-or-nothing stamp of a [`Pattern`] at an [`Origin`]
//! - [`toggle`]: flip one cell (interactive editing)
//! - [`PatternLibrary`]: named catalogue, preloaded with the Gosper
//!   glider gun and a handful of classic still lifes and oscillators
//!
//! Randomness is always supplied by the caller. Use [`seeded_rng`] for
//! reproducible runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalogue;
pub mod edit;
pub mod error;
pub mod library;
pub mod pattern;
pub mod seed;

pub use edit::{inject, toggle};
pub use error::PatternError;
pub use library::PatternLibrary;
pub use pattern::{Origin, Pattern};
pub use seed::{seed, seeded_rng, Density};
