//! Neighbourhood topology for Tessel grids.
//!
//! This crate decides *which* cells neighbour a given coordinate. A
//! [`BoundaryPolicy`] resolves every off-grid neighbour coordinate before
//! any lookup happens, so [`NeighborCounter::count_alive`] never touches
//! an out-of-range index and never has to recover from one.
//!
//! - [`BoundaryPolicy::Clamped`]: off-grid neighbours are Dead
//! - [`BoundaryPolicy::Toroidal`]: edges connect to the opposite edge

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod neighbours;

pub use boundary::BoundaryPolicy;
pub use neighbours::{NeighborCounter, MOORE_OFFSETS};
