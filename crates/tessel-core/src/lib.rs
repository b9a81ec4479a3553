//! Core types for the Tessel Life engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! cell state, the fixed-size [`GridState`] buffer every other crate reads
//! and writes, the [`Generation`] counter, and the grid error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod hash;
pub mod id;

pub use cell::Cell;
pub use error::GridError;
pub use grid::GridState;
pub use id::Generation;
