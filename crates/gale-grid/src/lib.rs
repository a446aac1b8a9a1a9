//! Grid storage for Gale simulations.
//!
//! Every simulated quantity lives in a [`GridField`]: an `(N+2)×(N+2)`
//! array of `f64` holding `N×N` interior cells surrounded by a one-cell
//! halo ring. The halo exists so finite-difference stencils can read past
//! the edge of the interior without branching; its values are owned by
//! the [boundary handler](boundary::apply_boundary).
//!
//! Fields that evolve from their own previous value are held in a
//! [`BufferPair`], whose current/previous roles are exchanged by
//! [`BufferPair::swap`] rather than by copying data.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod buffer;
pub mod error;
pub mod grid;

pub use boundary::apply_boundary;
pub use buffer::BufferPair;
pub use error::GridError;
pub use grid::GridField;
