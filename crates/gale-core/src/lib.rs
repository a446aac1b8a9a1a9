//! Core types for the Gale atmosphere simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: tick and field
//! identifiers, the boundary classification used by every stencil
//! operator, and the step-level error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod id;

pub use error::{EvolveError, StepError};
pub use field::BoundaryKind;
pub use id::{FieldName, TickId, UnknownFieldName};
