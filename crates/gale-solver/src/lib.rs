//! Numerical operators for the Gale atmosphere simulator.
//!
//! Every operator works in place on [`GridField`](gale_grid::GridField)s
//! borrowed from the caller and re-derives the halo ring before it
//! returns. Operators never inspect values for validity; finiteness and
//! rounding are handled by [`hygiene`] at the orchestration layer.
//!
//! # Operators
//!
//! | Module | Operation |
//! |---|---|
//! | [`linear_solve`] | Gauss–Seidel relaxation of `(I − aΔ)x = x₀` |
//! | [`diffusion`] | implicit diffusion |
//! | [`advection`] | semi-Lagrangian transport |
//! | [`projection`] | divergence removal |
//! | [`pressure_gradient`] | masked pressure-gradient forcing |
//! | [`coriolis`] | rotational deflection |
//! | [`source`] | additive sources and disc injection |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod advection;
pub mod coriolis;
pub mod diffusion;
pub mod hygiene;
pub mod linear_solve;
pub mod pressure_gradient;
pub mod projection;
pub mod source;

pub use advection::advect;
pub use coriolis::{coriolis, latitude_degrees, CoriolisDiagnostics};
pub use diffusion::diffuse;
pub use hygiene::{round_field, RoundingError};
pub use linear_solve::{relax, RELAX_ITERATIONS};
pub use pressure_gradient::{gradient, GradientPair};
pub use projection::{divergence, max_abs_divergence, project};
pub use source::{add_disc_source, add_source};
