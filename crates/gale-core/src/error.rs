//! Error types for the Gale tick pipeline.
//!
//! Organised by layer: [`EvolveError`] is raised by an individual evolver,
//! [`StepError`] is what the tick engine reports to its caller.

use std::error::Error;
use std::fmt;

use crate::id::{FieldName, TickId};

/// Errors from the tick engine's control surface and tick execution.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// `tick()` was called while the engine is stopped. Nothing ran.
    Stopped,
    /// An evolver produced values the engine refuses to carry forward.
    ///
    /// The engine is stopped and the field store is left as the failing
    /// tick wrote it.
    NumericInstability {
        /// The tick that failed.
        tick: TickId,
        /// Name of the evolver that reported the failure.
        evolver: String,
        /// The underlying evolver error.
        reason: EvolveError,
    },
    /// `clear()` was requested while the engine is running.
    ClearWhileRunning,
    /// A configuration change was requested while the engine is running.
    ReconfigureWhileRunning,
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stopped => write!(f, "simulation is stopped"),
            Self::NumericInstability {
                tick,
                evolver,
                reason,
            } => {
                write!(f, "numeric instability at tick {tick} in '{evolver}': {reason}")
            }
            Self::ClearWhileRunning => write!(f, "cannot clear fields while running"),
            Self::ReconfigureWhileRunning => {
                write!(f, "cannot change configuration while running")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NumericInstability { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Errors from a single evolver run.
#[derive(Clone, Debug, PartialEq)]
pub enum EvolveError {
    /// A NaN or infinity was found in an evolved field.
    NonFinite {
        /// The field containing the value.
        field: FieldName,
        /// Grid coordinate `(i, j)` of the first offending cell, halo included.
        cell: (usize, usize),
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for EvolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, cell, value } => write!(
                f,
                "non-finite value {value} in field {field} at cell ({}, {})",
                cell.0, cell.1
            ),
        }
    }
}

impl Error for EvolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instability_display_names_tick_and_field() {
        let err = StepError::NumericInstability {
            tick: TickId(12),
            evolver: "wind".to_string(),
            reason: EvolveError::NonFinite {
                field: FieldName::VelocityU,
                cell: (3, 4),
                value: f64::NAN,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("tick 12"));
        assert!(msg.contains("wind"));
        assert!(msg.contains("velocity-u"));
        assert!(msg.contains("(3, 4)"));
    }

    #[test]
    fn instability_exposes_source() {
        let err = StepError::NumericInstability {
            tick: TickId(1),
            evolver: "pressure".to_string(),
            reason: EvolveError::NonFinite {
                field: FieldName::Pressure,
                cell: (1, 1),
                value: f64::INFINITY,
            },
        };
        assert!(err.source().is_some());
        assert!(StepError::Stopped.source().is_none());
    }
}
