//! The evolver seam: one physical process advanced per tick.

use gale_core::{EvolveError, TickId};

use crate::store::FieldStore;

/// How pressure-gradient forcing applies on a given tick.
///
/// Forcing is held off while the initial state settles, switched on at
/// the threshold tick, and from then on replaces the previous tick's
/// forcing with the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ForcingPhase {
    /// Before the threshold: no forcing.
    Suppressed,
    /// The threshold tick: add the current gradient only.
    Onset,
    /// After the threshold: remove the previous gradient, add the current one.
    Sustained,
}

impl ForcingPhase {
    /// Phase of `tick` given the first forcing tick `begin`.
    ///
    /// Tick 0 never executes, so a `begin` of 0 behaves like 1: the first
    /// executed tick is always the onset.
    pub fn classify(tick: TickId, begin: u64) -> Self {
        match tick.0.cmp(&begin.max(1)) {
            std::cmp::Ordering::Less => Self::Suppressed,
            std::cmp::Ordering::Equal => Self::Onset,
            std::cmp::Ordering::Greater => Self::Sustained,
        }
    }

    /// Whether the previous tick's forcing is removed.
    pub fn removes_previous(self) -> bool {
        self == Self::Sustained
    }

    /// Whether this tick's forcing is added.
    pub fn applies_current(self) -> bool {
        self != Self::Suppressed
    }
}

/// Per-tick inputs shared by every evolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickContext {
    /// The tick being executed.
    pub tick: TickId,
    /// Timestep.
    pub dt: f64,
    /// Forcing phase of this tick.
    pub phase: ForcingPhase,
}

/// A process that advances part of the field store by one tick.
///
/// Evolvers run in pipeline order. An error halts the tick; fields the
/// evolver already wrote stay as written.
pub trait Evolver: Send {
    /// Name reported in errors and metrics.
    fn name(&self) -> &str;

    /// Advance the store by one tick.
    fn evolve(&self, store: &mut FieldStore, ctx: &TickContext) -> Result<(), EvolveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_around_threshold() {
        assert_eq!(ForcingPhase::classify(TickId(9), 10), ForcingPhase::Suppressed);
        assert_eq!(ForcingPhase::classify(TickId(10), 10), ForcingPhase::Onset);
        assert_eq!(ForcingPhase::classify(TickId(11), 10), ForcingPhase::Sustained);
    }

    #[test]
    fn zero_threshold_forces_from_first_tick() {
        assert_eq!(ForcingPhase::classify(TickId(1), 0), ForcingPhase::Onset);
        assert_eq!(ForcingPhase::classify(TickId(2), 0), ForcingPhase::Sustained);
        assert_eq!(ForcingPhase::classify(TickId(1), 1), ForcingPhase::Onset);
    }

    #[test]
    fn phase_actions() {
        assert!(!ForcingPhase::Suppressed.applies_current());
        assert!(!ForcingPhase::Suppressed.removes_previous());
        assert!(ForcingPhase::Onset.applies_current());
        assert!(!ForcingPhase::Onset.removes_previous());
        assert!(ForcingPhase::Sustained.applies_current());
        assert!(ForcingPhase::Sustained.removes_previous());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn forcing_is_removed_only_after_it_was_applied(
                begin in 0u64..1000,
                tick in 1u64..2000,
            ) {
                let phase = ForcingPhase::classify(TickId(tick), begin);
                prop_assert_eq!(phase.applies_current(), tick >= begin);
                if phase.removes_previous() {
                    // The previous tick must itself have executed.
                    prop_assert!(tick >= 2);
                    let prev = ForcingPhase::classify(TickId(tick - 1), begin);
                    prop_assert!(prev.applies_current());
                }
            }

            #[test]
            fn exactly_one_onset_among_executed_ticks(
                begin in 0u64..500,
                horizon in 1u64..1000,
            ) {
                let onsets = (1..=horizon)
                    .filter(|&t| ForcingPhase::classify(TickId(t), begin) == ForcingPhase::Onset)
                    .count();
                prop_assert_eq!(onsets, usize::from(horizon >= begin.max(1)));
            }
        }
    }
}
