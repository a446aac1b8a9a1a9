//! Per-tick timing metrics.
//!
//! [`TickMetrics`] captures wall-clock timings for a single tick so that
//! callers can profile the pipeline or throttle a UI refresh.

use std::time::Duration;

use smallvec::SmallVec;

/// Whole microseconds in `elapsed`, saturating at `u64::MAX`.
pub(crate) fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

/// Timing data collected during a single tick.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickMetrics {
    /// Wall-clock time for the entire tick.
    pub total_us: u64,
    /// Time spent computing the pressure gradient.
    pub gradient_us: u64,
    /// Per-evolver execution times: `(name, microseconds)`, in pipeline order.
    pub evolver_us: SmallVec<[(String, u64); 2]>,
    /// Time spent rounding fields after the evolvers ran.
    pub rounding_us: u64,
    /// Number of fields that could not be fully rounded.
    pub rounding_failures: u32,
}

impl TickMetrics {
    /// Time spent in the named evolver, if it ran.
    pub fn evolver(&self, name: &str) -> Option<u64> {
        self.evolver_us
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, us)| us)
    }
}
