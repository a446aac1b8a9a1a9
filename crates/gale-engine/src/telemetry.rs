//! Tick notifications for external collaborators.
//!
//! The engine reports every tick outcome to one [`TickObserver`]. Two
//! observers ship with the crate: [`LogObserver`] writes through the `log`
//! facade, and [`ChannelObserver`] forwards [`TickEvent`]s over a
//! crossbeam channel so another thread can react without touching the
//! engine.

use crossbeam_channel::{Receiver, Sender};
use gale_core::{FieldName, StepError, TickId};
use gale_solver::RoundingError;

use crate::tick::TickReport;

/// Receives tick outcomes from a [`TickEngine`](crate::TickEngine).
///
/// All methods default to doing nothing.
pub trait TickObserver: Send {
    /// A tick ran, successfully or not.
    fn on_tick(&mut self, _tick: TickId, _outcome: Result<&TickReport, &StepError>) {}

    /// `tick()` was called while the engine was stopped. Nothing ran.
    fn on_skipped(&mut self, _tick: TickId) {}

    /// A field could not be rounded after a tick. The run continues.
    fn on_rounding_failure(&mut self, _tick: TickId, _field: FieldName, _error: &RoundingError) {}
}

/// Observer that discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl TickObserver for NullObserver {}

/// Observer that logs through the `log` facade.
///
/// Completed ticks go to `debug`, skipped ticks and rounding failures to
/// `warn`, failed ticks to `error`.
#[derive(Clone, Debug)]
pub struct LogObserver {
    world: String,
}

impl LogObserver {
    /// Logger tagging every line with `world`.
    pub fn new(world: impl Into<String>) -> Self {
        Self {
            world: world.into(),
        }
    }
}

impl TickObserver for LogObserver {
    fn on_tick(&mut self, tick: TickId, outcome: Result<&TickReport, &StepError>) {
        match outcome {
            Ok(report) => log::debug!(
                "[{}] tick {tick} ({:?}) in {}us",
                self.world,
                report.phase,
                report.metrics.total_us
            ),
            Err(e) => log::error!("[{}] tick {tick} failed: {e}", self.world),
        }
    }

    fn on_skipped(&mut self, tick: TickId) {
        log::warn!(
            "[{}] tick requested while stopped at tick {tick}; nothing ran",
            self.world
        );
    }

    fn on_rounding_failure(&mut self, tick: TickId, field: FieldName, error: &RoundingError) {
        log::warn!(
            "[{}] tick {tick}: rounding {field} failed: {error}",
            self.world
        );
    }
}

/// An owned tick notification.
#[derive(Clone, Debug, PartialEq)]
pub enum TickEvent {
    /// A tick completed.
    Completed {
        /// The completed tick.
        tick: TickId,
        /// Its report.
        report: TickReport,
    },
    /// A tick failed and the engine stopped.
    Failed {
        /// The failed tick.
        tick: TickId,
        /// Why it failed.
        error: StepError,
    },
    /// A tick was requested while stopped.
    Skipped {
        /// The engine's tick counter at the time.
        tick: TickId,
    },
    /// A field could not be rounded.
    RoundingFailed {
        /// The tick that produced the value.
        tick: TickId,
        /// The affected field.
        field: FieldName,
        /// Details.
        error: RoundingError,
    },
}

impl TickEvent {
    /// Event for an [`on_tick`](TickObserver::on_tick) notification.
    pub fn from_outcome(tick: TickId, outcome: Result<&TickReport, &StepError>) -> Self {
        match outcome {
            Ok(report) => Self::Completed {
                tick,
                report: report.clone(),
            },
            Err(error) => Self::Failed {
                tick,
                error: error.clone(),
            },
        }
    }
}

/// Observer that forwards [`TickEvent`]s over a channel.
///
/// Events are dropped silently once the receiver is gone.
#[derive(Clone, Debug)]
pub struct ChannelObserver {
    tx: Sender<TickEvent>,
}

impl ChannelObserver {
    /// Observer sending into `tx`.
    pub fn new(tx: Sender<TickEvent>) -> Self {
        Self { tx }
    }

    /// An observer and the receiving end of an unbounded channel.
    pub fn unbounded() -> (Self, Receiver<TickEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self { tx }, rx)
    }

    /// An observer and the receiving end of a channel holding at most
    /// `capacity` events. Events that do not fit are dropped.
    pub fn bounded(capacity: usize) -> (Self, Receiver<TickEvent>) {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        (Self { tx }, rx)
    }

    fn send(&self, event: TickEvent) {
        let _ = self.tx.try_send(event);
    }
}

impl TickObserver for ChannelObserver {
    fn on_tick(&mut self, tick: TickId, outcome: Result<&TickReport, &StepError>) {
        self.send(TickEvent::from_outcome(tick, outcome));
    }

    fn on_skipped(&mut self, tick: TickId) {
        self.send(TickEvent::Skipped { tick });
    }

    fn on_rounding_failure(&mut self, tick: TickId, field: FieldName, error: &RoundingError) {
        self.send(TickEvent::RoundingFailed {
            tick,
            field,
            error: error.clone(),
        });
    }
}
