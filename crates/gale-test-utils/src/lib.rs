//! Test fixtures for Gale development.
//!
//! Seeded smooth fields for operator tests, small engine configurations,
//! and a [`RecordingObserver`] that keeps every tick notification for
//! later assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::f64::consts::PI;
use std::sync::{Arc, Mutex};

use gale_core::{BoundaryKind, FieldName, StepError, TickId};
use gale_engine::{SimConfig, TickEvent, TickObserver, TickReport};
use gale_grid::{apply_boundary, GridField};
use gale_solver::RoundingError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Sum of a few low-frequency sine modes with seeded amplitudes and
/// phases, scaled so no interior value exceeds `amplitude` in magnitude.
/// The halo follows the scalar boundary rule.
pub fn smooth_field(n: usize, seed: u64, amplitude: f64) -> GridField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let modes: Vec<(f64, f64, f64, f64, f64)> = (0..4)
        .map(|_| {
            (
                rng.gen_range(1..=3) as f64,
                rng.gen_range(1..=3) as f64,
                rng.gen_range(0.0..2.0 * PI),
                rng.gen_range(0.0..2.0 * PI),
                rng.gen_range(-1.0..1.0),
            )
        })
        .collect();

    let mut field = GridField::new(n).expect("fixture grid size");
    let scale = amplitude / modes.len() as f64;
    for i in field.interior() {
        let x = (i as f64 - 0.5) / n as f64;
        for j in field.interior() {
            let y = (j as f64 - 0.5) / n as f64;
            let value: f64 = modes
                .iter()
                .map(|&(kx, ky, px, py, a)| a * (kx * PI * x + px).sin() * (ky * PI * y + py).sin())
                .sum();
            field.set(i, j, value * scale);
        }
    }
    apply_boundary(&mut field, BoundaryKind::Scalar);
    field
}

/// A smooth, divergent velocity field of magnitude `amplitude`, with
/// velocity boundaries applied.
///
/// `u = a·sin(πx)·cos(πy)`, `v = a·cos(πx)·sin(πy)`.
pub fn smooth_velocity(n: usize, amplitude: f64) -> (GridField, GridField) {
    let mut u = GridField::new(n).expect("fixture grid size");
    let mut v = GridField::new(n).expect("fixture grid size");
    for i in u.interior() {
        let x = (i as f64 - 0.5) / n as f64;
        for j in u.interior() {
            let y = (j as f64 - 0.5) / n as f64;
            u.set(i, j, amplitude * (PI * x).sin() * (PI * y).cos());
            v.set(i, j, amplitude * (PI * x).cos() * (PI * y).sin());
        }
    }
    apply_boundary(&mut u, BoundaryKind::XComponent);
    apply_boundary(&mut v, BoundaryKind::YComponent);
    (u, v)
}

/// Default configuration on an `n × n` grid with a test world name.
pub fn small_config(n: usize) -> SimConfig {
    SimConfig {
        world_name: "test-world".to_string(),
        n,
        ..SimConfig::default()
    }
}

/// Observer that records every notification.
///
/// Clones share the same log, so keep one clone for assertions and hand
/// the other to the engine.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<TickEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn events(&self) -> Vec<TickEvent> {
        self.events.lock().expect("observer lock").clone()
    }

    /// Number of `Skipped` notifications.
    pub fn skipped(&self) -> usize {
        self.count(|e| matches!(e, TickEvent::Skipped { .. }))
    }

    /// Number of `Completed` notifications.
    pub fn completed(&self) -> usize {
        self.count(|e| matches!(e, TickEvent::Completed { .. }))
    }

    /// Number of `RoundingFailed` notifications.
    pub fn rounding_failures(&self) -> usize {
        self.count(|e| matches!(e, TickEvent::RoundingFailed { .. }))
    }

    fn count(&self, pred: impl Fn(&TickEvent) -> bool) -> usize {
        self.events
            .lock()
            .expect("observer lock")
            .iter()
            .filter(|e| pred(e))
            .count()
    }

    fn push(&self, event: TickEvent) {
        self.events.lock().expect("observer lock").push(event);
    }
}

impl TickObserver for RecordingObserver {
    fn on_tick(&mut self, tick: TickId, outcome: Result<&TickReport, &StepError>) {
        self.push(TickEvent::from_outcome(tick, outcome));
    }

    fn on_skipped(&mut self, tick: TickId) {
        self.push(TickEvent::Skipped { tick });
    }

    fn on_rounding_failure(&mut self, tick: TickId, field: FieldName, error: &RoundingError) {
        self.push(TickEvent::RoundingFailed {
            tick,
            field,
            error: error.clone(),
        });
    }
}
