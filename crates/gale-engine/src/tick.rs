//! Tick engine: the single-threaded simulation loop.
//!
//! [`TickEngine`] owns the field store, the evolver pipeline, the tick
//! counter and the run state. It is driven from outside: a UI timer, a
//! batch loop or a test calls [`tick`](TickEngine::tick) repeatedly.
//!
//! A failed tick is not rolled back. The engine stops and the store keeps
//! whatever the failing evolver wrote, so the state can be inspected.

use std::time::Instant;

use gale_core::{EvolveError, FieldName, StepError, TickId};
use gale_grid::GridError;
use gale_store::FieldPersistence;
use smallvec::SmallVec;

use crate::config::{ConfigError, SimConfig};
use crate::evolver::{Evolver, ForcingPhase, TickContext};
use crate::metrics::{micros, TickMetrics};
use crate::persist::{self, PersistReport};
use crate::presets::{DiscSource, Preset};
use crate::pressure::PressureEvolver;
use crate::store::{CellProbe, ClearScope, FieldSnapshot, FieldStore};
use crate::telemetry::{LogObserver, TickObserver};
use crate::wind::WindEvolver;

// ── RunState ─────────────────────────────────────────────────────

/// Whether [`TickEngine::tick`] does anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Ticks are skipped. The initial state, and the state after a failure.
    Stopped,
    /// Ticks execute.
    Running,
}

// ── TickReport ───────────────────────────────────────────────────

/// Result of a successful tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// The tick that ran.
    pub tick: TickId,
    /// Its forcing phase.
    pub phase: ForcingPhase,
    /// Timings for this tick.
    pub metrics: TickMetrics,
}

// ── TickEngine ───────────────────────────────────────────────────

/// Single-threaded tick engine.
///
/// Each executed tick:
/// 1. advances the counter
/// 2. computes the pressure gradient from the current pressure
/// 3. classifies the forcing phase against `begin_pgf_tick`
/// 4. runs every evolver in order (wind, then pressure by default)
/// 5. keeps this tick's gradient as the previous one
/// 6. rounds every field to `rounding_decimals` places
pub struct TickEngine {
    config: SimConfig,
    store: FieldStore,
    evolvers: Vec<Box<dyn Evolver>>,
    observer: Box<dyn TickObserver>,
    current_tick: TickId,
    state: RunState,
    last_metrics: TickMetrics,
}

impl TickEngine {
    /// Construct a stopped engine with the default wind and pressure
    /// pipeline, logging through [`LogObserver`].
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let evolvers = default_pipeline(&config);
        Self::with_evolvers(config, evolvers)
    }

    /// Construct a stopped engine running `evolvers` in order.
    pub fn with_evolvers(
        config: SimConfig,
        evolvers: Vec<Box<dyn Evolver>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = FieldStore::new(config.n, config.reference_pressure)?;
        let observer = Box::new(LogObserver::new(config.world_name.clone()));
        Ok(Self {
            config,
            store,
            evolvers,
            observer,
            current_tick: TickId(0),
            state: RunState::Stopped,
            last_metrics: TickMetrics::default(),
        })
    }

    /// Replace the observer.
    pub fn set_observer(&mut self, observer: Box<dyn TickObserver>) {
        self.observer = observer;
    }

    /// Builder-style [`set_observer`](Self::set_observer).
    pub fn with_observer(mut self, observer: Box<dyn TickObserver>) -> Self {
        self.observer = observer;
        self
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Begin executing ticks.
    pub fn start(&mut self) {
        self.set_state(RunState::Running, "started");
    }

    /// Stop executing ticks. Takes effect before the next tick.
    pub fn pause(&mut self) {
        self.set_state(RunState::Stopped, "paused");
    }

    /// Continue executing ticks after a pause or a failure.
    pub fn resume(&mut self) {
        self.set_state(RunState::Running, "resumed");
    }

    fn set_state(&mut self, state: RunState, verb: &str) {
        if self.state != state {
            log::info!(
                "[{}] {verb} at tick {}",
                self.config.world_name,
                self.current_tick
            );
        }
        self.state = state;
    }

    /// Current run state.
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// True while ticks execute.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    // ── Ticking ──────────────────────────────────────────────────

    /// Execute one tick if running.
    ///
    /// While stopped nothing changes, the observer is told the tick was
    /// skipped, and [`StepError::Stopped`] is returned. A numeric failure
    /// stops the engine and returns [`StepError::NumericInstability`].
    pub fn tick(&mut self) -> Result<TickReport, StepError> {
        if !self.is_running() {
            self.observer.on_skipped(self.current_tick);
            return Err(StepError::Stopped);
        }
        self.execute_tick()
    }

    /// Execute exactly one tick regardless of run state, then stop.
    pub fn step_once(&mut self) -> Result<TickReport, StepError> {
        self.state = RunState::Running;
        let result = self.execute_tick();
        self.state = RunState::Stopped;
        result
    }

    /// Tick up to `ticks` times, stopping early if the engine stops.
    ///
    /// Returns how many ticks executed; zero if the engine was stopped on
    /// entry. A numeric failure is returned as an error.
    pub fn run(&mut self, ticks: usize) -> Result<usize, StepError> {
        let mut executed = 0;
        while executed < ticks && self.is_running() {
            self.execute_tick()?;
            executed += 1;
        }
        Ok(executed)
    }

    fn execute_tick(&mut self) -> Result<TickReport, StepError> {
        let tick_start = Instant::now();

        // 1. Advance the clock.
        self.current_tick = self.current_tick.next();
        let tick = self.current_tick;

        // 2. Gradient for this tick.
        let gradient_start = Instant::now();
        self.store.compute_gradient();
        let gradient_us = micros(gradient_start.elapsed());

        // 3. Forcing phase.
        let phase = ForcingPhase::classify(tick, self.config.begin_pgf_tick);
        let ctx = TickContext {
            tick,
            dt: self.config.dt,
            phase,
        };

        // 4. Evolver pipeline.
        let mut evolver_us = SmallVec::new();
        let mut failure = None;
        for evolver in &self.evolvers {
            let start = Instant::now();
            if let Err(reason) = evolver.evolve(&mut self.store, &ctx) {
                failure = Some((evolver.name().to_string(), reason));
                break;
            }
            evolver_us.push((
                evolver.name().to_string(),
                micros(start.elapsed()),
            ));
        }
        if let Some((evolver, reason)) = failure {
            return Err(self.halt(tick, evolver, reason));
        }

        // 5. This tick's gradient becomes the previous one.
        self.store.retire_gradient();

        // 6. Round. Failures are reported but never stop the run.
        let rounding_start = Instant::now();
        let failures = self.store.round_all(self.config.rounding_decimals);
        let rounding_us = micros(rounding_start.elapsed());
        for (field, error) in &failures {
            self.observer.on_rounding_failure(tick, *field, error);
        }

        let metrics = TickMetrics {
            total_us: micros(tick_start.elapsed()),
            gradient_us,
            evolver_us,
            rounding_us,
            rounding_failures: failures.len() as u32,
        };
        self.last_metrics = metrics.clone();
        let report = TickReport {
            tick,
            phase,
            metrics,
        };
        self.observer.on_tick(tick, Ok(&report));
        Ok(report)
    }

    fn halt(&mut self, tick: TickId, evolver: String, reason: EvolveError) -> StepError {
        self.state = RunState::Stopped;
        let err = StepError::NumericInstability {
            tick,
            evolver,
            reason,
        };
        self.observer.on_tick(tick, Err(&err));
        err
    }

    // ── Control ──────────────────────────────────────────────────

    /// Reset fields and the tick counter. Only allowed while stopped.
    pub fn clear(&mut self, scope: ClearScope) -> Result<(), StepError> {
        if self.is_running() {
            return Err(StepError::ClearWhileRunning);
        }
        self.store.clear(scope);
        self.current_tick = TickId(0);
        self.last_metrics = TickMetrics::default();
        log::info!("[{}] cleared ({scope:?})", self.config.world_name);
        Ok(())
    }

    /// Replace the configuration. Only allowed while stopped.
    ///
    /// The store is reallocated at its initial state, the tick counter
    /// resets, and the evolver pipeline is rebuilt with the default wind
    /// and pressure evolvers. The observer is kept.
    pub fn reconfigure(&mut self, config: SimConfig) -> Result<(), ConfigError> {
        if self.is_running() {
            return Err(StepError::ReconfigureWhileRunning.into());
        }
        config.validate()?;
        self.store = FieldStore::new(config.n, config.reference_pressure)?;
        self.current_tick = TickId(0);
        self.last_metrics = TickMetrics::default();
        self.evolvers = default_pipeline(&config);
        log::info!("[{}] reconfigured", config.world_name);
        self.config = config;
        Ok(())
    }

    // ── Sources ──────────────────────────────────────────────────

    /// Add `source.value · dt` over a disc of interior cells. Returns the
    /// number of cells changed.
    pub fn add_disc_source(&mut self, source: &DiscSource) -> usize {
        gale_solver::add_disc_source(
            self.store.field_mut(source.target.field_name()),
            source.value,
            source.centre,
            source.radius,
            self.config.dt,
        )
    }

    /// Apply every source of `preset`, scaled to this grid. Returns the
    /// total number of cells changed.
    pub fn apply_preset(&mut self, preset: Preset) -> usize {
        let cells: usize = preset
            .sources(self.config.n)
            .iter()
            .map(|source| self.add_disc_source(source))
            .sum();
        log::info!(
            "[{}] applied preset {preset:?} to {cells} cells",
            self.config.world_name
        );
        cells
    }

    // ── Persistence ──────────────────────────────────────────────

    /// Save wind, pressure and the previous pressure gradient, one result
    /// per field.
    pub fn save(&self, backend: &dyn FieldPersistence) -> PersistReport {
        let report = persist::save_fields(&self.store, &self.config.world_name, backend);
        for (name, error) in report.failures() {
            log::warn!(
                "[{}] saving {name} failed: {error}",
                self.config.world_name
            );
        }
        report
    }

    /// Load wind, pressure and the previous pressure gradient, one result
    /// per field.
    ///
    /// Missing fields keep their in-memory values. A field that fails to
    /// load is left untouched. The tick counter is not part of the saved
    /// state: loading into an engine at tick 0 starts the forcing cycle
    /// over, so the gradient already in the wind is never removed.
    pub fn load(&mut self, backend: &dyn FieldPersistence) -> PersistReport {
        let report = persist::load_fields(&mut self.store, &self.config.world_name, backend);
        for (name, error) in report.failures() {
            log::warn!(
                "[{}] loading {name} failed: {error}",
                self.config.world_name
            );
        }
        report
    }

    // ── Accessors ────────────────────────────────────────────────

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> FieldSnapshot<'_> {
        self.store.snapshot()
    }

    /// Wind and pressure at interior cell `(x, y)`, zero-based.
    pub fn probe(&self, x: usize, y: usize) -> Result<CellProbe, GridError> {
        self.store.probe(x, y)
    }

    /// The field store.
    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    /// One named field.
    pub fn field(&self, name: FieldName) -> &gale_grid::GridField {
        self.store.field(name)
    }

    /// The active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The last tick executed, or `TickId(0)` before the first.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Metrics from the most recent successful tick.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.last_metrics
    }
}

fn default_pipeline(config: &SimConfig) -> Vec<Box<dyn Evolver>> {
    vec![
        Box::new(WindEvolver::from_config(config)),
        Box::new(PressureEvolver::from_config(config)),
    ]
}
