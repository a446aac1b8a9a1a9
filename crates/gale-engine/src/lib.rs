//! Tick engine for Gale atmosphere simulations.
//!
//! Wires the numerical operators of `gale-solver` into a step-driven
//! simulation of wind and pressure on a square grid.
//!
//! # Pipeline
//!
//! | Stage | Type |
//! |---|---|
//! | configuration | [`SimConfig`] |
//! | field ownership | [`FieldStore`] |
//! | wind update | [`WindEvolver`] |
//! | pressure update | [`PressureEvolver`] |
//! | orchestration | [`TickEngine`] |
//! | notification | [`TickObserver`], [`LogObserver`], [`ChannelObserver`] |
//!
//! # Example
//!
//! ```rust
//! use gale_engine::{Preset, SimConfig, TickEngine};
//!
//! let config = SimConfig { n: 20, ..SimConfig::default() };
//! let mut engine = TickEngine::new(config).unwrap();
//! engine.apply_preset(Preset::A);
//! engine.start();
//! let report = engine.tick().unwrap();
//! assert_eq!(report.tick.0, 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod evolver;
pub mod metrics;
pub mod persist;
pub mod presets;
pub mod pressure;
pub mod store;
pub mod telemetry;
pub mod tick;
pub mod wind;

pub use config::{ConfigError, SimConfig};
pub use evolver::{Evolver, ForcingPhase, TickContext};
pub use metrics::TickMetrics;
pub use persist::{PersistOutcome, PersistReport};
pub use presets::{DiscSource, Preset, SourceTarget};
pub use pressure::PressureEvolver;
pub use store::{CellProbe, ClearScope, FieldSnapshot, FieldStore};
pub use telemetry::{ChannelObserver, LogObserver, NullObserver, TickEvent, TickObserver};
pub use tick::{RunState, TickEngine, TickReport};
pub use wind::{WindEvolver, WindEvolverBuilder};
