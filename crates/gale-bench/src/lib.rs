//! Benchmark profiles for the Gale atmosphere simulator.
//!
//! Provides pre-built [`SimConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid, the default world size
//! - [`stress_profile`]: 316x316 grid (~100K cells) for stress testing
//! - [`warmed_engine`]: an engine seeded with a preset and run past the
//!   forcing threshold, so measured ticks exercise the full pipeline

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gale_core::StepError;
use gale_engine::{ConfigError, NullObserver, Preset, SimConfig, TickEngine};

/// Reference benchmark profile: 100x100 grid with default coefficients.
///
/// Forcing starts at tick 1 so every measured tick runs the sustained
/// forcing path.
pub fn reference_profile() -> SimConfig {
    SimConfig {
        world_name: "bench-reference".to_string(),
        n: 100,
        begin_pgf_tick: 1,
        ..SimConfig::default()
    }
}

/// Stress benchmark profile: 316x316 grid (~100K cells).
pub fn stress_profile() -> SimConfig {
    SimConfig {
        world_name: "bench-stress".to_string(),
        n: 316,
        ..reference_profile()
    }
}

/// Build an engine from `config`, apply `preset`, and run `warmup` ticks.
///
/// The engine is left running with logging disabled.
pub fn warmed_engine(
    config: SimConfig,
    preset: Preset,
    warmup: usize,
) -> Result<TickEngine, WarmupError> {
    let mut engine = TickEngine::new(config)
        .map_err(WarmupError::Config)?
        .with_observer(Box::new(NullObserver));
    engine.apply_preset(preset);
    engine.start();
    engine.run(warmup).map_err(WarmupError::Step)?;
    Ok(engine)
}

/// Why [`warmed_engine`] failed.
#[derive(Debug)]
pub enum WarmupError {
    /// The profile was invalid.
    Config(ConfigError),
    /// A warm-up tick failed.
    Step(StepError),
}

impl std::fmt::Display for WarmupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid profile: {e}"),
            Self::Step(e) => write!(f, "warm-up failed: {e}"),
        }
    }
}

impl std::error::Error for WarmupError {}
