//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] carries every numerical coefficient the engine uses.
//! [`validate()`](SimConfig::validate) checks it before any field is
//! allocated. Configurations can be built in code or loaded from JSON;
//! missing JSON keys fall back to [`SimConfig::default()`].

use std::error::Error;
use std::fmt;
use std::path::Path;

use gale_core::StepError;
use gale_grid::{GridError, GridField};
use gale_solver::hygiene::MAX_DECIMALS;
use serde::{Deserialize, Serialize};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while loading or validating a [`SimConfig`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid allocation failed.
    Grid(GridError),
    /// The engine refused the change in its current state.
    Engine(StepError),
    /// Interior size is zero.
    EmptyGrid,
    /// Interior size exceeds the largest supported grid.
    GridTooLarge {
        /// The configured size.
        n: usize,
        /// Largest supported size.
        max: usize,
    },
    /// `dt` is NaN, infinite, zero, or negative.
    InvalidTimestep {
        /// The invalid value.
        value: f64,
    },
    /// A coefficient is non-finite, or negative where it must not be.
    InvalidCoefficient {
        /// Name of the coefficient.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// Rounding precision is above the supported maximum.
    InvalidRounding {
        /// The configured number of decimals.
        decimals: u32,
        /// Largest supported number of decimals.
        max: u32,
    },
    /// The world name is empty or contains a path separator.
    InvalidWorldName {
        /// The rejected name.
        name: String,
    },
    /// A configuration file could not be read or parsed.
    Load {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Engine(e) => write!(f, "engine: {e}"),
            Self::EmptyGrid => write!(f, "grid must have at least one interior cell"),
            Self::GridTooLarge { n, max } => {
                write!(f, "grid size {n} exceeds maximum of {max}")
            }
            Self::InvalidTimestep { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::InvalidCoefficient { name, value } => {
                write!(f, "invalid {name}: {value}")
            }
            Self::InvalidRounding { decimals, max } => {
                write!(f, "rounding_decimals {decimals} exceeds maximum of {max}")
            }
            Self::InvalidWorldName { name } => write!(f, "invalid world name '{name}'"),
            Self::Load { reason } => write!(f, "cannot load config: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<StepError> for ConfigError {
    fn from(e: StepError) -> Self {
        Self::Engine(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for one simulated world.
///
/// Immutable while the engine runs; see
/// [`TickEngine::reconfigure`](crate::TickEngine::reconfigure).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Storage key for persistence. Default: `"default-world"`.
    pub world_name: String,
    /// Interior cells per axis. Default: 100.
    pub n: usize,
    /// Timestep. Default: 0.5.
    pub dt: f64,
    /// Pressure diffusion rate. Default: 1e-4.
    pub diffusion: f64,
    /// Wind viscosity. Default: 1e-4.
    pub viscosity: f64,
    /// Planetary angular velocity Ω in rad/s. Default: 7.2921e-5.
    pub angular_velocity: f64,
    /// Pressure the masked gradient splits about. Default: 1013.25.
    pub reference_pressure: f64,
    /// Scale of the pressure-gradient forcing. Default: 0.1.
    pub pgf_modifier: f64,
    /// Scale of the Coriolis term. Default: 1.0.
    pub coriolis_modifier: f64,
    /// First tick at which pressure-gradient forcing is applied. Default: 10.
    pub begin_pgf_tick: u64,
    /// Decimal places every field is rounded to after a tick. Default: 10.
    pub rounding_decimals: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_name: "default-world".to_string(),
            n: 100,
            dt: 0.5,
            diffusion: 1e-4,
            viscosity: 1e-4,
            angular_velocity: 7.2921e-5,
            reference_pressure: 1013.25,
            pgf_modifier: 0.1,
            coriolis_modifier: 1.0,
            begin_pgf_tick: 10,
            rounding_decimals: 10,
        }
    }
}

impl SimConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid size.
        if self.n == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.n > GridField::MAX_N {
            return Err(ConfigError::GridTooLarge {
                n: self.n,
                max: GridField::MAX_N,
            });
        }
        // 2. Timestep must be finite and positive.
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::InvalidTimestep { value: self.dt });
        }
        // 3. Rates are non-negative; the implicit solver is unconditionally
        //    stable for any of them.
        for (name, value) in [("diffusion", self.diffusion), ("viscosity", self.viscosity)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidCoefficient { name, value });
            }
        }
        // 4. Remaining coefficients only need to be finite.
        for (name, value) in [
            ("angular_velocity", self.angular_velocity),
            ("reference_pressure", self.reference_pressure),
            ("pgf_modifier", self.pgf_modifier),
            ("coriolis_modifier", self.coriolis_modifier),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidCoefficient { name, value });
            }
        }
        // 5. Rounding precision.
        if self.rounding_decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidRounding {
                decimals: self.rounding_decimals,
                max: MAX_DECIMALS,
            });
        }
        // 6. World name is used as a single path component by file stores.
        let name = &self.world_name;
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
            return Err(ConfigError::InvalidWorldName { name: name.clone() });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| ConfigError::Load {
            reason: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> String {
        // A struct of plain numbers and a string always serializes.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
