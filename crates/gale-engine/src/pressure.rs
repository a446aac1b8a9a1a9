//! Pressure evolver: diffusion then transport by the wind.

use gale_core::{BoundaryKind, EvolveError, FieldName};
use gale_solver::{advect, diffuse};

use crate::config::SimConfig;
use crate::evolver::{Evolver, TickContext};
use crate::store::FieldStore;

/// Diffuses pressure at a fixed rate, then advects it along the current wind.
///
/// Pressure is never projected.
#[derive(Clone, Debug, PartialEq)]
pub struct PressureEvolver {
    diffusion: f64,
}

impl PressureEvolver {
    /// Evolver diffusing at `rate`, which must be finite and non-negative.
    pub fn new(rate: f64) -> Result<Self, String> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(format!(
                "diffusion must be finite and non-negative, got {rate}"
            ));
        }
        Ok(Self { diffusion: rate })
    }

    /// Evolver using the diffusion rate in `config`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            diffusion: config.diffusion,
        }
    }
}

impl Evolver for PressureEvolver {
    fn name(&self) -> &str {
        "pressure"
    }

    fn evolve(&self, store: &mut FieldStore, ctx: &TickContext) -> Result<(), EvolveError> {
        store.pressure.swap();
        {
            let (p, p0) = store.pressure.split_mut();
            diffuse(p, p0, BoundaryKind::Scalar, self.diffusion, ctx.dt);
        }
        store.pressure.swap();
        {
            let (p, p0) = store.pressure.split_mut();
            advect(
                p,
                p0,
                store.u.current(),
                store.v.current(),
                BoundaryKind::Scalar,
                ctx.dt,
            );
        }
        store.check_finite(&[FieldName::Pressure])
    }
}
