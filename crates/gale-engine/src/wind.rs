//! Wind evolver: forcing, Coriolis, viscous diffusion and self-advection.
//!
//! Constructed via the builder pattern: [`WindEvolver::builder`], or from a
//! [`SimConfig`] with [`WindEvolver::from_config`].

use gale_core::{BoundaryKind, EvolveError, FieldName};
use gale_grid::GridField;
use gale_solver::{advect, coriolis, diffuse, project};

use crate::config::SimConfig;
use crate::evolver::{Evolver, TickContext};
use crate::store::FieldStore;

/// Advances `u` and `v` by one tick.
///
/// Each tick:
/// ```text
/// forcing   u −= g_prev·k (Sustained), u += g·k (Onset, Sustained), k = pgf·dt
/// coriolis  deflect (u, v)
/// diffuse   swap; diffuse u, v by viscosity; project
/// advect    swap; advect u, v along themselves; project
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WindEvolver {
    viscosity: f64,
    pgf_modifier: f64,
    angular_velocity: f64,
    coriolis_modifier: f64,
}

/// Builder for [`WindEvolver`].
///
/// Every coefficient starts at zero, which gives an inert evolver that
/// only re-projects the wind.
pub struct WindEvolverBuilder {
    viscosity: f64,
    pgf_modifier: f64,
    angular_velocity: f64,
    coriolis_modifier: f64,
}

impl WindEvolver {
    /// Create a new builder.
    pub fn builder() -> WindEvolverBuilder {
        WindEvolverBuilder {
            viscosity: 0.0,
            pgf_modifier: 0.0,
            angular_velocity: 0.0,
            coriolis_modifier: 0.0,
        }
    }

    /// Wind evolver using the coefficients in `config`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            viscosity: config.viscosity,
            pgf_modifier: config.pgf_modifier,
            angular_velocity: config.angular_velocity,
            coriolis_modifier: config.coriolis_modifier,
        }
    }
}

impl WindEvolverBuilder {
    /// Viscous diffusion rate. Must be finite and non-negative.
    pub fn viscosity(mut self, rate: f64) -> Self {
        self.viscosity = rate;
        self
    }

    /// Scale of the pressure-gradient forcing.
    pub fn pgf_modifier(mut self, modifier: f64) -> Self {
        self.pgf_modifier = modifier;
        self
    }

    /// Planetary angular velocity.
    pub fn angular_velocity(mut self, omega: f64) -> Self {
        self.angular_velocity = omega;
        self
    }

    /// Scale of the Coriolis term.
    pub fn coriolis_modifier(mut self, modifier: f64) -> Self {
        self.coriolis_modifier = modifier;
        self
    }

    /// Build the evolver, rejecting non-finite or negative coefficients.
    pub fn build(self) -> Result<WindEvolver, String> {
        if !self.viscosity.is_finite() || self.viscosity < 0.0 {
            return Err(format!(
                "viscosity must be finite and non-negative, got {}",
                self.viscosity
            ));
        }
        for (name, value) in [
            ("pgf_modifier", self.pgf_modifier),
            ("angular_velocity", self.angular_velocity),
            ("coriolis_modifier", self.coriolis_modifier),
        ] {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
        }
        Ok(WindEvolver {
            viscosity: self.viscosity,
            pgf_modifier: self.pgf_modifier,
            angular_velocity: self.angular_velocity,
            coriolis_modifier: self.coriolis_modifier,
        })
    }
}

fn add_scaled_interior(field: &mut GridField, forcing: &GridField, scale: f64) {
    for i in field.interior() {
        for j in field.interior() {
            field[(i, j)] += forcing.get(i, j) * scale;
        }
    }
}

impl Evolver for WindEvolver {
    fn name(&self) -> &str {
        "wind"
    }

    fn evolve(&self, store: &mut FieldStore, ctx: &TickContext) -> Result<(), EvolveError> {
        let dt = ctx.dt;
        let k = self.pgf_modifier * dt;

        if ctx.phase.removes_previous() {
            add_scaled_interior(store.u.current_mut(), &store.gradient_prev.u, -k);
            add_scaled_interior(store.v.current_mut(), &store.gradient_prev.v, -k);
        }
        if ctx.phase.applies_current() {
            add_scaled_interior(store.u.current_mut(), &store.gradient.u, k);
            add_scaled_interior(store.v.current_mut(), &store.gradient.v, k);
        }

        coriolis(
            store.u.current_mut(),
            store.v.current_mut(),
            dt,
            self.angular_velocity,
            self.coriolis_modifier,
            &mut store.coriolis,
        );

        store.u.swap();
        store.v.swap();
        {
            let (u, u0) = store.u.split_mut();
            let (v, v0) = store.v.split_mut();
            diffuse(u, u0, BoundaryKind::XComponent, self.viscosity, dt);
            diffuse(v, v0, BoundaryKind::YComponent, self.viscosity, dt);
            project(u, v, u0, v0);
        }

        store.u.swap();
        store.v.swap();
        {
            let (u, u0) = store.u.split_mut();
            let (v, v0) = store.v.split_mut();
            let (u0, v0) = (&*u0, &*v0);
            advect(u, u0, u0, v0, BoundaryKind::XComponent, dt);
            advect(v, v0, u0, v0, BoundaryKind::YComponent, dt);
        }
        {
            let (u, u0) = store.u.split_mut();
            let (v, v0) = store.v.split_mut();
            project(u, v, u0, v0);
        }

        store.check_finite(&[FieldName::VelocityU, FieldName::VelocityV])
    }
}
