//! The field store: sole owner of every simulated grid.
//!
//! Evolvers borrow the store mutably for one run; everything else reads
//! it through [`FieldSnapshot`] or [`FieldStore::field`].

use gale_core::{EvolveError, FieldName};
use gale_grid::{BufferPair, GridError, GridField};
use gale_solver::{gradient, round_field, CoriolisDiagnostics, GradientPair, RoundingError};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// What [`FieldStore::clear`] resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearScope {
    /// Velocity, pressure, gradient history and Coriolis diagnostics.
    Full,
    /// Velocity and pressure only; gradient history and diagnostics survive.
    FieldsOnly,
}

/// One cell's state, as reported by [`FieldStore::probe`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellProbe {
    /// First-axis wind component.
    pub u: f64,
    /// Second-axis wind component.
    pub v: f64,
    /// Pressure.
    pub pressure: f64,
}

/// Read-only view of the fields a renderer needs.
#[derive(Clone, Copy, Debug)]
pub struct FieldSnapshot<'a> {
    /// First-axis wind component.
    pub u: &'a GridField,
    /// Second-axis wind component.
    pub v: &'a GridField,
    /// Pressure.
    pub pressure: &'a GridField,
    /// Coriolis acceleration applied to `u` by the last tick.
    pub coriolis_u: &'a GridField,
    /// Coriolis acceleration applied to `v` by the last tick.
    pub coriolis_v: &'a GridField,
}

/// Owner of the wind, pressure, gradient history and diagnostic fields.
#[derive(Clone, Debug)]
pub struct FieldStore {
    pub(crate) u: BufferPair,
    pub(crate) v: BufferPair,
    pub(crate) pressure: BufferPair,
    pub(crate) gradient: GradientPair,
    pub(crate) gradient_prev: GradientPair,
    pub(crate) coriolis: CoriolisDiagnostics,
    mask_scratch: GridField,
    reference_pressure: f64,
}

impl FieldStore {
    /// Allocate still air at `reference_pressure` on an `n × n` grid.
    pub fn new(n: usize, reference_pressure: f64) -> Result<Self, GridError> {
        Ok(Self {
            u: BufferPair::new(n)?,
            v: BufferPair::new(n)?,
            pressure: BufferPair::filled(n, reference_pressure)?,
            gradient: GradientPair::new(n)?,
            gradient_prev: GradientPair::new(n)?,
            coriolis: CoriolisDiagnostics::new(n)?,
            mask_scratch: GridField::new(n)?,
            reference_pressure,
        })
    }

    /// Interior cells per axis.
    pub fn n(&self) -> usize {
        self.u.n()
    }

    /// Pressure the gradient masks split about.
    pub fn reference_pressure(&self) -> f64 {
        self.reference_pressure
    }

    /// The named field.
    ///
    /// Velocity and pressure names resolve to the current slot. Gradient
    /// names resolve to the gradient applied by the most recent tick.
    pub fn field(&self, name: FieldName) -> &GridField {
        match name {
            FieldName::VelocityU => self.u.current(),
            FieldName::VelocityV => self.v.current(),
            FieldName::Pressure => self.pressure.current(),
            FieldName::PressureGradientU => &self.gradient_prev.u,
            FieldName::PressureGradientV => &self.gradient_prev.v,
            FieldName::CoriolisU => &self.coriolis.u,
            FieldName::CoriolisV => &self.coriolis.v,
        }
    }

    /// The named field, mutably. Resolves names as [`field`](Self::field) does.
    pub fn field_mut(&mut self, name: FieldName) -> &mut GridField {
        match name {
            FieldName::VelocityU => self.u.current_mut(),
            FieldName::VelocityV => self.v.current_mut(),
            FieldName::Pressure => self.pressure.current_mut(),
            FieldName::PressureGradientU => &mut self.gradient_prev.u,
            FieldName::PressureGradientV => &mut self.gradient_prev.v,
            FieldName::CoriolisU => &mut self.coriolis.u,
            FieldName::CoriolisV => &mut self.coriolis.v,
        }
    }

    /// Gradient computed for the tick in progress.
    pub fn gradient(&self) -> &GradientPair {
        &self.gradient
    }

    /// Gradient applied by the previous tick.
    pub fn previous_gradient(&self) -> &GradientPair {
        &self.gradient_prev
    }

    /// Coriolis diagnostics from the last wind update.
    pub fn coriolis(&self) -> &CoriolisDiagnostics {
        &self.coriolis
    }

    /// Compute this tick's pressure gradient from the current pressure.
    pub fn compute_gradient(&mut self) {
        gradient(
            self.pressure.current(),
            self.reference_pressure,
            &mut self.gradient,
            &mut self.mask_scratch,
        );
    }

    /// Make this tick's gradient the previous one.
    pub fn retire_gradient(&mut self) {
        std::mem::swap(&mut self.gradient, &mut self.gradient_prev);
    }

    /// Reset fields to their initial state.
    pub fn clear(&mut self, scope: ClearScope) {
        self.u.fill(0.0);
        self.v.fill(0.0);
        self.pressure.fill(self.reference_pressure);
        if scope == ClearScope::Full {
            self.gradient.clear();
            self.gradient_prev.clear();
            self.coriolis.clear();
        }
    }

    /// Round every named field, collecting per-field failures.
    pub fn round_all(&mut self, decimals: u32) -> SmallVec<[(FieldName, RoundingError); 2]> {
        let mut failures = SmallVec::new();
        for name in FieldName::ALL {
            if let Err(e) = round_field(self.field_mut(name), decimals) {
                failures.push((name, e));
            }
        }
        failures
    }

    /// First NaN or infinity among `names`, as an evolver error.
    pub fn check_finite(&self, names: &[FieldName]) -> Result<(), EvolveError> {
        for &name in names {
            if let Some((cell, value)) = self.field(name).first_non_finite() {
                return Err(EvolveError::NonFinite {
                    field: name,
                    cell,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> FieldSnapshot<'_> {
        FieldSnapshot {
            u: self.u.current(),
            v: self.v.current(),
            pressure: self.pressure.current(),
            coriolis_u: &self.coriolis.u,
            coriolis_v: &self.coriolis.v,
        }
    }

    /// Every named field, in [`FieldName::ALL`] order.
    pub fn fields(&self) -> IndexMap<FieldName, &GridField> {
        FieldName::ALL
            .into_iter()
            .map(|name| (name, self.field(name)))
            .collect()
    }

    /// Wind and pressure at interior cell `(x, y)`, zero-based.
    pub fn probe(&self, x: usize, y: usize) -> Result<CellProbe, GridError> {
        Ok(CellProbe {
            u: self.u.current().cell(x, y)?,
            v: self.v.current().cell(x, y)?,
            pressure: self.pressure.current().cell(x, y)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_still_air_at_reference() {
        let store = FieldStore::new(4, 1013.25).unwrap();
        assert_eq!(store.n(), 4);
        assert_eq!(store.field(FieldName::VelocityU).max_abs_interior(), 0.0);
        assert!(store
            .field(FieldName::Pressure)
            .as_slice()
            .iter()
            .all(|&p| p == 1013.25));
    }

    #[test]
    fn compute_gradient_of_uniform_reference_is_zero() {
        let mut store = FieldStore::new(6, 1013.25).unwrap();
        store.compute_gradient();
        assert_eq!(store.gradient().u.max_abs_interior(), 0.0);
        assert_eq!(store.gradient().v.max_abs_interior(), 0.0);
    }

    #[test]
    fn retire_gradient_swaps_history() {
        let mut store = FieldStore::new(4, 0.0).unwrap();
        store.field_mut(FieldName::Pressure).set(2, 2, 1.0);
        store.compute_gradient();
        let computed = store.gradient().clone();
        store.retire_gradient();
        assert_eq!(store.previous_gradient(), &computed);
        assert_eq!(store.field(FieldName::PressureGradientU), &computed.u);
    }

    #[test]
    fn clear_fields_only_keeps_history() {
        let mut store = FieldStore::new(4, 5.0).unwrap();
        store.field_mut(FieldName::VelocityU).set(1, 1, 3.0);
        store.field_mut(FieldName::Pressure).set(1, 1, 9.0);
        store.field_mut(FieldName::PressureGradientU).set(1, 1, 2.0);
        store.field_mut(FieldName::CoriolisV).set(1, 1, 4.0);

        store.clear(ClearScope::FieldsOnly);
        assert_eq!(store.field(FieldName::VelocityU).get(1, 1), 0.0);
        assert_eq!(store.field(FieldName::Pressure).get(1, 1), 5.0);
        assert_eq!(store.field(FieldName::PressureGradientU).get(1, 1), 2.0);
        assert_eq!(store.field(FieldName::CoriolisV).get(1, 1), 4.0);

        store.clear(ClearScope::Full);
        assert_eq!(store.field(FieldName::PressureGradientU).get(1, 1), 0.0);
        assert_eq!(store.field(FieldName::CoriolisV).get(1, 1), 0.0);
    }

    #[test]
    fn check_finite_names_field_and_cell() {
        let mut store = FieldStore::new(3, 0.0).unwrap();
        assert!(store.check_finite(&FieldName::ALL).is_ok());
        store.field_mut(FieldName::VelocityV).set(2, 3, f64::NAN);
        match store.check_finite(&[FieldName::VelocityU, FieldName::VelocityV]) {
            Err(EvolveError::NonFinite { field, cell, .. }) => {
                assert_eq!(field, FieldName::VelocityV);
                assert_eq!(cell, (2, 3));
            }
            other => panic!("expected NonFinite, got {other:?}"),
        }
    }

    #[test]
    fn round_all_reports_each_failing_field() {
        let mut store = FieldStore::new(2, 0.0).unwrap();
        store.field_mut(FieldName::Pressure).set(1, 1, 1e300);
        store.field_mut(FieldName::VelocityU).set(1, 1, 0.123_456_789_012_3);
        let failures = store.round_all(10);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, FieldName::Pressure);
        assert_eq!(store.field(FieldName::VelocityU).get(1, 1), 0.123_456_789);
    }

    #[test]
    fn probe_reads_interior_cell() {
        let mut store = FieldStore::new(3, 1000.0).unwrap();
        store.field_mut(FieldName::VelocityU).set(1, 3, 0.5);
        let probe = store.probe(0, 2).unwrap();
        assert_eq!(
            probe,
            CellProbe {
                u: 0.5,
                v: 0.0,
                pressure: 1000.0
            }
        );
        assert!(store.probe(3, 0).is_err());
    }

    #[test]
    fn fields_are_listed_in_canonical_order() {
        let store = FieldStore::new(2, 0.0).unwrap();
        let names: Vec<_> = store.fields().keys().copied().collect();
        assert_eq!(names, FieldName::ALL.to_vec());
    }
}
