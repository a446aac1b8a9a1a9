//! Coriolis deflection on a linear-latitude grid.

use gale_core::BoundaryKind;
use gale_grid::{apply_boundary, GridError, GridField};

use crate::source::add_source;

/// Latitude in degrees of grid row `i`.
///
/// Latitude is linear along the first axis: row `0` is the south pole
/// (−90°), row `N` the north pole (+90°), and row `N/2` the equator.
pub fn latitude_degrees(n: usize, i: usize) -> f64 {
    let n = n as f64;
    -(((n - i as f64) / n * 180.0) - 90.0)
}

/// Per-cell Coriolis acceleration from the most recent application.
///
/// Written by [`coriolis`] for display and inspection only; nothing in the
/// solver reads it back.
#[derive(Clone, Debug, PartialEq)]
pub struct CoriolisDiagnostics {
    /// Acceleration applied to `u`.
    pub u: GridField,
    /// Acceleration applied to `v`.
    pub v: GridField,
}

impl CoriolisDiagnostics {
    /// Zeroed diagnostics on an `n × n` grid.
    pub fn new(n: usize) -> Result<Self, GridError> {
        Ok(Self {
            u: GridField::new(n)?,
            v: GridField::new(n)?,
        })
    }

    /// Zero both components.
    pub fn clear(&mut self) {
        self.u.fill(0.0);
        self.v.fill(0.0);
    }
}

/// Deflect the wind `(u, v)` for one step of length `dt`.
///
/// With `f = 2·Ω·sin(lat)·modifier` the accelerations are `v·f` on `u` and
/// `−u·f` on `v`, both taken from the velocity before this call. They are
/// recorded in `diagnostics`, added as `x += dt·s`, and the velocity halos
/// are re-derived.
pub fn coriolis(
    u: &mut GridField,
    v: &mut GridField,
    dt: f64,
    angular_velocity: f64,
    modifier: f64,
    diagnostics: &mut CoriolisDiagnostics,
) {
    let n = u.n();
    for i in 1..=n {
        let f = 2.0 * angular_velocity * latitude_degrees(n, i).to_radians().sin() * modifier;
        for j in 1..=n {
            diagnostics.u.set(i, j, v.get(i, j) * f);
            diagnostics.v.set(i, j, -u.get(i, j) * f);
        }
    }
    add_source(u, &diagnostics.u, dt);
    add_source(v, &diagnostics.v, dt);
    apply_boundary(u, BoundaryKind::XComponent);
    apply_boundary(v, BoundaryKind::YComponent);
}

#[cfg(test)]
mod tests {
    use super::*;

    const OMEGA: f64 = 7.2921e-5;

    fn uniform(n: usize, u0: f64, v0: f64) -> (GridField, GridField) {
        (
            GridField::filled(n, u0).unwrap(),
            GridField::filled(n, v0).unwrap(),
        )
    }

    #[test]
    fn latitude_spans_pole_to_pole() {
        assert_eq!(latitude_degrees(100, 0), -90.0);
        assert_eq!(latitude_degrees(100, 50), 0.0);
        assert_eq!(latitude_degrees(100, 100), 90.0);
        assert!((latitude_degrees(100, 25) + 45.0).abs() < 1e-12);
    }

    #[test]
    fn equator_has_no_deflection() {
        let n = 10;
        let (mut u, mut v) = uniform(n, 1.0, 1.0);
        let mut diag = CoriolisDiagnostics::new(n).unwrap();
        coriolis(&mut u, &mut v, 0.5, OMEGA, 1.0, &mut diag);
        for j in 1..=n {
            assert_eq!(diag.u.get(5, j), 0.0);
            assert_eq!(diag.v.get(5, j), 0.0);
            assert_eq!(u.get(5, j), 1.0);
        }
    }

    #[test]
    fn mirrored_latitudes_are_antisymmetric() {
        let n = 20;
        let (mut u, mut v) = uniform(n, 0.3, -0.7);
        let mut diag = CoriolisDiagnostics::new(n).unwrap();
        coriolis(&mut u, &mut v, 1.0, OMEGA, 1.0, &mut diag);
        for i in 1..n {
            let mirror = n - i;
            for j in 1..=n {
                assert!((diag.u.get(i, j) + diag.u.get(mirror, j)).abs() < 1e-15);
                assert!((diag.v.get(i, j) + diag.v.get(mirror, j)).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn deflection_uses_pre_update_velocity() {
        let n = 4;
        let (mut u, mut v) = uniform(n, 2.0, 3.0);
        let mut diag = CoriolisDiagnostics::new(n).unwrap();
        coriolis(&mut u, &mut v, 0.5, OMEGA, 2.0, &mut diag);
        let i = 4;
        let f = 2.0 * OMEGA * latitude_degrees(n, i).to_radians().sin() * 2.0;
        assert_eq!(diag.u.get(i, 1), 3.0 * f);
        assert_eq!(diag.v.get(i, 1), -2.0 * f);
        assert_eq!(u.get(i, 1), 2.0 + 0.5 * 3.0 * f);
        assert_eq!(v.get(i, 1), 3.0 - 0.5 * 2.0 * f);
    }

    #[test]
    fn northern_hemisphere_turns_wind_clockwise() {
        let n = 10;
        let (mut u, mut v) = uniform(n, 1.0, 0.0);
        let mut diag = CoriolisDiagnostics::new(n).unwrap();
        coriolis(&mut u, &mut v, 1.0, OMEGA, 1.0, &mut diag);
        assert!(v.get(9, 5) < 0.0);
        assert!(v.get(2, 5) > 0.0);
    }

    #[test]
    fn diagnostics_halo_stays_zero() {
        let n = 6;
        let (mut u, mut v) = uniform(n, 1.5, -0.5);
        let mut diag = CoriolisDiagnostics::new(n).unwrap();
        coriolis(&mut u, &mut v, 1.0, OMEGA, 1.0, &mut diag);
        for k in 0..=n + 1 {
            for (i, j) in [(0, k), (n + 1, k), (k, 0), (k, n + 1)] {
                assert_eq!(diag.u.get(i, j), 0.0);
                assert_eq!(diag.v.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn velocity_halo_follows_deflected_interior() {
        let n = 6;
        let (mut u, mut v) = uniform(n, 1.0, 1.0);
        let mut diag = CoriolisDiagnostics::new(n).unwrap();
        coriolis(&mut u, &mut v, 1.0, OMEGA, 1.0, &mut diag);
        // u is negated on the i edges, v on the j edges.
        assert_eq!(u.get(0, 3), -u.get(1, 3));
        assert_eq!(u.get(3, 0), u.get(3, 1));
        assert_eq!(v.get(3, 0), -v.get(3, 1));
        assert_eq!(v.get(0, 3), v.get(1, 3));
    }

    #[test]
    fn zero_modifier_disables_deflection() {
        let n = 6;
        let (mut u, mut v) = uniform(n, 1.0, -1.0);
        let mut diag = CoriolisDiagnostics::new(n).unwrap();
        coriolis(&mut u, &mut v, 1.0, OMEGA, 0.0, &mut diag);
        assert_eq!(u.get(6, 3), 1.0);
        assert_eq!(v.get(6, 3), -1.0);
    }
}
