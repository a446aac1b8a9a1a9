//! Incompressibility projection.

use gale_core::BoundaryKind;
use gale_grid::{apply_boundary, GridField};

use crate::linear_solve::relax;

/// Write the scaled central-difference divergence of `(u, v)` into `out`.
///
/// `out[i,j] = −0.5·h·(u[i+1,j] − u[i−1,j] + v[i,j+1] − v[i,j−1])` with
/// `h = 1/N`, which is the right-hand side [`project`] solves against.
/// The halo of `out` is left untouched.
pub fn divergence(u: &GridField, v: &GridField, out: &mut GridField) {
    let n = u.n();
    let h = 1.0 / n as f64;
    for i in 1..=n {
        for j in 1..=n {
            let d = u.get(i + 1, j) - u.get(i - 1, j) + v.get(i, j + 1) - v.get(i, j - 1);
            out.set(i, j, -0.5 * h * d);
        }
    }
}

/// Largest absolute interior value of [`divergence`].
pub fn max_abs_divergence(u: &GridField, v: &GridField) -> f64 {
    let n = u.n();
    let h = 1.0 / n as f64;
    let mut max = 0.0f64;
    for i in 1..=n {
        for j in 1..=n {
            let d = u.get(i + 1, j) - u.get(i - 1, j) + v.get(i, j + 1) - v.get(i, j - 1);
            max = max.max((0.5 * h * d).abs());
        }
    }
    max
}

/// Remove the divergent part of `(u, v)`.
///
/// `div` and `p` are scratch fields of the same size; their previous
/// contents are discarded. Solves `Δp = div` by [`relax`] with `a = 1`,
/// `c = 4`, then subtracts the central-difference gradient of `p` from the
/// velocity and re-derives the velocity halos.
pub fn project(u: &mut GridField, v: &mut GridField, p: &mut GridField, div: &mut GridField) {
    let n = u.n();
    let h = 1.0 / n as f64;

    divergence(u, v, div);
    p.fill_interior(0.0);
    apply_boundary(div, BoundaryKind::Scalar);
    apply_boundary(p, BoundaryKind::Scalar);
    relax(p, div, BoundaryKind::Scalar, 1.0, 4.0);

    for i in 1..=n {
        for j in 1..=n {
            let du = 0.5 * (p.get(i + 1, j) - p.get(i - 1, j)) / h;
            let dv = 0.5 * (p.get(i, j + 1) - p.get(i, j - 1)) / h;
            u[(i, j)] -= du;
            v[(i, j)] -= dv;
        }
    }
    apply_boundary(u, BoundaryKind::XComponent);
    apply_boundary(v, BoundaryKind::YComponent);
}
