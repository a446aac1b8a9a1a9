//! Semi-Lagrangian advection.

use gale_core::BoundaryKind;
use gale_grid::{apply_boundary, GridField};

/// Transport `d0` along the velocity `(u, v)` into `d`.
///
/// Each interior cell is traced backwards by `dt·N·(u, v)` cells, the
/// departure point is clamped to `[0.5, N + 0.5]` on both axes, and `d0`
/// is sampled there bilinearly. The halo of `d` is re-derived with `kind`.
///
/// With zero velocity every departure point is the cell itself, so the
/// interior of `d0` is copied unchanged.
pub fn advect(
    d: &mut GridField,
    d0: &GridField,
    u: &GridField,
    v: &GridField,
    kind: BoundaryKind,
    dt: f64,
) {
    debug_assert_eq!(d.n(), d0.n());
    let n = d.n();
    let nf = n as f64;
    let dt0 = dt * nf;
    let upper = nf + 0.5;

    for i in 1..=n {
        for j in 1..=n {
            let x = (i as f64 - dt0 * u.get(i, j)).clamp(0.5, upper);
            let y = (j as f64 - dt0 * v.get(i, j)).clamp(0.5, upper);

            let i0 = x.floor() as usize;
            let j0 = y.floor() as usize;
            let s1 = x - i0 as f64;
            let s0 = 1.0 - s1;
            let t1 = y - j0 as f64;
            let t0 = 1.0 - t1;

            let value = s0 * (t0 * d0.get(i0, j0) + t1 * d0.get(i0, j0 + 1))
                + s1 * (t0 * d0.get(i0 + 1, j0) + t1 * d0.get(i0 + 1, j0 + 1));
            d.set(i, j, value);
        }
    }
    apply_boundary(d, kind);
}
