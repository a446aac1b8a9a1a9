//! Gauss–Seidel relaxation shared by diffusion and projection.

use gale_core::BoundaryKind;
use gale_grid::{apply_boundary, GridField};

/// Number of sweeps performed by [`relax`].
pub const RELAX_ITERATIONS: usize = 20;

/// Approximately solve `c·x − a·(x_W + x_E + x_S + x_N) = x0` on the interior.
///
/// Performs [`RELAX_ITERATIONS`] in-place Gauss–Seidel sweeps over the
/// interior of `x`, reading neighbours' latest values, and re-derives the
/// halo with `kind` after each sweep. `x` doubles as the initial guess.
pub fn relax(x: &mut GridField, x0: &GridField, kind: BoundaryKind, a: f64, c: f64) {
    debug_assert_eq!(x.n(), x0.n());
    let n = x.n();
    let side = x.side();
    let inv_c = 1.0 / c;
    for _ in 0..RELAX_ITERATIONS {
        {
            let xs = x.as_mut_slice();
            let bs = x0.as_slice();
            for i in 1..=n {
                let row = i * side;
                for j in 1..=n {
                    let k = row + j;
                    let neighbours = xs[k - side] + xs[k + side] + xs[k - 1] + xs[k + 1];
                    xs[k] = (bs[k] + a * neighbours) * inv_c;
                }
            }
        }
        apply_boundary(x, kind);
    }
}
