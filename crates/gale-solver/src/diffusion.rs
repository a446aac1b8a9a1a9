//! Implicit diffusion.

use gale_core::BoundaryKind;
use gale_grid::GridField;

use crate::linear_solve::relax;

/// Diffuse `x0` into `x` at `rate` over one step of length `dt`.
///
/// Uses the implicit scheme with `a = dt·rate·N²` and `c = 1 + 4a`, so it
/// stays stable for any non-negative rate. A zero rate copies the interior
/// of `x0` into `x`.
pub fn diffuse(x: &mut GridField, x0: &GridField, kind: BoundaryKind, rate: f64, dt: f64) {
    let n = x.n() as f64;
    let a = dt * rate * n * n;
    relax(x, x0, kind, a, 1.0 + 4.0 * a);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gale_test_utils::smooth_field;

    #[test]
    fn zero_rate_is_identity_on_interior() {
        let x0 = smooth_field(16, 42, 1.0);
        let mut x = GridField::new(16).unwrap();
        diffuse(&mut x, &x0, BoundaryKind::Scalar, 0.0, 0.5);
        for i in 1..=16 {
            for j in 1..=16 {
                assert!((x.get(i, j) - x0.get(i, j)).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn diffusion_preserves_uniform_field() {
        let x0 = GridField::filled(8, 1013.25).unwrap();
        let mut x = GridField::filled(8, 1013.25).unwrap();
        diffuse(&mut x, &x0, BoundaryKind::Scalar, 1e-4, 0.5);
        assert!((x.get(4, 4) - 1013.25).abs() < 1e-9);
    }

    #[test]
    fn diffusion_lowers_peak() {
        let mut x0 = GridField::new(8).unwrap();
        x0.set(4, 4, 1.0);
        let mut x = x0.clone();
        diffuse(&mut x, &x0, BoundaryKind::Scalar, 0.01, 1.0);
        assert!(x.get(4, 4) < 1.0);
        assert!(x.get(4, 5) > 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn zero_rate_keeps_any_interior(
                values in proptest::collection::vec(-1.0e3f64..1.0e3, 36),
            ) {
                let mut x0 = GridField::new(6).unwrap();
                for (k, &value) in values.iter().enumerate() {
                    x0.set(k / 6 + 1, k % 6 + 1, value);
                }
                let mut x = GridField::new(6).unwrap();
                diffuse(&mut x, &x0, BoundaryKind::YComponent, 0.0, 0.5);
                prop_assert_eq!(x.interior_to_vec(), x0.interior_to_vec());
            }

            #[test]
            fn diffusion_never_raises_the_maximum(
                values in proptest::collection::vec(0.0f64..10.0, 36),
                rate in 0.0f64..1.0,
            ) {
                let mut x0 = GridField::new(6).unwrap();
                for (k, &value) in values.iter().enumerate() {
                    x0.set(k / 6 + 1, k % 6 + 1, value);
                }
                let mut x = GridField::new(6).unwrap();
                diffuse(&mut x, &x0, BoundaryKind::Scalar, rate, 0.5);
                prop_assert!(x.max_abs_interior() <= x0.max_abs_interior() + 1e-12);
            }
        }
    }
}
