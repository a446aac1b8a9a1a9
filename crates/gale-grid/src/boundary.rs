//! Halo derivation for every [`BoundaryKind`].

use gale_core::BoundaryKind;

use crate::grid::GridField;

/// Rewrite the halo ring of `field` from its interior.
///
/// Each edge halo cell mirrors the adjacent interior cell, negated on the
/// `i` edges for [`BoundaryKind::XComponent`] and on the `j` edges for
/// [`BoundaryKind::YComponent`]. Each corner is the mean of its two
/// neighbouring edge-halo cells.
///
/// Interior cells are never touched, so applying the handler twice gives
/// the same field as applying it once.
pub fn apply_boundary(field: &mut GridField, kind: BoundaryKind) {
    let n = field.n();
    let sx = kind.x_edge_sign();
    let sy = kind.y_edge_sign();

    for k in 1..=n {
        let low_i = field.get(1, k);
        let high_i = field.get(n, k);
        field.set(0, k, sx * low_i);
        field.set(n + 1, k, sx * high_i);

        let low_j = field.get(k, 1);
        let high_j = field.get(k, n);
        field.set(k, 0, sy * low_j);
        field.set(k, n + 1, sy * high_j);
    }

    let corner = |f: &GridField, a: (usize, usize), b: (usize, usize)| {
        0.5 * (f.get(a.0, a.1) + f.get(b.0, b.1))
    };
    let c00 = corner(field, (1, 0), (0, 1));
    let c0n = corner(field, (1, n + 1), (0, n));
    let cn0 = corner(field, (n, 0), (n + 1, 1));
    let cnn = corner(field, (n, n + 1), (n + 1, n));
    field.set(0, 0, c00);
    field.set(0, n + 1, c0n);
    field.set(n + 1, 0, cn0);
    field.set(n + 1, n + 1, cnn);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ramp(n: usize) -> GridField {
        let mut f = GridField::new(n).unwrap();
        for i in 1..=n {
            for j in 1..=n {
                f.set(i, j, (i * 10 + j) as f64);
            }
        }
        f
    }

    #[test]
    fn scalar_copies_edges() {
        let mut f = ramp(3);
        apply_boundary(&mut f, BoundaryKind::Scalar);
        assert_eq!(f.get(0, 2), f.get(1, 2));
        assert_eq!(f.get(4, 2), f.get(3, 2));
        assert_eq!(f.get(2, 0), f.get(2, 1));
        assert_eq!(f.get(2, 4), f.get(2, 3));
    }

    #[test]
    fn x_component_negates_first_axis_edges_only() {
        let mut f = ramp(3);
        apply_boundary(&mut f, BoundaryKind::XComponent);
        assert_eq!(f.get(0, 2), -f.get(1, 2));
        assert_eq!(f.get(4, 2), -f.get(3, 2));
        assert_eq!(f.get(2, 0), f.get(2, 1));
        assert_eq!(f.get(2, 4), f.get(2, 3));
    }

    #[test]
    fn y_component_negates_second_axis_edges_only() {
        let mut f = ramp(3);
        apply_boundary(&mut f, BoundaryKind::YComponent);
        assert_eq!(f.get(0, 2), f.get(1, 2));
        assert_eq!(f.get(2, 0), -f.get(2, 1));
        assert_eq!(f.get(2, 4), -f.get(2, 3));
    }

    #[test]
    fn corners_average_adjacent_halo() {
        let mut f = ramp(3);
        apply_boundary(&mut f, BoundaryKind::XComponent);
        assert_eq!(f.get(0, 0), 0.5 * (f.get(1, 0) + f.get(0, 1)));
        assert_eq!(f.get(0, 4), 0.5 * (f.get(1, 4) + f.get(0, 3)));
        assert_eq!(f.get(4, 0), 0.5 * (f.get(3, 0) + f.get(4, 1)));
        assert_eq!(f.get(4, 4), 0.5 * (f.get(3, 4) + f.get(4, 3)));
    }

    #[test]
    fn single_cell_grid() {
        let mut f = GridField::new(1).unwrap();
        f.set(1, 1, 2.0);
        apply_boundary(&mut f, BoundaryKind::YComponent);
        assert_eq!(f.get(0, 1), 2.0);
        assert_eq!(f.get(1, 0), -2.0);
        assert_eq!(f.get(0, 0), 0.0);
        assert_eq!(f.get(1, 1), 2.0);
    }

    fn kind_strategy() -> impl Strategy<Value = BoundaryKind> {
        prop_oneof![
            Just(BoundaryKind::Scalar),
            Just(BoundaryKind::XComponent),
            Just(BoundaryKind::YComponent),
        ]
    }

    proptest! {
        #[test]
        fn boundary_is_idempotent(
            n in 1usize..12,
            seed in proptest::collection::vec(-1.0e3f64..1.0e3, 196),
            kind in kind_strategy(),
        ) {
            let side = n + 2;
            let data = seed[..side * side].to_vec();
            let mut once = GridField::from_raw(n, data).unwrap();
            apply_boundary(&mut once, kind);
            let mut twice = once.clone();
            apply_boundary(&mut twice, kind);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn boundary_never_touches_interior(
            n in 1usize..12,
            seed in proptest::collection::vec(-1.0e3f64..1.0e3, 196),
            kind in kind_strategy(),
        ) {
            let side = n + 2;
            let before = GridField::from_raw(n, seed[..side * side].to_vec()).unwrap();
            let mut after = before.clone();
            apply_boundary(&mut after, kind);
            prop_assert_eq!(before.interior_to_vec(), after.interior_to_vec());
        }
    }
}
