//! Additive sources.

use gale_grid::GridField;

/// Add `dt·s` to every cell of `x`, halo included.
pub fn add_source(x: &mut GridField, s: &GridField, dt: f64) {
    debug_assert_eq!(x.n(), s.n());
    for (xv, &sv) in x.as_mut_slice().iter_mut().zip(s.as_slice()) {
        *xv += dt * sv;
    }
}

/// Add `dt·value` to every interior cell strictly inside a disc.
///
/// `centre` is in grid coordinates `(i, j)`; a cell is inside when
/// `(i − ci)² + (j − cj)² < radius²`. The disc may extend past the grid,
/// in which case only the overlapping interior cells change. Returns the
/// number of cells changed.
pub fn add_disc_source(
    field: &mut GridField,
    value: f64,
    centre: (f64, f64),
    radius: f64,
    dt: f64,
) -> usize {
    let r2 = radius * radius;
    let mut touched = 0;
    for i in field.interior() {
        let di = i as f64 - centre.0;
        for j in field.interior() {
            let dj = j as f64 - centre.1;
            if di * di + dj * dj < r2 {
                field[(i, j)] += dt * value;
                touched += 1;
            }
        }
    }
    touched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_scaled_by_dt() {
        let mut x = GridField::filled(3, 1.0).unwrap();
        let s = GridField::filled(3, 4.0).unwrap();
        add_source(&mut x, &s, 0.25);
        assert!(x.as_slice().iter().all(|&v| v == 2.0));
    }

    #[test]
    fn disc_covers_strict_interior_of_circle() {
        let mut f = GridField::new(10).unwrap();
        let touched = add_disc_source(&mut f, 2.0, (5.0, 5.0), 1.0, 0.5);
        // Only the centre cell is strictly inside radius 1.
        assert_eq!(touched, 1);
        assert_eq!(f.get(5, 5), 1.0);
        assert_eq!(f.get(5, 6), 0.0);
    }

    #[test]
    fn disc_of_radius_five_has_69_cells() {
        let mut f = GridField::new(100).unwrap();
        let touched = add_disc_source(&mut f, 5.0, (25.0, 50.0), 5.0, 1.0);
        assert_eq!(touched, 69);
        assert_eq!(f.get(25, 50), 5.0);
        assert_eq!(f.get(29, 52), 5.0);
        assert_eq!(f.get(30, 50), 0.0);
    }

    #[test]
    fn disc_is_clipped_to_interior() {
        let mut f = GridField::new(4).unwrap();
        let touched = add_disc_source(&mut f, 1.0, (0.0, 0.0), 2.0, 1.0);
        assert_eq!(touched, 1);
        assert_eq!(f.get(1, 1), 1.0);
        assert_eq!(f.get(0, 0), 0.0);
        assert_eq!(f.get(0, 1), 0.0);
    }
}
