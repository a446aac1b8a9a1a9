//! Masked pressure-gradient forcing.
//!
//! Pressure is split about the reference value into a high mask
//! `max(p, ref)` and a low mask `min(p, ref)`. Each mask contributes a
//! negated central difference, so wind is pushed out of highs and into
//! lows. A field sitting exactly at the reference produces no forcing.

use gale_grid::{GridError, GridField};

/// Pressure-gradient forcing on both velocity axes.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientPair {
    /// Forcing along the first axis.
    pub u: GridField,
    /// Forcing along the second axis.
    pub v: GridField,
}

impl GradientPair {
    /// A zero gradient on an `n × n` grid.
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

#[derive(Clone, Copy)]
enum Mask {
    High,
    Low,
}

impl Mask {
    fn apply(self, p: f64, reference: f64) -> f64 {
        match self {
            Self::High if p < reference => reference,
            Self::Low if p > reference => reference,
            _ => p,
        }
    }
}

/// Compute the masked gradient of `pressure` into `out`.
///
/// `scratch` receives each mask in turn and must match the pressure grid.
/// Only interior cells of `out` are written; its halo is zeroed.
pub fn gradient(
    pressure: &GridField,
    reference: f64,
    out: &mut GradientPair,
    scratch: &mut GridField,
) {
    let n = pressure.n();
    out.clear();
    for mask in [Mask::High, Mask::Low] {
        for (m, &p) in scratch.as_mut_slice().iter_mut().zip(pressure.as_slice()) {
            *m = mask.apply(p, reference);
        }
        for i in 1..=n {
            for j in 1..=n {
                out.u[(i, j)] -= (scratch.get(i + 1, j) - scratch.get(i - 1, j)) / 2.0;
                out.v[(i, j)] -= (scratch.get(i, j + 1) - scratch.get(i, j - 1)) / 2.0;
            }
        }
    }
}
