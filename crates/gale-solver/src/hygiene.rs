//! Rounding and finiteness checks applied between ticks.

use std::error::Error;
use std::fmt;

use gale_grid::GridField;

/// Largest supported number of decimal places for [`round_field`].
pub const MAX_DECIMALS: u32 = 15;

/// A field could not be rounded to the requested precision.
///
/// Cells whose scaled value overflows are left unchanged; every other cell
/// is still rounded.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundingError {
    /// Grid coordinate of the first cell that could not be rounded.
    pub cell: (usize, usize),
    /// Its value.
    pub value: f64,
    /// Number of cells left unrounded.
    pub count: usize,
    /// Requested decimal places.
    pub decimals: u32,
}

impl fmt::Display for RoundingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cell(s) could not be rounded to {} decimals, first at ({}, {}) = {}",
            self.count, self.decimals, self.cell.0, self.cell.1, self.value
        )
    }
}

impl Error for RoundingError {}

/// Round every cell of `field` to `decimals` decimal places.
///
/// Uses round-half-away-from-zero on `value · 10^decimals`. `decimals` is
/// clamped to [`MAX_DECIMALS`].
pub fn round_field(field: &mut GridField, decimals: u32) -> Result<(), RoundingError> {
    let decimals = decimals.min(MAX_DECIMALS);
    let scale = 10f64.powi(decimals as i32);
    let side = field.side();
    let mut failure: Option<RoundingError> = None;

    for (k, value) in field.as_mut_slice().iter_mut().enumerate() {
        let scaled = *value * scale;
        if scaled.is_finite() {
            *value = scaled.round() / scale;
            continue;
        }
        match failure.as_mut() {
            Some(err) => err.count += 1,
            None => {
                failure = Some(RoundingError {
                    cell: (k / side, k % side),
                    value: *value,
                    count: 1,
                    decimals,
                })
            }
        }
    }

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_places() {
        let mut f = GridField::filled(2, 1.234_567_890_123_4).unwrap();
        round_field(&mut f, 10).unwrap();
        assert_eq!(f.get(1, 1), 1.234_567_890_1);
        round_field(&mut f, 3).unwrap();
        assert_eq!(f.get(2, 2), 1.235);
    }

    #[test]
    fn tiny_values_collapse_to_zero() {
        let mut f = GridField::filled(2, 3.0e-12).unwrap();
        round_field(&mut f, 10).unwrap();
        assert_eq!(f.get(1, 2), 0.0);
    }

    #[test]
    fn overflowing_values_are_reported_and_kept() {
        let mut f = GridField::filled(2, 0.123_456).unwrap();
        f.set(1, 2, f64::MAX);
        f.set(2, 1, f64::INFINITY);
        let err = round_field(&mut f, 10).unwrap_err();
        assert_eq!(err.cell, (1, 2));
        assert_eq!(err.count, 2);
        assert_eq!(f.get(1, 2), f64::MAX);
        assert_eq!(f.get(1, 1), 0.123_456);
        assert!(err.to_string().contains("10 decimals"));
    }

    #[test]
    fn decimals_are_clamped() {
        let mut f = GridField::filled(1, 0.5).unwrap();
        round_field(&mut f, 400).unwrap();
        assert_eq!(f.get(1, 1), 0.5);
    }
}
