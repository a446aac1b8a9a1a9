//! Halo-padded square grid field.

use std::ops::{Index, IndexMut, RangeInclusive};

use crate::error::GridError;

/// A square `(N+2)×(N+2)` field of `f64` values.
///
/// Cells are addressed `(i, j)` in grid coordinates, where `1..=N` on each
/// axis is the interior and `0` / `N+1` are the halo ring. Storage is
/// row-major over `i`: `index = i * (N + 2) + j`.
///
/// Interior-only accessors ([`cell`](Self::cell), [`set_cell`](Self::set_cell))
/// take zero-based coordinates in `[0, N)` and are bounds-checked; they are
/// the entry points for code outside the numerical core.
///
/// # Examples
///
/// ```
/// use gale_grid::GridField;
///
/// let mut field = GridField::new(4).unwrap();
/// assert_eq!(field.side(), 6);
/// field.set_cell(0, 0, 1.5).unwrap();
/// assert_eq!(field.get(1, 1), 1.5);
/// assert_eq!(field.cell(0, 0).unwrap(), 1.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridField {
    n: usize,
    data: Vec<f64>,
}

impl GridField {
    /// Largest supported interior size.
    pub const MAX_N: usize = 1 << 14;

    /// Create a zero-filled field with `n × n` interior cells.
    pub fn new(n: usize) -> Result<Self, GridError> {
        Self::filled(n, 0.0)
    }

    /// Create a field with every cell, halo included, set to `value`.
    pub fn filled(n: usize, value: f64) -> Result<Self, GridError> {
        Self::check_size(n)?;
        let side = n + 2;
        Ok(Self {
            n,
            data: vec![value; side * side],
        })
    }

    /// Wrap existing storage. `data` must hold `(n+2)²` values in grid order.
    pub fn from_raw(n: usize, data: Vec<f64>) -> Result<Self, GridError> {
        Self::check_size(n)?;
        let expected = (n + 2) * (n + 2);
        if data.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                found: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    fn check_size(n: usize) -> Result<(), GridError> {
        if n == 0 {
            return Err(GridError::EmptyGrid);
        }
        if n > Self::MAX_N {
            return Err(GridError::SizeTooLarge { n });
        }
        Ok(())
    }

    /// Number of interior cells along each axis.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of cells along each axis, halo included.
    pub fn side(&self) -> usize {
        self.n + 2
    }

    /// Total number of stored cells, halo included.
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    /// Grid-coordinate range covering the interior on one axis.
    pub fn interior(&self) -> RangeInclusive<usize> {
        1..=self.n
    }

    /// Flat storage index of grid cell `(i, j)`.
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        i * (self.n + 2) + j
    }

    /// Value at grid cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` lies outside the halo-padded grid.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.idx(i, j)]
    }

    /// Overwrite grid cell `(i, j)`.
    ///
    /// Halo cells belong to the boundary handler; callers outside
    /// [`boundary`](crate::boundary) should only write interior cells.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` lies outside the halo-padded grid.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let k = self.idx(i, j);
        self.data[k] = value;
    }

    fn check_cell(&self, x: usize, y: usize) -> Result<(), GridError> {
        if x >= self.n || y >= self.n {
            return Err(GridError::CellOutOfBounds {
                cell: (x, y),
                n: self.n,
            });
        }
        Ok(())
    }

    /// Value of interior cell `(x, y)`, zero-based.
    pub fn cell(&self, x: usize, y: usize) -> Result<f64, GridError> {
        self.check_cell(x, y)?;
        Ok(self.get(x + 1, y + 1))
    }

    /// Overwrite interior cell `(x, y)`, zero-based.
    pub fn set_cell(&mut self, x: usize, y: usize, value: f64) -> Result<(), GridError> {
        self.check_cell(x, y)?;
        self.set(x + 1, y + 1, value);
        Ok(())
    }

    /// Raw storage in grid order, halo included.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable raw storage in grid order, halo included.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Set every cell, halo included.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Set every interior cell, leaving the halo untouched.
    pub fn fill_interior(&mut self, value: f64) {
        for i in self.interior() {
            let start = self.idx(i, 1);
            self.data[start..start + self.n].fill(value);
        }
    }

    /// Copy every cell of `other` into `self`.
    pub fn copy_from(&mut self, other: &GridField) -> Result<(), GridError> {
        if other.n != self.n {
            return Err(GridError::SizeMismatch {
                expected: self.n,
                found: other.n,
            });
        }
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    /// Interior values in row-major order (`N*N` values, halo stripped).
    pub fn interior_to_vec(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.n * self.n);
        for i in self.interior() {
            let start = self.idx(i, 1);
            out.extend_from_slice(&self.data[start..start + self.n]);
        }
        out
    }

    /// Largest absolute interior value.
    pub fn max_abs_interior(&self) -> f64 {
        let mut max = 0.0f64;
        for i in self.interior() {
            for j in self.interior() {
                max = max.max(self.get(i, j).abs());
            }
        }
        max
    }

    /// First cell (in storage order) holding NaN or an infinity.
    pub fn first_non_finite(&self) -> Option<((usize, usize), f64)> {
        let side = self.side();
        self.data
            .iter()
            .position(|v| !v.is_finite())
            .map(|k| ((k / side, k % side), self.data[k]))
    }
}

impl Index<(usize, usize)> for GridField {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[self.idx(i, j)]
    }
}

impl IndexMut<(usize, usize)> for GridField {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        let k = self.idx(i, j);
        &mut self.data[k]
    }
}
