//! Current/previous double buffer.

use crate::error::GridError;
use crate::grid::GridField;

/// A field together with its value from the previous sub-step.
///
/// Operators read the previous slot and write the current one. Roles are
/// exchanged with [`swap`](Self::swap), which moves storage handles and
/// never copies cell data.
///
/// # Examples
///
/// ```
/// use gale_grid::BufferPair;
///
/// let mut pair = BufferPair::new(2).unwrap();
/// pair.current_mut().set(1, 1, 5.0);
/// pair.swap();
/// assert_eq!(pair.previous().get(1, 1), 5.0);
/// assert_eq!(pair.current().get(1, 1), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BufferPair {
    current: GridField,
    previous: GridField,
}

impl BufferPair {
    /// Both slots zero-filled.
    pub fn new(n: usize) -> Result<Self, GridError> {
        Self::filled(n, 0.0)
    }

    /// Both slots filled with `value`.
    pub fn filled(n: usize, value: f64) -> Result<Self, GridError> {
        Ok(Self {
            current: GridField::filled(n, value)?,
            previous: GridField::filled(n, value)?,
        })
    }

    /// Interior size of both slots.
    pub fn n(&self) -> usize {
        self.current.n()
    }

    /// Exchange the current and previous slots.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.previous);
    }

    /// The current slot.
    pub fn current(&self) -> &GridField {
        &self.current
    }

    /// The current slot, mutably.
    pub fn current_mut(&mut self) -> &mut GridField {
        &mut self.current
    }

    /// The previous slot.
    pub fn previous(&self) -> &GridField {
        &self.previous
    }

    /// The previous slot, mutably.
    pub fn previous_mut(&mut self) -> &mut GridField {
        &mut self.previous
    }

    /// Borrow `(current, previous)` at once: write into the first, read the second.
    pub fn split_mut(&mut self) -> (&mut GridField, &mut GridField) {
        (&mut self.current, &mut self.previous)
    }

    /// Set every cell of both slots.
    pub fn fill(&mut self, value: f64) {
        self.current.fill(value);
        self.previous.fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_exchanges_roles() {
        let mut pair = BufferPair::new(3).unwrap();
        pair.current_mut().set(2, 2, 1.0);
        pair.previous_mut().set(2, 2, -1.0);
        pair.swap();
        assert_eq!(pair.current().get(2, 2), -1.0);
        assert_eq!(pair.previous().get(2, 2), 1.0);
        pair.swap();
        assert_eq!(pair.current().get(2, 2), 1.0);
    }

    #[test]
    fn swap_moves_storage_without_copy() {
        let mut pair = BufferPair::new(4).unwrap();
        let cur_ptr = pair.current().as_slice().as_ptr();
        let prev_ptr = pair.previous().as_slice().as_ptr();
        pair.swap();
        assert_eq!(pair.current().as_slice().as_ptr(), prev_ptr);
        assert_eq!(pair.previous().as_slice().as_ptr(), cur_ptr);
    }

    #[test]
    fn split_mut_borrows_both() {
        let mut pair = BufferPair::filled(2, 3.0).unwrap();
        let (cur, prev) = pair.split_mut();
        cur.set(1, 1, prev.get(1, 1) * 2.0);
        assert_eq!(pair.current().get(1, 1), 6.0);
    }

    #[test]
    fn fill_resets_both_slots() {
        let mut pair = BufferPair::new(2).unwrap();
        pair.current_mut().set(1, 2, 4.0);
        pair.fill(1013.25);
        assert!(pair.current().as_slice().iter().all(|&v| v == 1013.25));
        assert!(pair.previous().as_slice().iter().all(|&v| v == 1013.25));
    }

    #[test]
    fn new_propagates_grid_errors() {
        assert_eq!(BufferPair::new(0), Err(GridError::EmptyGrid));
    }
}
