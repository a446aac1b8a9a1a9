//! Error types for grid construction and cell access.

use std::fmt;

/// Errors arising from grid construction or cell addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero interior cells.
    EmptyGrid,
    /// The interior size would overflow the addressable cell count.
    SizeTooLarge {
        /// The requested interior size.
        n: usize,
    },
    /// An interior coordinate lies outside `[0, N) x [0, N)`.
    CellOutOfBounds {
        /// The offending coordinate.
        cell: (usize, usize),
        /// Interior size of the grid.
        n: usize,
    },
    /// Raw data does not match the grid's storage length.
    LengthMismatch {
        /// Expected number of values, halo included.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
    /// Two fields taking part in one operation have different sizes.
    SizeMismatch {
        /// Interior size of the receiving field.
        expected: usize,
        /// Interior size of the other field.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one interior cell"),
            Self::SizeTooLarge { n } => write!(f, "interior size {n} is too large"),
            Self::CellOutOfBounds { cell, n } => write!(
                f,
                "cell ({}, {}) out of bounds: [0, {n}) x [0, {n})",
                cell.0, cell.1
            ),
            Self::LengthMismatch { expected, found } => {
                write!(f, "expected {expected} values, got {found}")
            }
            Self::SizeMismatch { expected, found } => {
                write!(f, "grid size mismatch: expected N={expected}, got N={found}")
            }
        }
    }
}

impl std::error::Error for GridError {}
