//! Error types for field persistence.

use std::fmt;
use std::io;

use gale_grid::GridError;

/// Errors that can occur while saving or loading a field.
#[derive(Debug)]
pub enum StorageError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The data does not start with the expected `b"GALE"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the data.
        found: u8,
    },
    /// The data ended before a complete field was read.
    Truncated,
    /// The data is structurally invalid.
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The stored values do not hash to the stored checksum.
    ChecksumMismatch {
        /// Checksum recorded in the data.
        stored: u64,
        /// Checksum computed from the decoded values.
        computed: u64,
    },
    /// The stored grid size differs from the receiving grid.
    SizeMismatch {
        /// Interior size of the receiving grid.
        expected: usize,
        /// Interior size found in the data.
        found: usize,
    },
    /// The stored field name differs from the one requested.
    NameMismatch {
        /// The requested field name.
        expected: String,
        /// The name found in the data.
        found: String,
    },
    /// A world name cannot be used as a storage key.
    InvalidWorldName {
        /// The rejected name.
        name: String,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"GALE\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::Truncated => write!(f, "field data is truncated"),
            Self::Malformed { detail } => write!(f, "malformed field data: {detail}"),
            Self::ChecksumMismatch { stored, computed } => write!(
                f,
                "checksum mismatch: stored={stored:#018x}, computed={computed:#018x}"
            ),
            Self::SizeMismatch { expected, found } => {
                write!(f, "grid size mismatch: expected N={expected}, found N={found}")
            }
            Self::NameMismatch { expected, found } => {
                write!(f, "expected field '{expected}', found '{found}'")
            }
            Self::InvalidWorldName { name } => write!(f, "invalid world name '{name}'"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Self::Truncated
        } else {
            Self::Io(e)
        }
    }
}

impl From<GridError> for StorageError {
    fn from(e: GridError) -> Self {
        Self::Malformed {
            detail: e.to_string(),
        }
    }
}
