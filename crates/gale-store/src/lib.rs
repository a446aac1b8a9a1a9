//! Field persistence for Gale simulations.
//!
//! A world's state is saved one field at a time. Each field is encoded
//! with a small binary codec and handed to a [`FieldPersistence`]
//! backend keyed by world name and [`FieldName`](gale_core::FieldName).
//!
//! # Backends
//!
//! - [`DirectoryStore`] writes `<root>/<world>/<field>.gale` files
//! - [`MemoryStore`] keeps encoded fields in memory (tests, tools)
//!
//! # Format
//!
//! ```text
//! [MAGIC "GALE"] [VERSION u8] [name: u32 len + UTF-8]
//! [N u32] [(N+2)² × f64 LE] [FNV-1a u64 over the values]
//! ```
//!
//! Values are stored halo included, in grid order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod directory;
pub mod error;
pub mod hash;
pub mod memory;
pub mod persistence;

pub use directory::DirectoryStore;
pub use error::StorageError;
pub use hash::field_hash;
pub use memory::MemoryStore;
pub use persistence::FieldPersistence;

/// Magic bytes at the start of every encoded field.
pub const MAGIC: [u8; 4] = *b"GALE";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;

/// File extension used by [`DirectoryStore`].
pub const FILE_EXTENSION: &str = "gale";
