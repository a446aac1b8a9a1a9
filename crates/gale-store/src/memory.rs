//! In-memory persistence backend.

use std::sync::{Mutex, MutexGuard};

use gale_core::FieldName;
use gale_grid::GridField;
use indexmap::IndexMap;

use crate::codec::{decode_field, encode_field_to_vec};
use crate::error::StorageError;
use crate::persistence::{check_field_name, check_world_name, FieldPersistence};

/// Keeps encoded fields in memory, keyed by world and field name.
///
/// Fields go through the same codec as [`DirectoryStore`](crate::DirectoryStore),
/// so a round trip through this store exercises the on-disk format.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<IndexMap<(String, FieldName), Vec<u8>>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, IndexMap<(String, FieldName), Vec<u8>>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of stored fields across all worlds.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// True if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Encoded bytes for one field, if stored.
    pub fn raw(&self, world: &str, name: FieldName) -> Option<Vec<u8>> {
        self.entries().get(&(world.to_string(), name)).cloned()
    }

    /// Replace the encoded bytes for one field.
    ///
    /// Bypasses encoding, so it can plant corrupt data for testing.
    pub fn insert_raw(&self, world: &str, name: FieldName, bytes: Vec<u8>) {
        self.entries().insert((world.to_string(), name), bytes);
    }
}

impl FieldPersistence for MemoryStore {
    fn save(&self, world: &str, name: FieldName, field: &GridField) -> Result<(), StorageError> {
        check_world_name(world)?;
        let bytes = encode_field_to_vec(name.as_str(), field)?;
        self.entries().insert((world.to_string(), name), bytes);
        Ok(())
    }

    fn load(&self, world: &str, name: FieldName) -> Result<Option<GridField>, StorageError> {
        check_world_name(world)?;
        let Some(bytes) = self.raw(world, name) else {
            return Ok(None);
        };
        let (stored_name, field) = decode_field(&mut bytes.as_slice())?;
        check_field_name(name, &stored_name)?;
        Ok(Some(field))
    }
}
