//! Per-field save and load between the field store and a persistence backend.

use gale_core::FieldName;
use gale_store::{FieldPersistence, StorageError};
use indexmap::IndexMap;

use crate::store::FieldStore;

/// What happened to one field during a save or load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The field was written.
    Saved,
    /// The field was read and replaced the in-memory value.
    Loaded,
    /// Nothing was stored; the in-memory value was kept.
    Missing,
}

/// One result per persisted field, in [`FieldName::PERSISTED`] order.
#[derive(Debug, Default)]
pub struct PersistReport {
    results: IndexMap<FieldName, Result<PersistOutcome, StorageError>>,
}

impl PersistReport {
    /// True if no field failed.
    pub fn is_ok(&self) -> bool {
        self.results.values().all(Result::is_ok)
    }

    /// Result for one field.
    pub fn get(&self, name: FieldName) -> Option<&Result<PersistOutcome, StorageError>> {
        self.results.get(&name)
    }

    /// Every result, in order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &Result<PersistOutcome, StorageError>)> {
        self.results.iter().map(|(&name, r)| (name, r))
    }

    /// Fields that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (FieldName, &StorageError)> {
        self.results
            .iter()
            .filter_map(|(&name, r)| r.as_ref().err().map(|e| (name, e)))
    }

    /// Number of fields reported.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

pub(crate) fn save_fields(
    store: &FieldStore,
    world: &str,
    backend: &dyn FieldPersistence,
) -> PersistReport {
    let mut report = PersistReport::default();
    for name in FieldName::PERSISTED {
        let result = backend
            .save(world, name, store.field(name))
            .map(|()| PersistOutcome::Saved);
        report.results.insert(name, result);
    }
    report
}

pub(crate) fn load_fields(
    store: &mut FieldStore,
    world: &str,
    backend: &dyn FieldPersistence,
) -> PersistReport {
    let mut report = PersistReport::default();
    for name in FieldName::PERSISTED {
        let result = backend.load(world, name).and_then(|loaded| match loaded {
            None => Ok(PersistOutcome::Missing),
            Some(field) if field.n() != store.n() => Err(StorageError::SizeMismatch {
                expected: store.n(),
                found: field.n(),
            }),
            Some(field) => {
                store.field_mut(name).copy_from(&field)?;
                Ok(PersistOutcome::Loaded)
            }
        });
        report.results.insert(name, result);
    }
    report
}
