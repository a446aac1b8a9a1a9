//! The storage collaborator interface.

use gale_core::FieldName;
use gale_grid::GridField;

use crate::error::StorageError;

/// A backend that can store and retrieve named fields of a world.
///
/// `load` returns `Ok(None)` when nothing has been stored under the key;
/// callers treat that as a cold start and keep their defaults. A returned
/// field has been fully decoded and verified.
pub trait FieldPersistence {
    /// Store `field` as `name` in `world`, replacing any previous value.
    fn save(&self, world: &str, name: FieldName, field: &GridField) -> Result<(), StorageError>;

    /// Retrieve `name` from `world`.
    fn load(&self, world: &str, name: FieldName) -> Result<Option<GridField>, StorageError>;
}

/// Reject world names that cannot serve as a single path component.
pub(crate) fn check_world_name(world: &str) -> Result<(), StorageError> {
    let bad = world.is_empty()
        || world == "."
        || world == ".."
        || world.contains(['/', '\\', '\0']);
    if bad {
        return Err(StorageError::InvalidWorldName {
            name: world.to_string(),
        });
    }
    Ok(())
}

/// Verify that a decoded field carries the requested name.
pub(crate) fn check_field_name(expected: FieldName, found: &str) -> Result<(), StorageError> {
    if found != expected.as_str() {
        return Err(StorageError::NameMismatch {
            expected: expected.as_str().to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_names_are_single_components() {
        assert!(check_world_name("default-world").is_ok());
        assert!(check_world_name("earth_2").is_ok());
        for bad in ["", ".", "..", "a/b", "a\\b"] {
            assert!(check_world_name(bad).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn field_name_must_match() {
        assert!(check_field_name(FieldName::Pressure, "pressure").is_ok());
        assert!(matches!(
            check_field_name(FieldName::Pressure, "velocity-u"),
            Err(StorageError::NameMismatch { .. })
        ));
    }
}
