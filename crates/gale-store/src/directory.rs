//! File-backed persistence: one file per field.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use gale_core::FieldName;
use gale_grid::GridField;

use crate::codec::{decode_field, encode_field};
use crate::error::StorageError;
use crate::persistence::{check_field_name, check_world_name, FieldPersistence};
use crate::FILE_EXTENSION;

/// Stores each field at `<root>/<world>/<field>.gale`.
///
/// Writes go to a temporary sibling file that is renamed into place, so a
/// crash mid-save leaves the previous file intact.
#[derive(Clone, Debug)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// A store rooted at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `name` in `world`.
    pub fn path_for(&self, world: &str, name: FieldName) -> Result<PathBuf, StorageError> {
        check_world_name(world)?;
        Ok(self
            .root
            .join(world)
            .join(format!("{}.{FILE_EXTENSION}", name.as_str())))
    }
}

impl FieldPersistence for DirectoryStore {
    fn save(&self, world: &str, name: FieldName, field: &GridField) -> Result<(), StorageError> {
        let path = self.path_for(world, name)?;
        let dir = self.root.join(world);
        fs::create_dir_all(&dir)?;

        let tmp = path.with_extension(format!("{FILE_EXTENSION}.tmp"));
        {
            let mut w = BufWriter::new(File::create(&tmp)?);
            encode_field(&mut w, name.as_str(), field)?;
            w.flush()?;
        }
        fs::rename(&tmp, &path)?;
        log::debug!("saved {name} for world '{world}' to {}", path.display());
        Ok(())
    }

    fn load(&self, world: &str, name: FieldName) -> Result<Option<GridField>, StorageError> {
        let path = self.path_for(world, name)?;
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no stored {name} for world '{world}'");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let mut r = BufReader::new(file);
        let (stored_name, field) = decode_field(&mut r)?;
        check_field_name(name, &stored_name)?;
        Ok(Some(field))
    }
}
