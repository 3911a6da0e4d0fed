use std::env;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use polystore_hash::{Checksum, HashingReader};
use polystore_path::{confine, join_virtual};
use polystore_store::{Object, Store, StoreError, StoreResult};

use crate::config::LocalConfig;
use crate::object::LocalObject;

/// Leaf store backed by a directory on the local filesystem.
///
/// Every caller-supplied path is confined under the store's root directory
/// before any filesystem call. Writes are staged in the temp directory and
/// committed with a single rename; the target path never holds a partial
/// file.
pub struct LocalStore {
    name: String,
    root: String,
    root_dir: PathBuf,
    temp_dir: PathBuf,
    verify_checksums: bool,
}

impl LocalStore {
    /// Create a store named `name` with root identity `root`.
    ///
    /// The physical root is `config.root_dir` joined (confined) with
    /// `root`, so even the root identity cannot escape the configured
    /// directory.
    pub fn new(name: impl Into<String>, root: impl Into<String>, config: LocalConfig) -> Self {
        let root = root.into();
        let root_dir = confine(&config.root_dir, &root);
        Self {
            name: name.into(),
            root,
            root_dir,
            temp_dir: config.temp_dir.unwrap_or_else(env::temp_dir),
            verify_checksums: config.verify_checksums,
        }
    }

    /// Confined physical path for a virtual path.
    fn local_path(&self, path: &str) -> PathBuf {
        confine(&self.root_dir, path)
    }

    /// Map `NotFound` to the contract's object-not-found kind, everything
    /// else to a generic I/O error.
    fn translate(err: io::Error, path: &str) -> StoreError {
        if err.kind() == io::ErrorKind::NotFound {
            StoreError::ObjectNotFound(path.to_string())
        } else {
            StoreError::Io(err)
        }
    }
}

impl Store for LocalStore {
    fn name(&self) -> &str {
        &self.name
    }

    fn root(&self) -> &str {
        &self.root
    }

    fn put_object(
        &self,
        reader: &mut dyn Read,
        path: &str,
        checksum: Option<&str>,
    ) -> StoreResult<()> {
        let mut staging = NamedTempFile::new_in(&self.temp_dir)?;

        // Only a recognized "kind:hex" pair triggers verification; anything
        // else streams straight through.
        let expected = if self.verify_checksums {
            checksum.and_then(Checksum::parse)
        } else {
            None
        };

        let written = if let Some(expected) = expected {
            let mut hashing = HashingReader::new(&mut *reader);
            let written = io::copy(&mut hashing, staging.as_file_mut())?;
            let digests = hashing.finalize();
            let computed = digests.get(&expected.kind).cloned().unwrap_or_default();
            if computed != expected.value {
                warn!(path, kind = %expected.kind, "checksum mismatch, aborting put");
                return Err(StoreError::ChecksumMismatch {
                    expected: expected.value,
                    computed,
                });
            }
            written
        } else {
            io::copy(reader, staging.as_file_mut())?
        };

        // Single rename makes the write visible. A missing parent surfaces
        // as NotFound here.
        let target = self.local_path(path);
        staging.persist(&target).map_err(|e| {
            if e.error.kind() == io::ErrorKind::NotFound {
                StoreError::ObjectNotFound(path.to_string())
            } else {
                StoreError::Io(e.error)
            }
        })?;

        debug!(path, bytes = written, "put object");
        Ok(())
    }

    fn get_object(&self, path: &str) -> StoreResult<Box<dyn Read + Send>> {
        let file = File::open(self.local_path(path)).map_err(|e| Self::translate(e, path))?;
        debug!(path, "get object");
        Ok(Box::new(file))
    }

    fn examine(&self, path: &str) -> StoreResult<Box<dyn Object>> {
        let metadata = fs::metadata(self.local_path(path)).map_err(|e| Self::translate(e, path))?;
        Ok(Box::new(LocalObject::new(metadata, path)))
    }

    fn list_tree(&self, path: &str) -> StoreResult<Vec<Box<dyn Object>>> {
        let local_path = self.local_path(path);
        let metadata = fs::metadata(&local_path).map_err(|e| Self::translate(e, path))?;
        if !metadata.is_dir() {
            return Err(StoreError::IsFile(path.to_string()));
        }

        let mut objects: Vec<Box<dyn Object>> = Vec::new();
        for entry in fs::read_dir(&local_path).map_err(|e| Self::translate(e, path))? {
            // An entry can vanish between read_dir and metadata; that race
            // surfaces through the same translation as every other lookup.
            let entry = entry.map_err(|e| Self::translate(e, path))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            // The entry's path stays virtual: parent path + base name, not
            // the physical path.
            let child_path = join_virtual(path, &name);
            let metadata = entry.metadata().map_err(|e| Self::translate(e, path))?;
            objects.push(Box::new(LocalObject::new(metadata, child_path)));
        }
        objects.sort_by_key(|o| o.path());

        debug!(path, entries = objects.len(), "list tree");
        Ok(objects)
    }

    fn remove(&self, path: &str) -> StoreResult<()> {
        let local_path = self.local_path(path);
        match fs::metadata(&local_path) {
            // Already absent counts as removed.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
            Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(&local_path)?,
            Ok(_) => fs::remove_file(&local_path)?,
        }
        debug!(path, "remove");
        Ok(())
    }

    fn rename(&self, source: &str, target: &str) -> StoreResult<()> {
        let source_local = self.local_path(source);
        let target_local = self.local_path(target);
        fs::rename(&source_local, &target_local).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::ObjectNotFound(source.to_string()),
            io::ErrorKind::CrossesDevices => StoreError::CannotMove,
            _ => StoreError::Io(e),
        })?;
        debug!(source, target, "rename");
        Ok(())
    }
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore")
            .field("name", &self.name)
            .field("root", &self.root)
            .field("root_dir", &self.root_dir)
            .finish()
    }
}
