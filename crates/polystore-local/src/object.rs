use std::fs::Metadata;
use std::time::UNIX_EPOCH;

use polystore_store::{mime_type_for_path, Object};

/// Metadata snapshot of one filesystem entry, addressed by virtual path.
#[derive(Clone, Debug)]
pub struct LocalObject {
    metadata: Metadata,
    path: String,
}

impl LocalObject {
    /// Build an object from filesystem metadata and the virtual path it
    /// was examined under.
    pub fn new(metadata: Metadata, path: impl Into<String>) -> Self {
        Self {
            metadata,
            path: path.into(),
        }
    }
}

impl Object for LocalObject {
    fn checksum(&self) -> String {
        // The local backend does not track content checksums.
        String::new()
    }

    fn id(&self) -> String {
        self.path.clone()
    }

    fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    fn mod_time(&self) -> i64 {
        self.metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }

    fn mime_type(&self) -> String {
        mime_type_for_path(&self.path)
    }

    fn path(&self) -> String {
        self.path.clone()
    }

    fn size(&self) -> u64 {
        self.metadata.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn file_object_fields() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("img.jpg");
        let mut f = fs::File::create(&file_path).unwrap();
        f.write_all(b"not really a jpeg").unwrap();

        let obj = LocalObject::new(fs::metadata(&file_path).unwrap(), "photos/img.jpg");
        assert!(!obj.is_dir());
        assert_eq!(obj.size(), 17);
        assert_eq!(obj.path(), "photos/img.jpg");
        assert_eq!(obj.id(), "photos/img.jpg");
        assert_eq!(obj.mime_type(), "image/jpeg");
        assert_eq!(obj.checksum(), "");
        assert!(obj.mod_time() > 0);
        assert!(obj.optional().is_none());
    }

    #[test]
    fn directory_object_fields() {
        let dir = tempfile::tempdir().unwrap();
        let obj = LocalObject::new(fs::metadata(dir.path()).unwrap(), "");
        assert!(obj.is_dir());
        assert_eq!(obj.path(), "");
        assert_eq!(obj.mime_type(), "");
    }
}
