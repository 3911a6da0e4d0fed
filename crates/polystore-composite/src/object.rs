use polystore_path::join_virtual;
use polystore_store::Object;

/// Decorator that re-prefixes a wrapped object's path.
///
/// Every accessor delegates to the inner object except [`Object::path`],
/// which is rejoined under the owning child store's name so the caller
/// still sees a composite-rooted path.
pub struct PrefixedObject {
    prefix: String,
    inner: Box<dyn Object>,
}

impl PrefixedObject {
    /// Wrap `inner` under `prefix`.
    pub fn new(prefix: impl Into<String>, inner: Box<dyn Object>) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }
}

impl Object for PrefixedObject {
    fn checksum(&self) -> String {
        self.inner.checksum()
    }

    fn id(&self) -> String {
        self.inner.id()
    }

    fn is_dir(&self) -> bool {
        self.inner.is_dir()
    }

    fn mod_time(&self) -> i64 {
        self.inner.mod_time()
    }

    fn mime_type(&self) -> String {
        self.inner.mime_type()
    }

    fn path(&self) -> String {
        join_virtual(&self.prefix, &self.inner.path())
    }

    fn size(&self) -> u64 {
        self.inner.size()
    }

    fn optional(&self) -> Option<serde_json::Value> {
        self.inner.optional()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeObject {
        path: String,
        is_dir: bool,
    }

    impl Object for FakeObject {
        fn checksum(&self) -> String {
            "blake3:aa".to_string()
        }
        fn id(&self) -> String {
            "fake-id".to_string()
        }
        fn is_dir(&self) -> bool {
            self.is_dir
        }
        fn mod_time(&self) -> i64 {
            1234
        }
        fn mime_type(&self) -> String {
            "text/plain".to_string()
        }
        fn path(&self) -> String {
            self.path.clone()
        }
        fn size(&self) -> u64 {
            42
        }
    }

    #[test]
    fn path_is_prefixed() {
        let obj = PrefixedObject::new(
            "photos",
            Box::new(FakeObject {
                path: "2021/img.jpg".to_string(),
                is_dir: false,
            }),
        );
        assert_eq!(obj.path(), "photos/2021/img.jpg");
    }

    #[test]
    fn empty_inner_path_yields_prefix() {
        let obj = PrefixedObject::new(
            "photos",
            Box::new(FakeObject {
                path: String::new(),
                is_dir: true,
            }),
        );
        assert_eq!(obj.path(), "photos");
    }

    #[test]
    fn other_accessors_delegate() {
        let obj = PrefixedObject::new(
            "docs",
            Box::new(FakeObject {
                path: "a.txt".to_string(),
                is_dir: false,
            }),
        );
        assert_eq!(obj.checksum(), "blake3:aa");
        assert_eq!(obj.id(), "fake-id");
        assert_eq!(obj.mod_time(), 1234);
        assert_eq!(obj.mime_type(), "text/plain");
        assert_eq!(obj.size(), 42);
        assert!(!obj.is_dir());
        assert!(obj.optional().is_none());
    }
}
