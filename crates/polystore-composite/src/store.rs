use std::io::Read;

use tracing::debug;

use polystore_store::{Object, Store, StoreError, StoreResult};

use crate::object::PrefixedObject;

/// Store that aggregates named child stores into one virtual namespace.
///
/// The child list is the routing table, read-only after construction: the
/// first path segment selects the child, the remainder is forwarded. An
/// unmatched first segment is object-not-found; requests never fall
/// through to a default child. With duplicate child names the first match
/// wins; keeping names unique is the constructor's responsibility.
pub struct CompositeStore {
    name: String,
    root: String,
    children: Vec<Box<dyn Store>>,
}

impl CompositeStore {
    /// Create a composite named `name` with root identity `root` over the
    /// given ordered children.
    pub fn new(
        name: impl Into<String>,
        root: impl Into<String>,
        children: Vec<Box<dyn Store>>,
    ) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            children,
        }
    }

    /// Route a path to `(child, remainder)`.
    ///
    /// The path is trimmed of whitespace and surrounding slashes, then
    /// split at the first `/`. An empty remainder addresses the child's
    /// own root.
    fn resolve<'a>(&self, path: &'a str) -> StoreResult<(&dyn Store, &'a str)> {
        let trimmed = path.trim().trim_matches('/');
        let (head, rest) = match trimmed.split_once('/') {
            Some((head, rest)) => (head, rest),
            None => (trimmed, ""),
        };
        if head.is_empty() {
            return Err(StoreError::ObjectNotFound(path.to_string()));
        }
        self.children
            .iter()
            .find(|child| child.name() == head)
            .map(|child| (child.as_ref(), rest))
            .ok_or_else(|| StoreError::ObjectNotFound(path.to_string()))
    }

    /// Synthesized root listing: each child store appears as one virtual
    /// directory entry named after it.
    fn list_root(&self) -> StoreResult<Vec<Box<dyn Object>>> {
        let mut objects: Vec<Box<dyn Object>> = Vec::new();
        for child in &self.children {
            let object = child.examine("")?;
            objects.push(Box::new(PrefixedObject::new(child.name(), object)));
        }
        Ok(objects)
    }
}

impl Store for CompositeStore {
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
        let (child, rest) = self.resolve(path)?;
        debug!(path, child = child.name(), "route put");
        child.put_object(reader, rest, checksum)
    }

    fn get_object(&self, path: &str) -> StoreResult<Box<dyn Read + Send>> {
        let (child, rest) = self.resolve(path)?;
        debug!(path, child = child.name(), "route get");
        child.get_object(rest)
    }

    fn examine(&self, path: &str) -> StoreResult<Box<dyn Object>> {
        let (child, rest) = self.resolve(path)?;
        let object = child.examine(rest)?;
        Ok(Box::new(PrefixedObject::new(child.name(), object)))
    }

    fn list_tree(&self, path: &str) -> StoreResult<Vec<Box<dyn Object>>> {
        if path.is_empty() {
            return self.list_root();
        }
        let (child, rest) = self.resolve(path)?;
        let objects = child.list_tree(rest)?;
        debug!(path, child = child.name(), entries = objects.len(), "route list");
        Ok(objects
            .into_iter()
            .map(|object| Box::new(PrefixedObject::new(child.name(), object)) as Box<dyn Object>)
            .collect())
    }

    fn remove(&self, path: &str) -> StoreResult<()> {
        let (child, rest) = self.resolve(path)?;
        debug!(path, child = child.name(), "route remove");
        child.remove(rest)
    }

    fn rename(&self, source: &str, target: &str) -> StoreResult<()> {
        let (source_child, source_rest) = self.resolve(source)?;
        let (target_child, target_rest) = self.resolve(target)?;
        // A move is only a move inside a single backend; crossing backends
        // never degrades into copy+delete.
        if source_child.name() != target_child.name() {
            return Err(StoreError::CannotMove);
        }
        debug!(source, target, child = source_child.name(), "route rename");
        source_child.rename(source_rest, target_rest)
    }
}

impl std::fmt::Debug for CompositeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.children.iter().map(|c| c.name()).collect();
        f.debug_struct("CompositeStore")
            .field("name", &self.name)
            .field("root", &self.root)
            .field("children", &names)
            .finish()
    }
}
