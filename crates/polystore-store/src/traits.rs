use std::io::Read;

use crate::error::StoreResult;
use crate::object::Object;

/// Named, rooted handle to a storage backend.
///
/// All implementations must satisfy these invariants:
/// - Operations are synchronous and hold no backend state between calls;
///   concurrent calls through `&self` are safe.
/// - A write made visible by `put_object` is complete: no reader ever
///   observes a partially written object at the target path.
/// - Paths are virtual, slash-separated, and interpreted relative to the
///   store's root. A caller can never address anything outside that root.
/// - `name()` is the store's routing key inside any composite that contains
///   it; uniqueness among siblings is the constructor's responsibility.
pub trait Store: Send + Sync {
    /// The store's name, used as its routing key in a composite.
    fn name(&self) -> &str;

    /// The store's root identity.
    fn root(&self) -> &str;

    /// Consume `reader` fully and store its content at `path`.
    ///
    /// `checksum` is an optional client-supplied `"kind:hex"` pair. When the
    /// kind is recognized and the backend verifies checksums, the computed
    /// digest of the written bytes must match before the write becomes
    /// visible; a mismatch fails without committing.
    fn put_object(
        &self,
        reader: &mut dyn Read,
        path: &str,
        checksum: Option<&str>,
    ) -> StoreResult<()>;

    /// Open the object at `path` for reading.
    ///
    /// The caller owns the returned stream and must drop it on every exit
    /// path to release the underlying resource.
    fn get_object(&self, path: &str) -> StoreResult<Box<dyn Read + Send>>;

    /// Metadata-only lookup; no content is read.
    fn examine(&self, path: &str) -> StoreResult<Box<dyn Object>>;

    /// List one level of children of the directory at `path`, sorted by
    /// name. Fails if `path` addresses a non-directory.
    fn list_tree(&self, path: &str) -> StoreResult<Vec<Box<dyn Object>>>;

    /// Delete the object at `path`, or the entire subtree if it is a
    /// directory. Succeeds if the target is already absent.
    fn remove(&self, path: &str) -> StoreResult<()>;

    /// Atomically move `source` to `target` within this backend.
    ///
    /// Never degrades into a copy: moves across incompatible backends or
    /// filesystem boundaries fail with `CannotMove`.
    fn rename(&self, source: &str, target: &str) -> StoreResult<()>;
}
