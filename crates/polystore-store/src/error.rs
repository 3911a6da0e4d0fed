/// Errors surfaced by store operations.
///
/// This is the closed vocabulary callers branch on regardless of backend.
/// Leaf stores translate raw `io::Error`s into these kinds at the point of
/// occurrence; the composite store propagates child errors unchanged except
/// for conditions it detects itself (unmatched route segment, cross-backend
/// rename). The enum is non-exhaustive so callers keep a default branch.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The requested object was not found.
    #[error("object not found: {0}")]
    ObjectNotFound(String),

    /// The requested directory was not found.
    #[error("directory not found: {0}")]
    DirNotFound(String),

    /// The path addresses a file where a directory was required.
    #[error("is a file, not a directory: {0}")]
    IsFile(String),

    /// The object cannot be copied between incompatible backends.
    #[error("can't copy object - incompatible stores")]
    CannotCopy,

    /// The object cannot be moved, either between incompatible backends or
    /// across filesystem boundaries.
    #[error("can't move object - incompatible stores")]
    CannotMove,

    /// The directory cannot be moved between incompatible backends.
    #[error("can't move directory - incompatible stores")]
    CannotMoveDir,

    /// The destination already exists.
    #[error("destination already exists")]
    DestinationExists,

    /// The backend cannot set the modification time.
    #[error("can't set modified time")]
    CannotSetModTime,

    /// The client-supplied checksum did not match the stored content.
    #[error("checksum mismatch: expected {expected}, computed {computed}")]
    ChecksumMismatch { expected: String, computed: String },

    /// A listing was aborted before completion.
    #[error("list aborted")]
    ListAborted,

    /// The backend can only list from its root.
    #[error("can only list from root")]
    ListOnlyRoot,

    /// I/O error from the underlying backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
