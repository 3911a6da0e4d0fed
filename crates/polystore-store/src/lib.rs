//! The storage contract every polystore backend implements.
//!
//! A [`Store`] is a named, rooted handle to a backend exposing put, get,
//! examine, list, remove, and rename over virtual slash-separated paths.
//! Backends implementing the trait can be freely mixed: a composite store
//! holds `Box<dyn Store>` children, so composites nest inside composites
//! without special-casing.
//!
//! # Contract Rules
//!
//! 1. Every operation either fully succeeds or returns one [`StoreError`]
//!    kind with no partially visible side effect.
//! 2. Objects returned by `examine` or `list_tree` are round-trip
//!    addressable: their `path()` is valid input to a subsequent call on
//!    the store (hierarchy) that produced them.
//! 3. Raw OS failures are translated into the closed [`StoreError`]
//!    vocabulary at the point of occurrence, never leaked through.
//! 4. `rename` moves within a single backend; it never degrades into a
//!    cross-backend copy.

pub mod error;
pub mod object;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use object::{mime_type_for_path, Object};
pub use traits::Store;
