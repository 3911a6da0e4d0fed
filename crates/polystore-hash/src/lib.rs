//! Streaming content hashing and client checksum parsing.
//!
//! Stores accept an optional client-supplied checksum in `"kind:hex"` form
//! (e.g. `"sha256:ba78..."`). [`Checksum::parse`] turns that string into a
//! typed value — an unrecognized kind yields `None`, which stores treat as
//! "skip verification". [`StreamHasher`] computes every supported digest in
//! one pass over the data, so the store can verify whichever kind the
//! client named without re-reading the stream.

pub mod checksum;
pub mod stream;

pub use checksum::{Checksum, HashKind, UnknownHashKind};
pub use stream::{hash_reader, HashingReader, StreamHasher};
