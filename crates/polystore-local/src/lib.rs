//! Local filesystem leaf store.
//!
//! Maps virtual paths onto physical paths confined under a root directory
//! and performs the actual content I/O. Writes are staged into a temp-file
//! and committed with a single atomic rename, so a concurrent reader of the
//! target path sees either nothing or the complete new content, never a
//! partial file.

pub mod config;
pub mod object;
pub mod store;

pub use config::LocalConfig;
pub use object::LocalObject;
pub use store::LocalStore;
