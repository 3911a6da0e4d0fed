use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for a [`LocalStore`](crate::LocalStore).
///
/// Consumed once at construction; the store holds no other state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalConfig {
    /// Directory under which all of this store's physical paths live.
    pub root_dir: PathBuf,
    /// Directory for staging files. Defaults to the process-wide temp
    /// directory when unset. Keep it on the same filesystem as `root_dir`
    /// so the commit rename stays atomic.
    pub temp_dir: Option<PathBuf>,
    /// Verify client-supplied checksums before committing writes.
    pub verify_checksums: bool,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            temp_dir: None,
            verify_checksums: false,
        }
    }
}
