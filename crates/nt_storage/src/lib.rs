use std::path::Path;
use std::sync::Arc;

use nt_core::{Error, KeyValueStore, Result};

pub mod backends;
pub mod bookmarks;
pub mod preferences;

pub use backends::*;
pub use bookmarks::{BookmarkStore, BOOKMARKS_KEY};
pub use preferences::{PreferenceStore, Preferences};

/// Default state file for the `file` backend, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = "nt_state.json";

/// Open a persistence backend by name: `memory` or `file`.
pub fn create_storage(kind: &str, path: Option<&Path>) -> Result<Arc<dyn KeyValueStore>> {
    match kind {
        "memory" => Ok(Arc::new(MemoryStore::new())),
        "file" => {
            let path = path.unwrap_or_else(|| Path::new(DEFAULT_STATE_FILE));
            tracing::debug!(path = %path.display(), "Opening file storage");
            Ok(Arc::new(FileStore::new_with_path(path)?))
        }
        other => Err(Error::Storage(format!(
            "Unknown storage backend '{}'. Available: memory, file",
            other
        ))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_storage, BookmarkStore, PreferenceStore, Preferences};
}
