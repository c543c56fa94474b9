use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use nt_core::{Error, KeyValueStore, Result};
use tempfile::NamedTempFile;

/// Single JSON object file mapping keys to string values.
///
/// Nothing is cached: every `get` re-reads the file, every `set` rewrites it
/// through a uniquely named temporary sibling and a rename.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new_with_path(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::StorageUnavailable(format!(
                        "failed to create state directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        Ok(Self {
            path: path.to_path_buf(),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(Error::Io(e)),
        };
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(map)?;
        let unavailable = |e: io::Error| {
            Error::StorageUnavailable(format!("failed to write {}: {}", self.path.display(), e))
        };
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir).map_err(unavailable)?;
        temp.write_all(json.as_bytes()).map_err(unavailable)?;
        temp.persist(&self.path).map_err(|e| unavailable(e.error))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::Storage("file store lock poisoned".to_string()))?;

        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(Error::Serialization(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "State file is corrupt, starting from an empty one"
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)?;

        tracing::debug!(path = %self.path.display(), key, "Persisted value");
        Ok(())
    }
}
