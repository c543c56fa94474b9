use crate::Result;

/// Device-local key/value persistence.
///
/// Reads and writes are synchronous and run to completion; a `set` either
/// replaces the whole value or fails without a visible partial write.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
