use crate::error::StorageError;
use std::collections::HashMap;

/// Durable key-value storage for small JSON strings.
///
/// Calls are synchronous; the browser backend wraps `window.localStorage`.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage, used natively and in tests.
///
/// `set_read_only` and `writes` exist for fault injection and write
/// accounting in tests; the browser backend has no equivalent.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    writes: usize,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut s = Self::default();
        s.items.insert(key.to_string(), value.to_string());
        s
    }

    /// Test hook: while set, every `set_item` fails the way a full or
    /// disabled `localStorage` quota does. Reads keep working.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    /// Test hook: number of successful writes so far, for asserting that a
    /// path did or did not persist.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::write("storage is read-only"));
        }
        self.items.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
