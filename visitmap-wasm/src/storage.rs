use crate::interop::describe;
use visitmap::{Storage, StorageError};

/// `window.localStorage` behind the core storage trait.
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<BrowserStorage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::read("no window"))?;
        match window.local_storage() {
            Ok(Some(inner)) => Ok(BrowserStorage { inner }),
            Ok(None) => Err(StorageError::read("localStorage unavailable")),
            Err(e) => Err(StorageError::read(describe(&e))),
        }
    }
}

impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).map_err(|e| StorageError::read(describe(&e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).map_err(|e| StorageError::write(describe(&e)))
    }
}
