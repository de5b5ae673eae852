use crate::catalog::Catalog;
use crate::error::{StorageError, StoreError};
use crate::storage::Storage;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Persisted set of visited municipality ids.
///
/// The single source of truth for visited state. `load`, `toggle` and `clear`
/// are the only ways to change it, and each change is written through to the
/// backing [`Storage`] before returning.
pub struct VisitedStore<S: Storage> {
    catalog: Rc<Catalog>,
    storage: S,
    key: String,
    visited: BTreeSet<String>,
}

impl<S: Storage> VisitedStore<S> {
    /// Read the stored id list under `key`.
    ///
    /// Missing data yields an empty set. Data that is not a JSON array of
    /// strings is discarded and overwritten with `[]`. Ids unknown to the
    /// catalog are dropped and the filtered list is written back.
    pub fn load(catalog: Rc<Catalog>, storage: S, key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        let raw = storage.get_item(&key)?;
        let mut store = VisitedStore { catalog, storage, key, visited: BTreeSet::new() };
        let Some(raw) = raw else {
            log::info!("no visited state under '{}', starting empty", store.key);
            return Ok(store);
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => {
                let stored = ids.len();
                for id in ids {
                    if store.catalog.contains(&id) {
                        store.visited.insert(id);
                    }
                }
                if store.visited.len() != stored {
                    log::warn!(
                        "dropped {} stale visited entries under '{}'",
                        stored - store.visited.len(),
                        store.key
                    );
                    store.persist()?;
                }
            }
            Err(e) => {
                log::warn!("discarding malformed visited state under '{}': {}", store.key, e);
                store.persist()?;
            }
        }
        log::info!("loaded {} visited of {}", store.visited.len(), store.catalog.len());
        Ok(store)
    }

    /// Flip membership of `id` and persist. Returns the new membership.
    ///
    /// Unknown ids leave the set and storage untouched. A failed write rolls
    /// the in-memory change back.
    pub fn toggle(&mut self, id: &str) -> Result<bool, StoreError> {
        if !self.catalog.contains(id) {
            return Err(StoreError::UnknownMunicipality(id.to_string()));
        }
        let now_visited = if self.visited.remove(id) {
            false
        } else {
            self.visited.insert(id.to_string());
            true
        };
        if let Err(e) = self.persist() {
            if now_visited {
                self.visited.remove(id);
            } else {
                self.visited.insert(id.to_string());
            }
            return Err(e.into());
        }
        log::debug!("toggled '{}' -> visited={}", id, now_visited);
        Ok(now_visited)
    }

    /// Forget every visited id and persist the empty list.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        let prev = std::mem::take(&mut self.visited);
        if let Err(e) = self.persist() {
            self.visited = prev;
            return Err(e.into());
        }
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.visited.contains(id)
    }

    pub fn count(&self) -> usize {
        self.visited.len()
    }

    /// Visited ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.visited.iter().map(String::as_str)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn catalog(&self) -> &Rc<Catalog> {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// The persisted form: a JSON array of ids.
    pub fn to_json(&self) -> String {
        serde_json::Value::from(self.visited.iter().cloned().collect::<Vec<_>>()).to_string()
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = self.to_json();
        log::debug!("persist '{}' = {}", self.key, json);
        self.storage.set_item(&self.key, &json)
    }
}
