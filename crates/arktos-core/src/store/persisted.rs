//! A [`Writable`] mirrored into [`Storage`] as JSON

use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::storage::Storage;
use super::writable::{Subscription, Writable};
use crate::error::{ArktosError, Result};

/// Observable value persisted under a storage key.
///
/// Construction loads the stored value, or falls back to the default, and
/// writes it back. Every `set`/`update` writes to storage before listeners
/// are notified.
pub struct PersistedStore<T> {
    key: String,
    value: Writable<T>,
    storage: Rc<dyn Storage>,
}

impl<T> Clone for PersistedStore<T> {
    fn clone(&self) -> Self {
        PersistedStore {
            key: self.key.clone(),
            value: self.value.clone(),
            storage: Rc::clone(&self.storage),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistedStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedStore")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

impl<T> PersistedStore<T>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    #[tracing::instrument(skip(default, storage))]
    pub fn new(key: &str, default: T, storage: Rc<dyn Storage>) -> Result<Self> {
        let initial = match storage.get_item(key)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|source| ArktosError::CorruptStoredValue {
                    key: key.to_string(),
                    source,
                })?
            }
            None => {
                tracing::debug!("no stored value, using default");
                default
            }
        };

        let store = PersistedStore {
            key: key.to_string(),
            value: Writable::new(initial),
            storage,
        };
        store.persist(&store.value.get())?;
        Ok(store)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> T {
        self.value.get()
    }

    pub fn set(&self, value: T) -> Result<()> {
        self.persist(&value)?;
        self.value.set(value);
        Ok(())
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) -> Result<()> {
        let next = f(&self.value.get());
        self.set(next)
    }

    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
        self.value.subscribe(listener)
    }

    fn persist(&self, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.storage.set_item(&self.key, &raw)
    }
}
