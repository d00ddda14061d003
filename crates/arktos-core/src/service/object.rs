use std::fmt::{Debug, Display};
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{log_initialized, log_updated};
use crate::bail_service;
use crate::error::Result;
use crate::store::{PersistedStore, Storage, Subscription};

const OBJECT_SERVICE_PREFIX: &str = "object-service";

/// A single optional value, persisted under the service id
pub struct ObjectService<T> {
    id: String,
    store: PersistedStore<Option<T>>,
}

impl<T> ObjectService<T>
where
    T: Serialize + DeserializeOwned + Clone + Debug + 'static,
{
    /// Create the service `object-service:<id>`, loading any stored value
    pub fn new(id: impl Display, initial: Option<T>, storage: Rc<dyn Storage>) -> Result<Self> {
        let id = format!("{OBJECT_SERVICE_PREFIX}:{id}");
        let store = PersistedStore::new(&id, initial, storage)?;
        log_initialized(&id);
        Ok(ObjectService { id, store })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Store `item`; fails when a value is already present
    pub fn add(&self, item: T) -> Result<T> {
        if self.store.get().is_some() {
            bail_service!(&self.id, "item already exists");
        }
        self.set(item.clone())?;
        Ok(item)
    }

    /// Replace the current value; fails when there is none
    pub fn update(&self, item: T) -> Result<T> {
        if self.store.get().is_none() {
            bail_service!(&self.id, "no item to update");
        }
        self.set(item.clone())?;
        Ok(item)
    }

    pub fn get(&self) -> Option<T> {
        self.store.get()
    }

    /// Store `item` unconditionally
    pub fn set(&self, item: T) -> Result<()> {
        self.store.set(Some(item))?;
        log_updated(&self.id, &self.store.get());
        Ok(())
    }

    pub fn subscribe(&self, listener: impl FnMut(&Option<T>) + 'static) -> Subscription {
        self.store.subscribe(listener)
    }
}
