use std::fmt::Debug;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{log_initialized, log_updated, Identified};
use crate::bail_service;
use crate::error::Result;
use crate::store::{PersistedStore, Storage, Subscription};

const ARRAY_SERVICE_PREFIX: &str = "array-service";

/// An ordered list of items with unique ids, persisted as one JSON array
pub struct ArrayService<T> {
    id: String,
    store: PersistedStore<Vec<T>>,
}

impl<T> ArrayService<T>
where
    T: Identified + Serialize + DeserializeOwned + Clone + Debug + 'static,
{
    /// Create the service `array-service:<name>`, loading any stored items
    pub fn new(name: &str, initial: Vec<T>, storage: Rc<dyn Storage>) -> Result<Self> {
        let id = format!("{ARRAY_SERVICE_PREFIX}:{name}");
        let store = PersistedStore::new(&id, initial, storage)?;
        log_initialized(&id);
        Ok(ArrayService { id, store })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append an item; its id must not be present yet
    pub fn add(&self, item: T) -> Result<T> {
        let mut items = self.store.get();
        if items.iter().any(|existing| existing.id() == item.id()) {
            bail_service!(&self.id, format!("item {:?} already exists", item.id()));
        }
        items.push(item.clone());
        self.commit(items)?;
        Ok(item)
    }

    /// Remove the item with `id`, returning it
    pub fn remove(&self, id: &T::Id) -> Result<T> {
        let mut items = self.store.get();
        let Some(position) = items.iter().position(|existing| existing.id() == id) else {
            bail_service!(&self.id, format!("item {:?} does not exist", id));
        };
        let removed = items.remove(position);
        self.commit(items)?;
        Ok(removed)
    }

    /// Replace the item that has the same id, keeping its position
    pub fn update(&self, item: T) -> Result<T> {
        let mut items = self.store.get();
        let Some(slot) = items.iter_mut().find(|existing| existing.id() == item.id()) else {
            bail_service!(&self.id, format!("item {:?} does not exist", item.id()));
        };
        *slot = item.clone();
        self.commit(items)?;
        Ok(item)
    }

    pub fn exists(&self, id: &T::Id) -> Option<T> {
        self.find(|item| item.id() == id)
    }

    pub fn all(&self) -> Vec<T> {
        self.store.get()
    }

    /// First item matching `predicate`
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.store.get().into_iter().find(|item| predicate(item))
    }

    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.store
            .get()
            .into_iter()
            .filter(|item| predicate(item))
            .collect()
    }

    pub fn subscribe(&self, listener: impl FnMut(&Vec<T>) + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    fn commit(&self, items: Vec<T>) -> Result<()> {
        self.store.set(items)?;
        log_updated(&self.id, &self.store.get());
        Ok(())
    }
}
