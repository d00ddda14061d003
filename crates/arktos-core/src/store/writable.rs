//! Observable value with explicit subscriptions
//!
//! A [`Writable`] holds one value and a list of listeners. Listeners run
//! synchronously, once on subscribe with the current value and again after
//! every `set`/`update`. Clones share the same value and listeners.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    value: T,
    listeners: Vec<(u64, Listener<T>)>,
    next_id: u64,
}

pub struct Writable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Writable {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Writable")
            .field("value", &inner.value)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl<T: Default + Clone + 'static> Default for Writable<T> {
    fn default() -> Self {
        Writable::new(T::default())
    }
}

impl<T: Clone + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Writable {
            inner: Rc::new(RefCell::new(Inner {
                value,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value and notify every listener
    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    /// Derive the next value from the current one
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.inner.borrow().value);
        self.set(next);
    }

    /// Register a listener. It is called immediately with the current value.
    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
        let listener: Listener<T> = Rc::new(RefCell::new(listener));
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::clone(&listener)));
            (id, inner.value.clone())
        };

        (listener.borrow_mut())(&current);

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .borrow_mut()
                    .listeners
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self) {
        // Snapshot so listeners may read or write the store while running
        let (value, listeners) = {
            let inner = self.inner.borrow();
            let listeners: Vec<Listener<T>> =
                inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
            (inner.value.clone(), listeners)
        };

        for listener in listeners {
            // A listener that triggers its own store again is not re-entered
            if let Ok(mut listener) = listener.try_borrow_mut() {
                listener(&value);
            }
        }
    }
}

/// Handle returned by `subscribe`. Dropping it keeps the listener registered.
#[must_use = "call `unsubscribe` to stop receiving values"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(cancel: impl FnOnce() + 'static) -> Self {
        Subscription {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Combine several subscriptions into one handle
    pub fn all(subscriptions: Vec<Subscription>) -> Self {
        Subscription::new(move || {
            for subscription in subscriptions {
                subscription.unsubscribe();
            }
        })
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(&T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value: &T| sink.borrow_mut().push(value.clone()))
    }

    #[test]
    fn test_subscribe_receives_current_then_updates() {
        let store = Writable::new(0);
        let (seen, listener) = recorder();

        let _subscription = store.subscribe(listener);
        store.set(1);
        store.update(|n| n + 1);

        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
        assert_eq!(store.get(), 2);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = Writable::new(0);
        let (seen, listener) = recorder();

        let subscription = store.subscribe(listener);
        store.set(1);
        subscription.unsubscribe();
        store.set(2);

        assert_eq!(*seen.borrow(), vec![0, 1]);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_multiple_subscribers() {
        let store = Writable::new(0);
        let (first, l1) = recorder();
        let (second, l2) = recorder();

        let _a = store.subscribe(l1);
        let _b = store.subscribe(l2);
        store.set(5);

        assert_eq!(*first.borrow(), vec![0, 5]);
        assert_eq!(*second.borrow(), vec![0, 5]);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Writable::new(String::from("a"));
        let other = store.clone();
        let (seen, listener) = recorder();
        let _subscription = other.subscribe(listener);

        store.set("b".to_string());

        assert_eq!(other.get(), "b");
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_listener_may_write_back_to_store() {
        let store = Writable::new(0);
        let writer = store.clone();
        let _subscription = store.subscribe(move |n: &i32| {
            if *n == 1 {
                writer.set(10);
            }
        });

        store.set(1);
        assert_eq!(store.get(), 10);
    }

    #[test]
    fn test_combined_subscription() {
        let store = Writable::new(0);
        let (seen, l1) = recorder();
        let (_, l2) = recorder();
        let combined = Subscription::all(vec![store.subscribe(l1), store.subscribe(l2)]);
        assert_eq!(store.listener_count(), 2);

        combined.unsubscribe();
        store.set(3);

        assert_eq!(store.listener_count(), 0);
        assert_eq!(*seen.borrow(), vec![0]);
    }
}
