//! Reactive state containers and their persistence
//!
//! - [`Writable`]: observable in-memory value
//! - [`PersistedStore`]: a writable mirrored as JSON into a [`Storage`]
//! - [`MemoryStorage`] / [`FileStorage`]: storage backends

pub mod persisted;
pub mod storage;
pub mod writable;

pub use persisted::PersistedStore;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use writable::{Subscription, Writable};
