//! Persisted collection services
//!
//! A service owns a [`PersistedStore`](crate::store::PersistedStore) keyed by
//! its id and enforces add/update/remove rules on top of it. Rule violations
//! are reported as `Service <id> error: <message>`.

pub mod array;
pub mod object;

use std::fmt::Debug;

pub use array::ArrayService;
pub use object::ObjectService;

/// Values that carry their own identity
pub trait Identified {
    type Id: PartialEq + Debug;

    fn id(&self) -> &Self::Id;
}

fn log_initialized(service: &str) {
    tracing::info!("Service {} initialized", service);
}

fn log_updated(service: &str, value: &impl Debug) {
    tracing::info!(value = ?value, "Service {} updated", service);
}
