//! Adapter identity
//!
//! Adapters turn raw site data into domain values. Each one is identified by
//! a name and exposes a namespaced id (`adapter:<name>`) used in logs.

use std::fmt;

const ADAPTER_PREFIX: &str = "adapter";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Adapter {
    name: String,
    id: String,
}

impl Adapter {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = format!("{ADAPTER_PREFIX}:{name}");
        Adapter { name, id }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespaced id, `adapter:<name>`
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
