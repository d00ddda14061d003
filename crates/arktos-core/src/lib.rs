//! Arktos Core Library
//!
//! Site content core for the Arktos site: markdown menu trees, translations,
//! social links, and persisted reactive state.

pub mod adapter;
pub mod config;
pub mod content;
pub mod error;
pub mod format;
pub mod i18n;
pub mod logging;
pub mod menu;
pub mod service;
pub mod social;
pub mod state;
pub mod store;
