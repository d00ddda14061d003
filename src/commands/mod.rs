//! CLI commands for arktos

pub mod dispatch;
pub mod entry;
pub mod locale;
pub mod menu;
pub mod socials;
pub mod translate;
