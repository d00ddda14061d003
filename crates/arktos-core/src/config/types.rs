//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Site configuration, read from `arktos.toml` at the site root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Markdown content directory, relative to the site root
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Directory holding persisted UI state, relative to the site root
    #[serde(default = "default_state_dir")]
    pub state_dir: String,

    /// Locale used when none has been chosen
    #[serde(default)]
    pub default_locale: Locale,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            version: default_version(),
            content_dir: default_content_dir(),
            state_dir: default_state_dir(),
            default_locale: Locale::default(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_content_dir() -> String {
    "content".to_string()
}

fn default_state_dir() -> String {
    ".arktos".to_string()
}
