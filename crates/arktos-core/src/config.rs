//! Site configuration for arktos
//!
//! Configuration is stored in `arktos.toml` at the site root. Every field has
//! a default, so a missing file or a partial file is fine.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArktosError, Result};

pub use types::{SiteConfig, CONFIG_FORMAT_VERSION};

/// Config file name at the site root
pub const CONFIG_FILE: &str = "arktos.toml";

impl SiteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SiteConfig =
            toml::from_str(&content).map_err(|e| ArktosError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer arktos"
            );
        }

        Ok(config)
    }

    /// Load `arktos.toml` from a site root, or defaults when it is absent
    pub fn discover(site_root: &Path) -> Result<Self> {
        let path = site_root.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArktosError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Absolute content directory for a site root
    pub fn content_path(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.content_dir)
    }

    /// Absolute state directory for a site root
    pub fn state_path(&self, site_root: &Path) -> PathBuf {
        site_root.join(&self.state_dir)
    }
}
