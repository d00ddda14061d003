//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Resolve the site root.
///
/// If a root path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Normalize a user-supplied content path to the `/`-separated form the menu
/// adapter expects
pub fn to_content_key(path: &str) -> String {
    let key = path.replace('\\', "/");
    key.trim_start_matches("./").trim_start_matches('/').to_string()
}

/// Join a `/`-separated content key onto a directory
pub fn content_file(content_dir: &Path, key: &str) -> PathBuf {
    key.split('/')
        .filter(|part| !part.is_empty())
        .fold(content_dir.to_path_buf(), |path, part| path.join(part))
}
