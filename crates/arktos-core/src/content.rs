//! Markdown source discovery
//!
//! Walks a content directory and yields `(relative path, content)` pairs for
//! every `.md` file. Relative paths always use `/`.

use std::fs;
use std::path::Path;
use std::time::Instant;

use walkdir::{DirEntry, WalkDir};

use crate::error::{ArktosError, Result};
use crate::trace_time;

/// A markdown file as seen by the menu adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the content root, `/`-separated, `.md` included
    pub relative_path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        SourceFile {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Join path components with `/` regardless of platform
fn to_relative_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    parts.map(|parts| parts.join("/"))
}

/// Collect every markdown file under `root`, sorted by relative path.
///
/// Hidden files and directories are skipped.
#[tracing::instrument(skip(root), fields(root = %root.display()))]
pub fn discover(root: &Path) -> Result<Vec<SourceFile>> {
    let start = Instant::now();

    if !root.is_dir() {
        return Err(ArktosError::ContentNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry.map_err(|e| ArktosError::io_operation("walk", root.display(), e))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_markdown(path) {
            continue;
        }

        let Some(relative_path) = to_relative_key(root, path) else {
            tracing::warn!(path = %path.display(), "skipping non UTF-8 path");
            continue;
        };

        let content = fs::read_to_string(path)
            .map_err(|e| ArktosError::io_operation("read", path.display(), e))?;
        files.push(SourceFile {
            relative_path,
            content,
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    trace_time!(start, "discover_content", files = files.len());
    Ok(files)
}
