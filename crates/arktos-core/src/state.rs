//! Observable menu state shared by the UI

use crate::content::SourceFile;
use crate::error::{ArktosError, Result};
use crate::menu::{MenuAdapter, MenuEntry};
use crate::store::Writable;

/// Flat entries, the built forest, and the selected entry
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pub entries: Writable<Vec<MenuEntry>>,
    pub tree: Writable<Vec<MenuEntry>>,
    pub active: Writable<Option<MenuEntry>>,
    adapter: MenuAdapter,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `files` and publish both the flat list and the forest.
    ///
    /// An active entry that no longer exists is cleared; one that still
    /// exists is refreshed from the new sources.
    pub fn load<'a>(&self, files: impl IntoIterator<Item = &'a SourceFile>) {
        let entries = self.adapter.parse_files(files);
        let tree = self.adapter.build_menu_tree(&entries);
        tracing::debug!(entries = entries.len(), roots = tree.len(), "menu state loaded");

        if let Some(active) = self.active.get() {
            let refreshed = entries.iter().find(|e| e.slug == active.slug).cloned();
            self.active.set(refreshed);
        }

        self.entries.set(entries);
        self.tree.set(tree);
    }

    /// Select the entry with `slug`
    pub fn activate(&self, slug: &str) -> Result<MenuEntry> {
        let entry = self
            .entries
            .get()
            .into_iter()
            .find(|e| e.slug == slug)
            .ok_or_else(|| ArktosError::not_found("menu entry", slug))?;
        self.active.set(Some(entry.clone()));
        Ok(entry)
    }

    pub fn deactivate(&self) {
        self.active.set(None);
    }
}
