//! Markdown menu model
//!
//! Markdown sources are turned into [`MenuEntry`] values by the adapter and
//! reassembled into a sorted forest by the tree builder:
//!
//! ```text
//! (path, content) -> title + path parsing -> flat entries -> build_menu_tree -> forest
//! ```

pub mod adapter;
pub mod order;
pub mod path;
pub mod title;
pub mod tree;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use adapter::{parse_markdown_file, MenuAdapter};
pub use order::{compare_entries, SortTier, ALPHABETIC_THRESHOLD};
pub use tree::{build_menu_tree, find_entry};

/// A page or folder of the site menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    /// Same value as `slug`
    pub id: String,
    /// Display title from the first `# ` heading or the file name
    pub title: String,
    /// Lowercase, extension-less relative path; also the tree key
    pub slug: String,
    /// Raw markdown source
    pub content: String,
    /// Numeric heading prefix (`"3. Title"` -> 3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u64>,
    /// DDMMYYYY date decoded from `sort_order` for blog entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<NaiveDate>,
    /// Direct children; only set on folder entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuEntry>>,
}

impl MenuEntry {
    /// Create a leaf entry whose id is its slug
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let slug = slug.into();
        MenuEntry {
            id: slug.clone(),
            title: title.into(),
            slug,
            content: content.into(),
            sort_order: None,
            publication_date: None,
            children: None,
        }
    }

    /// Set the sort order
    pub fn with_sort_order(mut self, sort_order: u64) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// True when the entry carries a `children` sequence
    pub fn is_folder(&self) -> bool {
        self.children.is_some()
    }

    /// Direct children, empty for leaves
    pub fn children(&self) -> &[MenuEntry] {
        self.children.as_deref().unwrap_or_default()
    }

    /// The sort tier this entry falls into
    pub fn tier(&self) -> SortTier {
        SortTier::of(self.sort_order)
    }
}
