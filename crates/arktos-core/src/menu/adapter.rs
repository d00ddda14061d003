//! Markdown file to [`MenuEntry`] conversion

use tracing::trace;

use super::path::{display_name_of, slug_of};
use super::title::{extract_title, is_blog_entry, parse_date_from_sort_order};
use super::tree::build_menu_tree;
use super::MenuEntry;
use crate::adapter::Adapter;
use crate::content::SourceFile;

const MENU_ADAPTER_NAME: &str = "menu";

/// Turn one markdown source into a menu entry.
///
/// Blog entries (`blog/...`) whose numeric prefix is a valid `DDMMYYYY` date
/// also get a publication date.
pub fn parse_markdown_file(relative_path: &str, content: &str) -> MenuEntry {
    let display_name = display_name_of(relative_path);
    let parsed = extract_title(content, &display_name);

    let mut entry = MenuEntry::new(slug_of(relative_path), parsed.title, content);
    entry.sort_order = parsed.sort_order;

    if let Some(sort_order) = entry.sort_order {
        if is_blog_entry(relative_path) {
            entry.publication_date = parse_date_from_sort_order(sort_order);
        }
    }

    entry
}

/// The menu adapter: parses site sources and builds the menu forest
#[derive(Debug, Clone)]
pub struct MenuAdapter {
    adapter: Adapter,
}

impl Default for MenuAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuAdapter {
    pub fn new() -> Self {
        MenuAdapter {
            adapter: Adapter::new(MENU_ADAPTER_NAME),
        }
    }

    pub fn id(&self) -> &str {
        self.adapter.id()
    }

    pub fn parse_markdown_file(&self, relative_path: &str, content: &str) -> MenuEntry {
        let entry = parse_markdown_file(relative_path, content);
        trace!(adapter = %self.adapter, slug = %entry.slug, "parsed markdown file");
        entry
    }

    /// Parse every source, keeping input order
    pub fn parse_files<'a>(&self, files: impl IntoIterator<Item = &'a SourceFile>) -> Vec<MenuEntry> {
        files
            .into_iter()
            .map(|file| self.parse_markdown_file(&file.relative_path, &file.content))
            .collect()
    }

    pub fn build_menu_tree(&self, entries: &[MenuEntry]) -> Vec<MenuEntry> {
        build_menu_tree(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_basic_file() {
        let entry = parse_markdown_file("about.md", "# About Us\n\nHello");
        assert_eq!(entry.id, "about");
        assert_eq!(entry.slug, "about");
        assert_eq!(entry.title, "About Us");
        assert_eq!(entry.content, "# About Us\n\nHello");
        assert_eq!(entry.sort_order, None);
        assert_eq!(entry.publication_date, None);
        assert_eq!(entry.children, None);
    }

    #[test]
    fn test_parse_index_file_uses_folder() {
        let entry = parse_markdown_file("Fanvel-Comics/index.md", "no heading");
        assert_eq!(entry.slug, "fanvel-comics");
        assert_eq!(entry.title, "Fanvel Comics");
    }

    #[test]
    fn test_parse_numbered_non_blog_has_no_date() {
        let entry = parse_markdown_file("docs/01012024.md", "# 1012024. Looks Like A Date");
        assert_eq!(entry.sort_order, Some(1012024));
        assert_eq!(entry.publication_date, None);
    }

    #[test]
    fn test_parse_blog_entry_with_date() {
        let entry = parse_markdown_file("blog/launch.md", "# 15032025. Launch Day");
        assert_eq!(entry.title, "Launch Day");
        assert_eq!(entry.sort_order, Some(15032025));
        assert_eq!(entry.publication_date, NaiveDate::from_ymd_opt(2025, 3, 15));
    }

    #[test]
    fn test_parse_blog_entry_invalid_date_omitted() {
        let entry = parse_markdown_file("blog/bad.md", "# 31042025. Not A Day");
        assert_eq!(entry.sort_order, Some(31042025));
        assert_eq!(entry.publication_date, None);
    }

    #[test]
    fn test_parse_blog_entry_small_number_no_date() {
        let entry = parse_markdown_file("blog/index.md", "# 0. Blog");
        assert_eq!(entry.sort_order, Some(0));
        assert_eq!(entry.publication_date, None);
    }

    #[test]
    fn test_adapter_id_and_parse_files() {
        let adapter = MenuAdapter::new();
        assert_eq!(adapter.id(), "adapter:menu");

        let files = vec![
            SourceFile::new("b.md", "# B"),
            SourceFile::new("a.md", "# A"),
        ];
        let entries = adapter.parse_files(&files);
        let slugs: Vec<&str> = entries.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);

        let forest = adapter.build_menu_tree(&entries);
        assert_eq!(forest[0].slug, "a");
    }
}
