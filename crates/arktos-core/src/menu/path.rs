//! Slug, display name and parent derivation from relative markdown paths
//!
//! Paths are repository-relative, `/`-separated and include the `.md`
//! extension. An `index.md` file stands for its containing folder.

const MARKDOWN_EXTENSION: &str = ".md";
const INDEX_SEGMENT: &str = "index";

/// Strip a trailing `.md` (any case)
fn strip_extension(path: &str) -> &str {
    let cut = path.len().saturating_sub(MARKDOWN_EXTENSION.len());
    match path.get(cut..) {
        Some(ext) if ext.eq_ignore_ascii_case(MARKDOWN_EXTENSION) => &path[..cut],
        _ => path,
    }
}

/// Split `a/b/c` into (`Some("a/b")`, `"c"`)
fn split_last(path: &str) -> (Option<&str>, &str) {
    match path.rfind('/') {
        Some(pos) => (Some(&path[..pos]), &path[pos + 1..]),
        None => (None, path),
    }
}

fn is_index(stem: &str) -> bool {
    split_last(stem).1.eq_ignore_ascii_case(INDEX_SEGMENT)
}

/// Folder represented by an `index` stem; a top-level `index` has none.
fn folder_of_index(stem: &str) -> Option<&str> {
    match split_last(stem) {
        (Some(folder), last) if last.eq_ignore_ascii_case(INDEX_SEGMENT) => Some(folder),
        _ => None,
    }
}

/// Slug for a relative path.
///
/// ```
/// use arktos_core::menu::path::slug_of;
///
/// assert_eq!(slug_of("fanvel-comics/index.md"), "fanvel-comics");
/// assert_eq!(slug_of("About.md"), "about");
/// assert_eq!(slug_of("blog/Post-Two.md"), "blog/post-two");
/// ```
pub fn slug_of(relative_path: &str) -> String {
    let stem = strip_extension(relative_path);
    folder_of_index(stem).unwrap_or(stem).to_lowercase()
}

/// Last meaningful segment of a path, case preserved.
///
/// Folder name for `index` files, file stem otherwise.
pub fn display_name_of(relative_path: &str) -> String {
    let stem = strip_extension(relative_path);
    let meaningful = folder_of_index(stem).unwrap_or(stem);
    split_last(meaningful).1.to_string()
}

/// Slug of the containing folder.
///
/// `None` for top-level files and for `index` files, which represent their
/// folder rather than live inside it.
pub fn parent_slug_of(relative_path: &str) -> Option<String> {
    let stem = strip_extension(relative_path);
    if is_index(stem) {
        return None;
    }
    split_last(stem).0.map(str::to_lowercase)
}

/// Parent of a slug: all segments but the last.
pub fn parent_of_slug(slug: &str) -> Option<&str> {
    split_last(slug).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_of_top_level_file() {
        assert_eq!(slug_of("about.md"), "about");
        assert_eq!(slug_of("README.MD"), "readme");
    }

    #[test]
    fn test_slug_of_index_is_folder() {
        assert_eq!(slug_of("fanvel-comics/index.md"), "fanvel-comics");
        assert_eq!(slug_of("Blog/Archive/Index.md"), "blog/archive");
    }

    #[test]
    fn test_slug_of_index_matches_folder_path() {
        for folder in ["blog", "Comics/Fanvel", "a/b/c"] {
            assert_eq!(
                slug_of(&format!("{folder}/index.md")),
                folder.to_lowercase()
            );
        }
    }

    #[test]
    fn test_slug_of_top_level_index_keeps_segment() {
        assert_eq!(slug_of("index.md"), "index");
    }

    #[test]
    fn test_slug_of_without_extension() {
        assert_eq!(slug_of("notes/draft"), "notes/draft");
    }

    #[test]
    fn test_slug_of_non_ascii_path() {
        assert_eq!(slug_of("Café/Menú.md"), "café/menú");
        assert_eq!(slug_of("é"), "é");
    }

    #[test]
    fn test_display_name_of() {
        assert_eq!(display_name_of("about.md"), "about");
        assert_eq!(display_name_of("blog/Post-Two.md"), "Post-Two");
        assert_eq!(display_name_of("Fanvel-Comics/index.md"), "Fanvel-Comics");
        assert_eq!(display_name_of("index.md"), "index");
    }

    #[test]
    fn test_parent_slug_of() {
        assert_eq!(parent_slug_of("about.md"), None);
        assert_eq!(parent_slug_of("blog/index.md"), None);
        assert_eq!(parent_slug_of("Blog/Post.md"), Some("blog".to_string()));
        assert_eq!(
            parent_slug_of("comics/Fanvel/ch1.md"),
            Some("comics/fanvel".to_string())
        );
    }

    #[test]
    fn test_parent_of_slug() {
        assert_eq!(parent_of_slug("a/b/c"), Some("a/b"));
        assert_eq!(parent_of_slug("a"), None);
    }
}
