//! Title, sort order and publication date parsing

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use tracing::warn;

/// First level-1 heading, one per line
const HEADING_PATTERN: &str = r"(?m)^#\s+(.+)$";

/// `"12. Title"`; ASCII digits only
const NUMBERED_TITLE_PATTERN: &str = r"^([0-9]+)\. (.+)$";

const BLOG_ROOT: &str = "blog/";

static HEADING_RE: OnceLock<Option<Regex>> = OnceLock::new();
static NUMBERED_TITLE_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(error = %e, pattern, "Failed to compile title regex");
            None
        }
    })
    .as_ref()
}

/// Title with the optional numeric prefix split off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    pub title: String,
    pub sort_order: Option<u64>,
}

impl ParsedTitle {
    fn plain(title: impl Into<String>) -> Self {
        ParsedTitle {
            title: title.into(),
            sort_order: None,
        }
    }
}

/// Title from the first `# ` heading, falling back to the formatted file name
pub fn extract_title(content: &str, fallback_name: &str) -> ParsedTitle {
    let heading = compiled(&HEADING_RE, HEADING_PATTERN)
        .and_then(|re| re.captures(content))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim());

    match heading {
        Some(raw) => parse_numbered_title(raw),
        None => ParsedTitle::plain(format_filename(fallback_name)),
    }
}

/// Split a `"N. Title"` heading into title and sort order.
///
/// ```
/// use arktos_core::menu::title::parse_numbered_title;
///
/// let parsed = parse_numbered_title("42. Foo");
/// assert_eq!(parsed.title, "Foo");
/// assert_eq!(parsed.sort_order, Some(42));
///
/// assert_eq!(parse_numbered_title("Foo").sort_order, None);
/// ```
pub fn parse_numbered_title(raw: &str) -> ParsedTitle {
    let Some(caps) = compiled(&NUMBERED_TITLE_RE, NUMBERED_TITLE_PATTERN)
        .and_then(|re| re.captures(raw))
    else {
        return ParsedTitle::plain(raw);
    };

    // A prefix too large for u64 is treated as part of the title
    match caps[1].parse::<u64>() {
        Ok(sort_order) => ParsedTitle {
            title: caps[2].to_string(),
            sort_order: Some(sort_order),
        },
        Err(_) => ParsedTitle::plain(raw),
    }
}

/// `"my-first_post.md"` -> `"My First Post"`
pub fn format_filename(name: &str) -> String {
    let stem = name.strip_suffix(".md").unwrap_or(name);
    stem.split(['-', '_'])
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True for paths under the `blog/` root
pub fn is_blog_entry(relative_path: &str) -> bool {
    relative_path.to_lowercase().starts_with(BLOG_ROOT)
}

/// Decode a sort order as a `DDMMYYYY` calendar date.
///
/// Returns `None` when the number has more than 8 digits or names a day that
/// does not exist (`31042025`, `29022023`).
pub fn parse_date_from_sort_order(sort_order: u64) -> Option<NaiveDate> {
    let digits = format!("{sort_order:08}");
    if digits.len() != 8 {
        return None;
    }

    let day: u32 = digits[0..2].parse().ok()?;
    let month: u32 = digits[2..4].parse().ok()?;
    let year: i32 = digits[4..8].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    (date.day() == day && date.month() == month && date.year() == year).then_some(date)
}
