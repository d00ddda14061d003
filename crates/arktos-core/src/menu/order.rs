//! Sibling ordering for menu entries
//!
//! Entries fall into three tiers: numbered below the threshold, unnumbered
//! (alphabetic), numbered at or above the threshold. Tiers sort in that order;
//! numbered tiers compare by number, the alphabetic tier by title.

use std::cmp::Ordering;

use super::MenuEntry;

/// Sort orders at or above this value sort after unnumbered entries
pub const ALPHABETIC_THRESHOLD: u64 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortTier {
    /// `sort_order < 999`
    NumericLow,
    /// No sort order
    Alphabetic,
    /// `sort_order >= 999`
    NumericHigh,
}

impl SortTier {
    pub fn of(sort_order: Option<u64>) -> Self {
        match sort_order {
            Some(n) if n < ALPHABETIC_THRESHOLD => SortTier::NumericLow,
            Some(_) => SortTier::NumericHigh,
            None => SortTier::Alphabetic,
        }
    }
}

/// Total order over sibling entries
pub fn compare_entries(a: &MenuEntry, b: &MenuEntry) -> Ordering {
    let tier = a.tier();
    tier.cmp(&b.tier()).then_with(|| match tier {
        SortTier::Alphabetic => compare_titles(&a.title, &b.title),
        SortTier::NumericLow | SortTier::NumericHigh => a.sort_order.cmp(&b.sort_order),
    })
}

/// Locale-aware title comparison.
///
/// Accents and case are ignored first (`"Ábaco" < "banana"`); remaining ties
/// put lowercase before uppercase, then fall back to code points.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn collation_key(title: &str) -> String {
    deunicode::deunicode(title).to_lowercase()
}

/// Sort every level of a forest in place
pub fn sort_forest(entries: &mut [MenuEntry]) {
    entries.sort_by(compare_entries);
    for entry in entries.iter_mut() {
        if let Some(children) = entry.children.as_mut() {
            sort_forest(children);
        }
    }
}
