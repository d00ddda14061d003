use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::{debug, warn};

use super::order::sort_forest;
use super::path::parent_of_slug;
use super::MenuEntry;
use crate::trace_time;

/// Build the sorted menu forest from a flat entry list.
///
/// Parent/child links come from slug structure: `blog/post` is a child of the
/// `blog` folder entry. An entry becomes a folder (gets a `children` sequence)
/// when any other slug lies below it. Children whose parent folder entry is
/// missing are placed at the top level. Every level is sorted with
/// [`compare_entries`](super::compare_entries).
///
/// Slugs are expected to be unique; when they are not, the last entry with a
/// given slug is kept.
#[tracing::instrument(skip(entries), fields(entries = entries.len()))]
pub fn build_menu_tree(entries: &[MenuEntry]) -> Vec<MenuEntry> {
    let start = Instant::now();

    let unique = dedupe_by_slug(entries);
    let folders = folder_slugs(&unique);

    let mut nodes: HashMap<&str, (usize, MenuEntry)> = HashMap::with_capacity(unique.len());
    for (index, entry) in unique.iter().enumerate() {
        let mut node = (*entry).clone();
        if folders.contains(entry.slug.as_str()) {
            node.children = Some(Vec::new());
        }
        nodes.insert(entry.slug.as_str(), (index, node));
    }

    // Deepest first, so a parent is still in `nodes` when its children attach
    let mut attach_order: Vec<(usize, &str)> = unique
        .iter()
        .enumerate()
        .map(|(index, entry)| (index, entry.slug.as_str()))
        .collect();
    attach_order.sort_by_key(|&(index, slug)| (std::cmp::Reverse(depth(slug)), index));

    let mut roots: Vec<(usize, MenuEntry)> = Vec::new();
    for (_, slug) in attach_order {
        let Some(node) = nodes.remove(slug) else {
            continue;
        };

        let parent = parent_of_slug(slug).filter(|parent| folders.contains(parent));
        match parent.and_then(|parent| nodes.get_mut(parent)) {
            Some((_, folder)) => folder.children.get_or_insert_with(Vec::new).push(node.1),
            None => {
                if parent_of_slug(slug).is_some() {
                    debug!(slug, "orphan entry placed at top level");
                }
                roots.push(node);
            }
        }
    }

    roots.sort_by_key(|(index, _)| *index);
    let mut forest: Vec<MenuEntry> = roots.into_iter().map(|(_, entry)| entry).collect();
    sort_forest(&mut forest);

    trace_time!(start, "build_menu_tree", roots = forest.len());
    forest
}

fn depth(slug: &str) -> usize {
    slug.matches('/').count()
}

/// Keep the last entry for every slug, preserving input order.
fn dedupe_by_slug(entries: &[MenuEntry]) -> Vec<&MenuEntry> {
    let mut last_index: HashMap<&str, usize> = HashMap::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if last_index.insert(entry.slug.as_str(), index).is_some() {
            warn!(slug = %entry.slug, "duplicate menu slug, keeping the last entry");
        }
    }

    entries
        .iter()
        .enumerate()
        .filter(|(index, entry)| last_index.get(entry.slug.as_str()) == Some(index))
        .map(|(_, entry)| entry)
        .collect()
}

/// Slugs of entries that have at least one descendant in the list
fn folder_slugs<'a>(entries: &[&'a MenuEntry]) -> HashSet<&'a str> {
    let mut ancestors: HashSet<&str> = HashSet::new();
    for &entry in entries {
        let slug = entry.slug.as_str();
        for (pos, _) in slug.match_indices('/') {
            ancestors.insert(&slug[..pos]);
        }
    }

    entries
        .iter()
        .map(|&entry| entry.slug.as_str())
        .filter(|slug| ancestors.contains(slug))
        .collect()
}

/// Depth-first lookup of a slug in a forest
pub fn find_entry<'a>(forest: &'a [MenuEntry], slug: &str) -> Option<&'a MenuEntry> {
    forest.iter().find_map(|entry| {
        if entry.slug == slug {
            Some(entry)
        } else {
            find_entry(entry.children(), slug)
        }
    })
}
