//! `arktos entry` command - parse one markdown file into a menu entry

use std::fs;

use arktos_core::error::{ArktosError, Result};
use arktos_core::menu::{MenuAdapter, MenuEntry};

use crate::cli::paths::{content_file, to_content_key};
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the entry command
pub fn execute(ctx: &CommandContext, path: &str) -> Result<()> {
    let key = to_content_key(path);
    let file = content_file(&ctx.content_dir(), &key);
    if !file.is_file() {
        return Err(ArktosError::not_found("content file", &key));
    }

    let content = fs::read_to_string(&file)
        .map_err(|e| ArktosError::io_operation("read", file.display(), e))?;
    let entry = MenuAdapter::new().parse_markdown_file(&key, &content);

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        OutputFormat::Human => {
            print!("{}", render_entry(&entry, ctx.cli.quiet));
        }
    }

    Ok(())
}

fn render_entry(entry: &MenuEntry, quiet: bool) -> String {
    let mut out = format!("Title: {}\nSlug: {}\n", entry.title, entry.slug);
    if let Some(sort_order) = entry.sort_order {
        out.push_str(&format!("Sort order: {}\n", sort_order));
    }
    if let Some(date) = entry.publication_date {
        out.push_str(&format!("Published: {}\n", date));
    }
    if !quiet {
        out.push('\n');
        out.push_str(&entry.content);
        if !entry.content.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}
