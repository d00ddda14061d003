//! `arktos menu` command - print the site menu tree

use arktos_core::content;
use arktos_core::error::Result;
use arktos_core::menu::{MenuAdapter, MenuEntry};

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};

/// Execute the menu command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let files = content::discover(&ctx.content_dir())?;
    trace_command!(ctx.cli, ctx.start, "discover_content");

    let adapter = MenuAdapter::new();
    let entries = adapter.parse_files(&files);
    let forest = adapter.build_menu_tree(&entries);
    trace_command!(ctx.cli, ctx.start, "build_menu_tree");

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&forest)?);
        }
        OutputFormat::Human => {
            if forest.is_empty() {
                if !ctx.cli.quiet {
                    println!("No menu entries found");
                }
            } else {
                print!("{}", render_tree(&forest));
            }
        }
    }

    Ok(())
}

/// Indented outline, two spaces per level
pub fn render_tree(forest: &[MenuEntry]) -> String {
    let mut out = String::new();
    for entry in forest {
        render_entry(entry, 0, &mut out);
    }
    out
}

fn render_entry(entry: &MenuEntry, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&entry.title);
    out.push_str(&format!(" ({})", entry.slug));
    if let Some(date) = entry.publication_date {
        out.push_str(&format!(" [{}]", date));
    }
    out.push('\n');

    for child in entry.children() {
        render_entry(child, depth + 1, out);
    }
}
