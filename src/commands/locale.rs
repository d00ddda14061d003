//! `arktos locale` command - show or persist the preferred locale

use arktos_core::error::Result;
use arktos_core::i18n::{Locale, SUPPORTED_LOCALES};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the locale command
pub fn execute(ctx: &CommandContext, locale: Option<&str>) -> Result<()> {
    let requested = locale.map(str::parse::<Locale>).transpose()?;
    let store = ctx.locale_store()?;

    if let Some(locale) = requested {
        store.set(locale)?;
        tracing::info!(locale = %locale, "preferred locale saved");
    }

    let current = store.get();
    match ctx.cli.format {
        OutputFormat::Json => {
            let supported: Vec<_> = SUPPORTED_LOCALES
                .iter()
                .map(|l| serde_json::json!({ "locale": l, "name": l.name() }))
                .collect();
            let output = serde_json::json!({
                "locale": current,
                "name": current.name(),
                "supported": supported,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{} ({})", current, current.name());
            if !ctx.cli.quiet && requested.is_none() {
                println!();
                println!("Available:");
                for l in SUPPORTED_LOCALES {
                    let marker = if l == current { "*" } else { " " };
                    println!("{} {} ({})", marker, l, l.name());
                }
            }
        }
    }

    Ok(())
}
