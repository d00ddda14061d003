//! `arktos translate` command - look up a translation key

use arktos_core::error::Result;
use arktos_core::i18n::{self, Locale};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the translate command
pub fn execute(ctx: &CommandContext, key: &str, locale: Option<&str>) -> Result<()> {
    let locale = match locale {
        Some(code) => code.parse::<Locale>()?,
        None => ctx.locale_store()?.get(),
    };
    let value = i18n::translate(locale, key);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key,
                "locale": locale,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", value);
        }
    }

    Ok(())
}
