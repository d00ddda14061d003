//! `arktos socials` command - list social links

use arktos_core::error::Result;
use arktos_core::social::SocialAdapter;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

/// Execute the socials command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let socials = SocialAdapter::new().all();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(socials)?);
        }
        OutputFormat::Human => {
            for social in socials {
                println!("{} {} <{}>", social.id, social.name, social.url);
            }
        }
    }

    Ok(())
}
