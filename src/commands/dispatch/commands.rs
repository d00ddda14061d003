//! Routing from parsed subcommands to their implementations

use crate::cli::Commands;
use crate::commands::{entry, locale, menu, socials, translate};
use arktos_core::error::Result;

use super::{trace_command, Command, CommandContext};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Menu => menu::execute(ctx),
            Commands::Entry { path } => entry::execute(ctx, path),
            Commands::Translate {
                key,
                locale: requested,
            } => translate::execute(ctx, key, requested.as_deref()),
            Commands::Locale { locale: requested } => locale::execute(ctx, requested.as_deref()),
            Commands::Socials => socials::execute(ctx),
        };
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
