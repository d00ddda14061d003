//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;

use crate::cli::Cli;
use arktos_core::config::SiteConfig;
use arktos_core::error::Result;
use arktos_core::i18n::Locale;
use arktos_core::store::{FileStorage, PersistedStore};

/// Storage key of the preferred locale
pub const LOCALE_KEY: &str = "locale";

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a Path,
    pub config: SiteConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a Path, start: Instant) -> Result<Self> {
        let config = SiteConfig::discover(root)?;
        Ok(Self {
            cli,
            root,
            config,
            start,
        })
    }

    pub fn content_dir(&self) -> PathBuf {
        self.config.content_path(self.root)
    }

    /// The preferred locale, persisted in the state directory
    pub fn locale_store(&self) -> Result<PersistedStore<Locale>> {
        let storage = Rc::new(FileStorage::new(self.config.state_path(self.root)));
        PersistedStore::new(LOCALE_KEY, self.config.default_locale, storage)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No subcommand: print a version banner
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("arktos {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Content core for the Arktos website.");
        println!();
        println!("Run `arktos --help` for usage information.");
        Ok(())
    }
}
