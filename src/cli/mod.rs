//! CLI argument parsing for arktos
//!
//! Global flags: --root, --format, --quiet, --verbose, --log-level, --log-json

pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use arktos_core::format::OutputFormat;

/// Arktos - content core for the Arktos website
#[derive(Parser, Debug)]
#[command(name = "arktos")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Site root (holds arktos.toml and the content directory)
    #[arg(long, global = true, env = "ARKTOS_ROOT")]
    pub root: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace, or a directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the site menu tree
    Menu,

    /// Show one markdown file as a menu entry
    Entry {
        /// Path relative to the content directory (e.g. blog/post.md)
        path: String,
    },

    /// Translate a dot-separated key
    Translate {
        /// Translation key (e.g. site.title)
        key: String,

        /// Locale to translate into (defaults to the preferred locale)
        #[arg(long, short)]
        locale: Option<String>,
    },

    /// Show or set the preferred locale
    Locale {
        /// New locale (en, ca, es, qq)
        locale: Option<String>,
    },

    /// List social links
    Socials,
}
