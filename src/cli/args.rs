//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: List translatable strings found in a directory tree
//! - `write`: Scan a tree and write the translation catalog
//! - `init`: Initialize transcan configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Write(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by commands that scan a directory.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to scan
    pub directory: PathBuf,

    /// Scan mode: `php` for ->trans() calls, `template` for {intl l=...} tags
    #[arg(short, long, default_value = "php")]
    pub mode: String,

    /// Locale used to look up existing translations (overrides config file)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Translation domain (overrides config file)
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Base directory for recorded file paths (overrides config file)
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Directory holding <domain>/<locale>.php catalogs (overrides config file)
    #[arg(long)]
    pub catalogs_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct WriteCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Catalog file to write (default: <catalogs-root>/<domain>/<locale>.php)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON object mapping string hashes to translations, applied over the current ones
    #[arg(long)]
    pub overlay: Option<PathBuf>,

    /// Fail instead of creating the catalog directory when it is missing
    #[arg(long)]
    pub no_create: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List translatable strings and their current translations
    Scan(ScanCommand),
    /// Scan a directory and write the translation catalog
    Write(WriteCommand),
    /// Initialize a new .transcanrc.json configuration file
    Init,
}
