//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "shelf",
    bin_name = "shelf",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4da} Run lending library scenarios",
    long_about = "Shelf models a small lending library: a fixed-size catalog, \
                  registered patrons with reading tastes, and loans that are \
                  only granted when the patron would enjoy the book.",
    after_help = "EXAMPLES:\n\
        \x20 shelf run day1.toml\n\
        \x20 shelf run day1.toml --format json\n\
        \x20 shelf suggest day1.toml --patron ada\n\
        \x20 shelf completions bash > /usr/share/bash-completion/completions/shelf",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a scenario file and print the report.
    #[command(
        visible_alias = "r",
        about = "Run a scenario",
        after_help = "EXAMPLES:\n\
            \x20 shelf run day1.toml\n\
            \x20 shelf run day1.toml --format json\n\
            \x20 shelf run day1.toml --journal"
    )]
    Run(RunArgs),

    /// Suggest a book for one patron after running a scenario.
    #[command(
        about = "Suggest a book for a patron",
        after_help = "EXAMPLES:\n\
            \x20 shelf suggest day1.toml --patron ada"
    )]
    Suggest(SuggestArgs),

    /// Initialise a Shelf configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 shelf init           # default location\n\
            \x20 shelf init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 shelf completions bash > ~/.local/share/bash-completion/completions/shelf\n\
            \x20 shelf completions zsh  > ~/.zfunc/_shelf\n\
            \x20 shelf completions fish > ~/.config/fish/completions/shelf.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Shelf configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 shelf config get library.max_books\n\
            \x20 shelf config list\n\
            \x20 shelf config path"
    )]
    Config(ConfigCommands),
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `shelf run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Scenario file (TOML).
    #[arg(value_name = "SCENARIO", help = "Scenario file to run")]
    pub scenario: PathBuf,

    /// Report format.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "table",
        help = "Report format"
    )]
    pub format: ReportFormat,

    /// Print the circulation journal after the report.
    #[arg(long = "journal", help = "Also print every journaled event")]
    pub journal: bool,
}

/// Output format for the `run` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable sections.
    Table,
    /// A single JSON document.
    Json,
}

// ── suggest ───────────────────────────────────────────────────────────────────

/// Arguments for `shelf suggest`.
#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Scenario file (TOML).
    #[arg(value_name = "SCENARIO", help = "Scenario file to run first")]
    pub scenario: PathBuf,

    /// Key of the patron, as declared in the scenario.
    #[arg(
        short = 'p',
        long = "patron",
        value_name = "KEY",
        help = "Patron key"
    )]
    pub patron: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `shelf init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `shelf completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `shelf config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `library.max_books`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
