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
    name    = "cookout",
    bin_name = "cookout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate cookout event submissions",
    long_about = "Cookout checks event submissions (title, date, participants and \
                  their food money shares) before they are persisted.",
    after_help = "EXAMPLES:\n\
        \x20 cookout validate event.json\n\
        \x20 cookout validate submissions/ --skip-malformed\n\
        \x20 cookout validate event.json --labels legacy --output-format json\n\
        \x20 cookout completions bash > /usr/share/bash-completion/completions/cookout",
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
    /// Validate one or more event payloads.
    #[command(
        visible_alias = "v",
        about = "Validate event submissions",
        after_help = "EXAMPLES:\n\
            \x20 cookout validate event.json\n\
            \x20 cookout validate a.json b.toml\n\
            \x20 cookout validate submissions/ --labels legacy"
    )]
    Validate(ValidateArgs),

    /// Initialise a Cookout configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 cookout init           # default location\n\
            \x20 cookout init --local   # .cookout.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cookout completions bash > ~/.local/share/bash-completion/completions/cookout\n\
            \x20 cookout completions zsh  > ~/.zfunc/_cookout\n\
            \x20 cookout completions fish > ~/.config/fish/completions/cookout.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Cookout configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 cookout config get labels.event\n\
            \x20 cookout config list\n\
            \x20 cookout config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `cookout validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Payload files or directories.  Directories are searched recursively
    /// for `*.json` and `*.toml` files.
    #[arg(value_name = "PATH", required = true, num_args = 1.., help = "Payload files or directories")]
    pub paths: Vec<PathBuf>,

    /// Entity names used in error messages.  Overrides the `[labels]`
    /// configuration section.
    #[arg(
        long = "labels",
        value_name = "PRESET",
        value_enum,
        help = "Entity label preset for messages"
    )]
    pub labels: Option<LabelPreset>,

    /// Skip payloads that cannot be decoded instead of failing.
    #[arg(long = "skip-malformed", help = "Skip undecodable payload files")]
    pub skip_malformed: bool,
}

/// Named sets of entity labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LabelPreset {
    /// `Event` / `Person` / `Participant`.
    Default,
    /// `BarbequeDto` / `Person` / `PersonDto`.
    Legacy,
}

impl std::fmt::Display for LabelPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `cookout init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.cookout.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cookout completions`.
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

/// Subcommands for `cookout config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `labels.event`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
