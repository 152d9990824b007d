//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tckn",
    bin_name = "tckn",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate and check Turkish national identity numbers",
    long_about = "tckn generates random valid Turkish national identity \
                  numbers for test data, and checks existing ones against \
                  the official checksum scheme.",
    after_help = "EXAMPLES:\n\
        \x20 tckn generate 5\n\
        \x20 tckn generate --from 123456789\n\
        \x20 tckn check 14948892948\n\
        \x20 cat numbers.txt | tckn check\n\
        \x20 tckn completions bash > /usr/share/bash-completion/completions/tckn",
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
    /// Generate valid identity numbers.
    #[command(
        visible_alias = "gen",
        about = "Generate valid identity numbers",
        after_help = "EXAMPLES:\n\
            \x20 tckn generate              # one random number\n\
            \x20 tckn generate 100          # a batch\n\
            \x20 tckn generate --from 123456789\n\
            \x20 tckn generate 10 --format json"
    )]
    Generate(GenerateArgs),

    /// Check identity numbers against the checksum scheme.
    #[command(
        visible_alias = "c",
        about = "Check identity numbers",
        after_help = "EXAMPLES:\n\
            \x20 tckn check 14948892948\n\
            \x20 tckn check 14948892948 10000000146\n\
            \x20 cat numbers.txt | tckn check --format json"
    )]
    Check(CheckArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tckn completions bash > ~/.local/share/bash-completion/completions/tckn\n\
            \x20 tckn completions zsh  > ~/.zfunc/_tckn\n\
            \x20 tckn completions fish > ~/.config/fish/completions/tckn.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `tckn generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// How many numbers to generate.  Falls back to the configured default
    /// (factory default: 1).
    #[arg(value_name = "COUNT", help = "Number of identity numbers to generate")]
    pub count: Option<u32>,

    /// Derive the number for a specific nine-digit sequence instead of
    /// picking sequences at random.
    #[arg(
        long = "from",
        value_name = "SEQUENCE",
        conflicts_with = "count",
        help = "Derive from a specific nine-digit sequence"
    )]
    pub from: Option<u32>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "lines",
        help = "Output format"
    )]
    pub format: GenerateFormat,
}

/// Output format for the `generate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenerateFormat {
    /// One number per line.
    Lines,
    /// JSON array.
    Json,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `tckn check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Numbers to check.  When empty, whitespace-separated numbers are read
    /// from stdin.
    #[arg(value_name = "NUMBER", help = "Identity numbers to check")]
    pub numbers: Vec<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: CheckFormat,
}

/// Output format for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckFormat {
    /// Per-number verdict lines with a summary.
    Human,
    /// JSON array of verdicts.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tckn completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
