//! Comprehensive error handling for the tckn CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use tckn_core::DomainError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// One or more checked numbers failed validation.
    #[error("{invalid} of {total} numbers failed validation")]
    ValidationFailed { invalid: usize, total: usize },

    /// `check` was invoked with no arguments and an empty stdin.
    #[error("no numbers supplied")]
    NoInput,

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `tckn-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error without touching core internals.
    #[error("{0}")]
    Core(#[from] DomainError),

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Unexpected internal failure (a bug).
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed { invalid, total } => vec![
                format!("{} of {} numbers did not pass the checksum", invalid, total),
                "A valid number is exactly 11 digits and never starts with 0".into(),
                "Use 'tckn generate' to produce known-good test numbers".into(),
            ],

            Self::NoInput => vec![
                "Pass numbers as arguments: tckn check 14948892948".into(),
                "Or pipe them in: cat numbers.txt | tckn check".into(),
            ],

            Self::Core(DomainError::SequenceOutOfRange { .. }) => vec![
                "--from takes the first nine digits of the number".into(),
                "Valid sequences run from 100000000 to 999999999".into(),
            ],

            Self::Core(_) => vec![
                "A valid number is exactly 11 digits and never starts with 0".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file, or remove it to use defaults".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions and available disk space".into(),
            ],

            Self::Internal { .. } => vec![
                "This appears to be a bug in tckn".into(),
                "Please report it with the command you ran".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationFailed { .. } => ErrorCategory::UserError,
            Self::NoInput => ErrorCategory::UserError,
            Self::Core(_) => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        let _ = write!(
            output,
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        );

        // Main error message
        let _ = writeln!(output, "  {}", self.to_string().red());

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = write!(output, "\n  {} {}\n", "→".dimmed(), err.to_string().dimmed());
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = write!(output, "\n{}\n", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(output, "  {suggestion}");
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            let _ = write!(
                output,
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = write!(out, "\nError: {self}\n");

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                let _ = writeln!(out, "  Caused by: {err}");
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}
