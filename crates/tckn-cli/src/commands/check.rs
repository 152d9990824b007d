//! Implementation of the `tckn check` command.
//!
//! Numbers come from the argument list or, when that is empty, from stdin
//! (whitespace-separated).  Every number is checked; the command fails with
//! a user-error exit code when any of them is invalid.

use std::io::Read;

use serde::Serialize;
use tracing::{info, instrument};

use tckn_core::is_valid;

use crate::{
    cli::{CheckArgs, CheckFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One checked number and its verdict.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Checked {
    number: String,
    valid: bool,
}

/// Execute the `tckn check` command.
#[instrument(skip_all)]
pub fn execute(args: CheckArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let numbers = if args.numbers.is_empty() {
        read_stdin()?
    } else {
        args.numbers
    };
    if numbers.is_empty() {
        return Err(CliError::NoInput);
    }

    let checked = classify(numbers);
    let invalid = checked.iter().filter(|c| !c.valid).count();

    match args.format {
        CheckFormat::Human => {
            // In quiet mode only the failures are printed; the exit code
            // carries the overall verdict either way.
            for entry in &checked {
                if entry.valid {
                    output.success(&entry.number)?;
                } else {
                    output.error(&entry.number)?;
                }
            }
            output.info(&format!(
                "{} valid, {} invalid",
                checked.len() - invalid,
                invalid
            ))?;
        }
        CheckFormat::Json => {
            let json = serde_json::to_string_pretty(&checked).map_err(|e| CliError::Internal {
                message: format!("failed to serialize verdicts: {e}"),
            })?;
            println!("{json}");
        }
    }

    if invalid > 0 {
        return Err(CliError::ValidationFailed {
            invalid,
            total: checked.len(),
        });
    }

    info!(total = checked.len(), "all numbers valid");
    Ok(())
}

/// Run the validator over every number, keeping input order.
fn classify(numbers: Vec<String>) -> Vec<Checked> {
    numbers
        .into_iter()
        .map(|number| {
            let valid = is_valid(&number);
            Checked { number, valid }
        })
        .collect()
}

fn read_stdin() -> CliResult<Vec<String>> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| CliError::IoError {
            message: "failed to read numbers from stdin".into(),
            source: e,
        })?;
    Ok(buffer.split_whitespace().map(str::to_owned).collect())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
