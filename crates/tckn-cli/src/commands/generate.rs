//! Implementation of the `tckn generate` command.
//!
//! Responsibility: pick nine-digit sequences (randomly, or the one given
//! via `--from`), let the core derive the checksum digits, and print the
//! results.  Checksum arithmetic never happens here.

use tracing::{debug, instrument};

use tckn_core::{DomainError, IdentityNumber};

use crate::{
    cli::{GenerateArgs, GenerateFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `tckn generate` command.
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    _output: OutputManager,
) -> CliResult<()> {
    let ids = if let Some(sequence) = args.from {
        debug!(sequence, "deriving identity number from fixed sequence");
        vec![IdentityNumber::from_sequence(sequence)?]
    } else {
        let count = args.count.unwrap_or(config.defaults.count);
        debug!(count, "generating random identity numbers");
        (0..count)
            .map(|_| random_id())
            .collect::<Result<Vec<_>, _>>()?
    };

    // Generated numbers are the command's product: write them bare to
    // stdout so pipes and redirects stay parseable, quiet mode included.
    match args.format {
        GenerateFormat::Lines => {
            for id in &ids {
                println!("{id}");
            }
        }
        GenerateFormat::Json => {
            let json = serde_json::to_string_pretty(&ids).map_err(|e| CliError::Internal {
                message: format!("failed to serialize generated numbers: {e}"),
            })?;
            println!("{json}");
        }
    }

    Ok(())
}

/// One random valid identity number.
///
/// The sequence range matches `IdentityNumber::from_sequence`, so the error
/// branch is unreachable in practice; it is propagated rather than unwrapped
/// to keep this path panic-free.
fn random_id() -> Result<IdentityNumber, DomainError> {
    let sequence =
        rand::random_range(IdentityNumber::MIN_SEQUENCE..=IdentityNumber::MAX_SEQUENCE);
    IdentityNumber::from_sequence(sequence)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tckn_core::is_valid;

    #[test]
    fn random_id_is_always_valid() {
        for _ in 0..100 {
            let id = random_id().unwrap();
            assert!(is_valid(id.as_str()));
        }
    }

    #[test]
    fn random_ids_are_not_all_identical() {
        // A constant generator would still pass validity checks; make sure
        // we actually sample the sequence space.
        let first = random_id().unwrap();
        let differs = (0..50).any(|_| random_id().unwrap() != first);
        assert!(differs);
    }
}
