//! Domain error type.

use thiserror::Error;

/// Errors from constructing or deriving identity numbers.
///
/// Every operation in this crate is pure and deterministic, so a failure is
/// final for that input: there is nothing to retry and no partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required identity number was not supplied at all.
    ///
    /// Distinct from [`DomainError::InvalidNumber`]: adapter collaborators
    /// report a missing field differently from a present-but-wrong one.
    #[error("an identity number is required but none was supplied")]
    MissingNumber,

    /// The supplied text is not a valid Turkish ID number: wrong length,
    /// non-digit characters, or a checksum mismatch.
    ///
    /// Carries the character count rather than the text itself so a rejected
    /// number never ends up verbatim in logs.
    #[error("not a valid Turkish ID number ({len} characters)")]
    InvalidNumber { len: usize },

    /// The generator was asked for a sequence outside the nine-digit range.
    #[error("sequence {sequence} is outside the nine-digit range")]
    SequenceOutOfRange { sequence: u32 },
}
