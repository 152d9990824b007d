//! Declarative validation rule over the core predicate.
//!
//! Annotation-style validation layers want a yes/no answer plus a message to
//! attach to the offending field. [`IdentityNumberRule`] packages exactly
//! that: it calls [`is_valid`] and reports the outcome as a [`Verdict`],
//! treating a missing value as invalid.

use tckn_core::{DomainError, is_valid};

/// Failure message used when the host does not configure its own.
pub const DEFAULT_MESSAGE: &str = "Not a valid Turkish ID number";

/// Outcome of evaluating a rule against a field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The value validated.
    Pass,
    /// The value was missing or invalid; `message` is what the host should
    /// surface, `cause` keeps the missing/invalid distinction.
    Fail { message: String, cause: DomainError },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// A reusable pass/fail rule for identity number fields.
#[derive(Debug, Clone)]
pub struct IdentityNumberRule {
    message: String,
}

impl IdentityNumberRule {
    /// Rule with the default failure message.
    pub fn new() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_owned(),
        }
    }

    /// Rule with a host-configured failure message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Evaluate a raw field value.
    ///
    /// `None` (the field was never supplied) fails just like invalid
    /// content; the two are distinguished only through the verdict's
    /// `cause`.
    pub fn evaluate(&self, value: Option<&str>) -> Verdict {
        let cause = match value {
            None => DomainError::MissingNumber,
            Some(text) if !is_valid(text) => DomainError::InvalidNumber {
                len: text.chars().count(),
            },
            Some(_) => return Verdict::Pass,
        };

        Verdict::Fail {
            message: self.message.clone(),
            cause,
        }
    }
}

impl Default for IdentityNumberRule {
    fn default() -> Self {
        Self::new()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
