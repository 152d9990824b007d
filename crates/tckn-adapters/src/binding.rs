//! Typed field binding over the core try-parse.
//!
//! Request/form layers hand over raw textual field values; this module turns
//! one of them into an [`IdentityNumber`] or a field-level error. The host's
//! value provider sits behind [`ValueSource`] so binding stays testable
//! without a framework in the loop.

use thiserror::Error;
use tracing::debug;

use tckn_core::IdentityNumber;

/// Read-only view of the host framework's raw field values.
#[cfg_attr(test, mockall::automock)]
pub trait ValueSource {
    /// The raw textual value for `field`, or `None` when the request did not
    /// carry the field at all.
    fn value(&self, field: &str) -> Option<String>;
}

/// A field-level binding failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The field was present but did not parse as an identity number.
    #[error("{field}: invalid value")]
    InvalidValue { field: String },
}

/// Bind `field` from `source` to a typed identity number.
///
/// An absent or blank field means "no value supplied" and binds to
/// `Ok(None)`; optionality is the caller's concern, not a binding error. A
/// present value succeeds exactly when [`IdentityNumber::try_parse`] does.
pub fn bind_field(
    source: &dyn ValueSource,
    field: &str,
) -> Result<Option<IdentityNumber>, BindError> {
    let Some(raw) = source.value(field) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }

    match IdentityNumber::try_parse(&raw) {
        Some(id) => Ok(Some(id)),
        None => {
            // Field name only; the rejected value stays out of the logs.
            debug!(field, "field value failed identity number validation");
            Err(BindError::InvalidValue {
                field: field.to_owned(),
            })
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
