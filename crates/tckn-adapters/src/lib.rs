//! Adapter contracts for hosting tckn inside validation and binding
//! frameworks.
//!
//! Host frameworks are not reimplemented here; this crate only models the
//! two narrow seams through which they call the core:
//!
//! - [`rule`]: a declarative pass/fail rule for annotation-style validation
//!   layers (a missing value fails).
//! - [`binding`]: a typed field binder for request/form layers (a missing or
//!   blank value binds to nothing; only a present-but-invalid one is an
//!   error).

pub mod binding;
pub mod rule;

// Re-export commonly used adapters
pub use binding::{BindError, ValueSource, bind_field};
pub use rule::{IdentityNumberRule, Verdict};
