//! Validation and generation of Turkish national identity numbers.
//!
//! Two strictly layered pieces:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        IdentityNumber value type        │
//! │  (constructed only from accepted text)  │
//! └──────────────────┬──────────────────────┘
//!                    │ gated by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            checksum validator           │
//! │   (pure function, leaf, no deps)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The validator decides; the value type is the proof that the decision was
//! positive. Everything else (CLI, rule wrappers, field binders) lives in
//! sibling crates and talks to this one through `is_valid`, `try_parse`, and
//! `IdentityNumber::new`.
//!
//! ## Usage
//!
//! ```rust
//! use tckn_core::{IdentityNumber, is_valid};
//!
//! assert!(is_valid("14948892948"));
//!
//! let id = IdentityNumber::new("14948892948").unwrap();
//! assert_eq!(id.as_str(), "14948892948");
//!
//! assert!(IdentityNumber::try_parse("04948892948").is_none());
//! ```
//!
//! All operations are synchronous, deterministic, and free of shared state;
//! the types are `Send + Sync` and safe to use from any number of threads.

pub mod domain;

pub use domain::checksum::{LENGTH, is_valid};
pub use domain::error::DomainError;
pub use domain::identity::IdentityNumber;
