//! Command handlers.  Each module owns one subcommand; no business logic
//! lives here, the checksum work is all in `tckn-core`.

pub mod check;
pub mod completions;
pub mod generate;
