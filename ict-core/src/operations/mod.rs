//! High-level operations that correspond to CLI commands
//!
//! These modules combine the candidate source and the resolver, separated
//! from CLI concerns like argument parsing and output formatting.

pub mod list;
pub mod resolve;

pub use list::{list_operation, list_targets};
pub use resolve::resolve_operation;
