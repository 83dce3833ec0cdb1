//! Subcommand implementations.

/// One-shot translation handler.
pub mod translate;
