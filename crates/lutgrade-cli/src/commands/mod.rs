//! CLI subcommand implementations.

pub mod generate;
pub mod preview;
