//! CLI subcommand implementations.

pub mod download;
pub mod lookup;
