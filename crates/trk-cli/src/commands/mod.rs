//! CLI subcommand implementations.

pub mod summary;
pub mod tags;
