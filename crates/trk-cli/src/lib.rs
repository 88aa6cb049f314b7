//! Time summary CLI library.
//!
//! This crate provides the CLI interface over `trk-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, SummaryArgs};
pub use config::Config;
