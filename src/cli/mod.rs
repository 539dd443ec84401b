//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

mod context;

pub use args::{Args, Command};
pub use context::AppContext;
