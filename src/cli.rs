//! CLI argument parsing and command dispatch for the `cmdtree` binary

pub mod args;
pub mod commands;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, OutputFormat};
pub use commands::{CliError, dispatch};
