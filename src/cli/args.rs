#![forbid(unsafe_code)]

//! Command-line arguments of the `cmdtree` binary

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Inspect TOML command tree definitions and parse argv against them
#[derive(Debug, Parser)]
#[command(name = "cmdtree", version, about)]
pub struct Cli {
    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    pub color: ColorChoice,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a definition file
    Check {
        /// Path to the TOML tree definition
        definition: PathBuf,
    },

    /// Print the help text of a command
    Usage {
        /// Path to the TOML tree definition
        definition: PathBuf,

        /// Subcommand path from the root, e.g. `remote add`
        path: Vec<String>,
    },

    /// Parse a command line level by level and print what was bound
    Parse {
        /// Path to the TOML tree definition
        definition: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Command line to parse after `--`, without the program name
        #[arg(last = true)]
        args: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves `auto` against whether stdout is a terminal
    pub fn to_termcolor(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Jsonl,
}
