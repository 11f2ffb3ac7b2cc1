#![forbid(unsafe_code)]

//! Implementations of the `cmdtree` subcommands

use super::args::{Cli, Command, OutputFormat};
use crate::config::{ConfigError, TreeDefinition};
use crate::output::{HumanFormatter, JsonlFormatter, ParseReport};
use crate::tree::CommandTree;
use crate::usage::{full_usage, write_usage};
use std::io::{self, Write};
use std::path::Path;
use termcolor::{ColorChoice, StandardStream};
use thiserror::Error;
use tracing::info;

/// Exit codes for the binary
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PARSE_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no command '{path}' in the definition")]
    UnknownCommand { path: String },

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Runs the selected subcommand and returns the process exit code
pub fn dispatch(cli: &Cli) -> Result<i32, CliError> {
    let color = cli.color.to_termcolor();
    match &cli.command {
        Command::Check { definition } => check(definition),
        Command::Usage { definition, path } => usage(definition, path, color),
        Command::Parse {
            definition,
            format,
            args,
        } => parse(definition, *format, args, color),
    }
}

fn load_tree(definition: &Path) -> Result<CommandTree, CliError> {
    let tree = TreeDefinition::load(definition)?.build()?;
    info!(path = %definition.display(), commands = tree.command_count(), "definition loaded");
    Ok(tree)
}

fn check(definition: &Path) -> Result<i32, CliError> {
    let tree = load_tree(definition)?;
    let leaves = tree.ids().filter(|id| tree.node(*id).is_leaf()).count();
    println!(
        "Definition OK: {} commands ({} leaves) under '{}'",
        tree.command_count(),
        leaves,
        tree.node(tree.root()).name()
    );
    Ok(EXIT_SUCCESS)
}

fn usage(definition: &Path, path: &[String], color: ColorChoice) -> Result<i32, CliError> {
    let tree = load_tree(definition)?;
    let id = tree.find(path).ok_or_else(|| CliError::UnknownCommand {
        path: path.join(" "),
    })?;

    let mut stdout = StandardStream::stdout(color);
    write_usage(&tree, id, &mut stdout)?;
    stdout.flush()?;
    Ok(EXIT_SUCCESS)
}

fn parse(
    definition: &Path,
    format: OutputFormat,
    args: &[String],
    color: ColorChoice,
) -> Result<i32, CliError> {
    let tree = load_tree(definition)?;
    let argv: Vec<&str> = std::iter::once(tree.node(tree.root()).name())
        .chain(args.iter().map(String::as_str))
        .collect();
    let report = ParseReport::collect(&tree, &argv);

    match format {
        OutputFormat::Human => HumanFormatter::new(color).write_to_stdout(&report)?,
        OutputFormat::Jsonl => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(JsonlFormatter::new().format(&report).as_bytes())?;
            stdout.flush()?;
        }
    }

    match &report.error {
        Some(err) => {
            let mut stderr = io::stderr().lock();
            writeln!(stderr, "error: {}\n", err)?;
            write!(stderr, "{}", full_usage(&tree, err.node()))?;
            Ok(EXIT_PARSE_FAILED)
        }
        None => Ok(EXIT_SUCCESS),
    }
}
