#![forbid(unsafe_code)]

//! Usage and help text for commands
//!
//! `short_usage` traces the path from the root to a command. `full_usage`
//! adds the argument synopsis and the Arguments, Subcommands, Options and
//! Flags blocks, each only when non-empty.

use crate::tree::{CommandTree, NodeId};
use std::io;
use termcolor::{Color, ColorSpec, NoColor, WriteColor};

/// One-line usage, e.g. `Usage: git remote add`
pub fn short_usage(tree: &CommandTree, id: NodeId) -> String {
    let node = tree.node(id);
    let prefix = match node.parent() {
        Some(parent) => short_usage(tree, parent),
        None => "Usage:".to_string(),
    };
    format!("{} {}", prefix, node.name())
}

/// Full help text for a command, ending with a newline
pub fn full_usage(tree: &CommandTree, id: NodeId) -> String {
    let mut buffer = NoColor::new(Vec::new());
    // Writing into memory cannot fail
    let _ = write_usage(tree, id, &mut buffer);
    String::from_utf8_lossy(&buffer.into_inner()).into_owned()
}

/// Renders `name` with one dash for single-character names, two otherwise
pub fn dashed(name: &str) -> String {
    if name.chars().count() > 1 {
        format!("--{}", name)
    } else {
        format!("-{}", name)
    }
}

/// Writes the full help text, coloring headers and names when `out` supports it
pub fn write_usage<W: WriteColor>(tree: &CommandTree, id: NodeId, out: &mut W) -> io::Result<()> {
    let node = tree.node(id);

    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{}", short_usage(tree, id))?;
    out.reset()?;
    for argument in node.arguments() {
        write!(out, " {}", argument.synopsis())?;
    }
    writeln!(out)?;

    if !node.arguments().is_empty() {
        write_header(out, "Arguments")?;
        for argument in node.arguments() {
            write_entry(
                out,
                &format!("<{}>", argument.name()),
                None,
                argument.description(),
            )?;
        }
    }

    if !node.children().is_empty() {
        write_header(out, "Subcommands")?;
        for (name, child) in node.children() {
            write_entry(out, name, None, tree.node(*child).description())?;
        }
    }

    if !node.options().is_empty() {
        write_header(out, "Options")?;
        for (name, description) in node.options() {
            write_entry(out, &dashed(name), Some(&name.to_uppercase()), description)?;
        }
    }

    if !node.flags().is_empty() {
        write_header(out, "Flags")?;
        for (name, description) in node.flags() {
            write_entry(out, &dashed(name), None, description)?;
        }
    }

    Ok(())
}

fn write_header<W: WriteColor>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{}:", title)?;
    out.reset()?;
    writeln!(out)
}

fn write_entry<W: WriteColor>(
    out: &mut W,
    name: &str,
    placeholder: Option<&str>,
    description: &str,
) -> io::Result<()> {
    write!(out, "\t")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "{}", name)?;
    out.reset()?;
    if let Some(placeholder) = placeholder {
        write!(out, " {}", placeholder)?;
    }
    writeln!(out, ": {}", description)
}
