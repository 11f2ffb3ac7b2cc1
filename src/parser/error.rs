#![forbid(unsafe_code)]

//! Errors reported while parsing argv

use crate::tree::NodeId;
use thiserror::Error;

/// A parse failure attributed to a command
///
/// `node` is the command whose usage should be shown: the parent when a
/// subcommand lookup fails, the resolved command when binding fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    node: NodeId,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(node: NodeId, kind: ParseErrorKind) -> Self {
        ParseError { node, kind }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("undefined subcommand '{name}'")]
    UndefinedSubcommand { name: String },

    /// `option` keeps the dash form it was written with, e.g. `--level` or `-o`
    #[error("please supply value for option '{option}'")]
    MissingOptionValue { option: String },

    #[error("undefined option/flag '{option}' for command '{command}'")]
    UndefinedOption { option: String, command: String },

    /// A non-final character of a short cluster is not a flag
    #[error("undefined flag '{flag}' for command '{command}'")]
    UndefinedFlag { flag: String, command: String },

    #[error("missing required argument '<{argument}>'")]
    MissingArgument { argument: String },

    #[error("too many arguments supplied for command '{command}'")]
    TooManyArguments { command: String, extra: usize },
}
