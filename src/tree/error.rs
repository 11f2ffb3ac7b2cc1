#![forbid(unsafe_code)]

//! Errors raised while defining a command tree

use thiserror::Error;

/// A command tree definition that breaks the shape rules
///
/// These are programming errors in the CLI definition, caught before any
/// argv is parsed. The offending call leaves the tree unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// A subcommand was requested on a command that takes arguments
    #[error("cannot add subcommand '{child}' to command '{command}': it already declares arguments")]
    BranchHasArguments { command: String, child: String },

    /// An argument was added to a command that routes to subcommands
    #[error("cannot add argument '<{argument}>' to command '{command}': it already has subcommands")]
    LeafHasChildren { command: String, argument: String },

    #[error(
        "cannot add required argument '<{argument}>' to command '{command}' after optional arguments"
    )]
    RequiredAfterOptional { command: String, argument: String },

    #[error(
        "cannot add argument '<{argument}>' to command '{command}' after list argument '<{list}>'"
    )]
    ArgumentAfterList {
        command: String,
        argument: String,
        list: String,
    },

    #[error("command '{command}' already declares argument '<{argument}>'")]
    DuplicateArgument { command: String, argument: String },
}
