#![forbid(unsafe_code)]

//! Run loop that parses argv level by level and dispatches to bound logic

use crate::parser::{Level, ParseError, levels};
use crate::tree::{CommandTree, NodeId};
use thiserror::Error;
use tracing::{debug, info};

/// Exit codes for a finished run
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// How a run that got past parsing ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The final command's `execute` reported success
    Completed { node: NodeId },
    /// A `common` hook asked to stop before going deeper
    Halted { node: NodeId },
    /// The final command's `execute` reported failure
    Failed { node: NodeId },
}

impl RunOutcome {
    pub fn node(&self) -> NodeId {
        match self {
            RunOutcome::Completed { node }
            | RunOutcome::Halted { node }
            | RunOutcome::Failed { node } => *node,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Completed { .. } | RunOutcome::Halted { .. } => EXIT_SUCCESS,
            RunOutcome::Failed { .. } => EXIT_FAILURE,
        }
    }
}

/// Errors that stop a run before the final command executes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The command line ended on a command that only routes to subcommands
    #[error("command '{command}' requires a subcommand")]
    MissingSubcommand { node: NodeId, command: String },

    #[error("command '{command}' has no logic to execute")]
    Unbound { node: NodeId, command: String },

    #[error("empty command line")]
    Empty,
}

impl RunError {
    /// The command whose usage explains this error
    pub fn node(&self) -> Option<NodeId> {
        match self {
            RunError::Parse(err) => Some(err.node()),
            RunError::MissingSubcommand { node, .. } | RunError::Unbound { node, .. } => {
                Some(*node)
            }
            RunError::Empty => None,
        }
    }
}

/// Parses `argv` against `tree` and runs the bound logic
///
/// Every resolved level with bound logic gets its `common` hook called, in
/// order from the root. The last command must be a leaf; its `execute` is
/// called exactly once.
///
/// # Errors
///
/// Returns the first parse error, or a [`RunError`] when the command line
/// ends on a branch or on a leaf with no logic.
pub fn run<S: AsRef<str>>(tree: &CommandTree, argv: &[S]) -> Result<RunOutcome, RunError> {
    let mut last: Option<Level> = None;

    for level in levels(tree, argv) {
        let level = level?;
        let node = tree.node(level.node);
        if let Some(logic) = node.logic()
            && !logic.common(&level.context)
        {
            info!(command = node.name(), "halted by command");
            return Ok(RunOutcome::Halted { node: level.node });
        }
        last = Some(level);
    }

    let Some(Level { node: id, context }) = last else {
        return Err(RunError::Empty);
    };
    let node = tree.node(id);
    if node.is_branch() {
        return Err(RunError::MissingSubcommand {
            node: id,
            command: node.name().to_string(),
        });
    }
    let Some(logic) = node.logic() else {
        return Err(RunError::Unbound {
            node: id,
            command: node.name().to_string(),
        });
    };

    debug!(command = node.name(), "executing");
    if logic.execute(&context) {
        Ok(RunOutcome::Completed { node: id })
    } else {
        Ok(RunOutcome::Failed { node: id })
    }
}
