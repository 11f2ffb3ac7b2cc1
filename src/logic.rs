#![forbid(unsafe_code)]

//! Execution logic bound to commands
//!
//! The parser never calls into this; the [`driver`](crate::driver) does.

use crate::parser::Context;

/// Business logic attached to a command
///
/// `common` runs for every resolved level on the way down to the final
/// command; `execute` runs once, on the final leaf only.
pub trait CommandLogic: Send + Sync {
    /// Called when this command, or one of its subcommands, is requested
    ///
    /// Return `false` to stop before any further subcommand is run.
    fn common(&self, context: &Context) -> bool {
        let _ = context;
        true
    }

    /// Called when this command is the last one on the command line
    ///
    /// Returns whether the command succeeded.
    fn execute(&self, context: &Context) -> bool;
}

/// Plain functions and closures work as leaf logic
impl<F> CommandLogic for F
where
    F: Fn(&Context) -> bool + Send + Sync,
{
    fn execute(&self, context: &Context) -> bool {
        self(context)
    }
}
