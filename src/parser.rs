#![forbid(unsafe_code)]

//! Level-by-level argv parsing
//!
//! [`parse_level`] resolves exactly one command per call. [`Levels`] keeps
//! calling it, feeding each resolved command back in as the next parent,
//! until argv is exhausted or an error occurs.

mod context;
mod error;
mod level;
pub mod token;

pub use context::{ArgValue, Context};
pub use error::{ParseError, ParseErrorKind};
pub use level::{Level, parse_level};

use crate::tree::{CommandTree, NodeId};
use std::iter::FusedIterator;

/// Iterator over the command levels of one argv
///
/// Yields each resolved level in order and stops after the first error.
pub struct Levels<'t, 'a, S> {
    tree: &'t CommandTree,
    argv: &'a [S],
    cursor: usize,
    parent: Option<NodeId>,
    done: bool,
}

impl<'t, 'a, S: AsRef<str>> Levels<'t, 'a, S> {
    /// Starts at `argv[0]`, which is taken as the program name
    pub fn new(tree: &'t CommandTree, argv: &'a [S]) -> Self {
        Levels {
            tree,
            argv,
            cursor: 0,
            parent: None,
            done: false,
        }
    }

    /// Number of argv entries consumed so far
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The last command resolved so far
    pub fn current(&self) -> Option<NodeId> {
        self.parent
    }
}

impl<S: AsRef<str>> Iterator for Levels<'_, '_, S> {
    type Item = Result<Level, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match parse_level(self.tree, self.parent, self.argv, &mut self.cursor) {
            Ok(Some(level)) => {
                self.parent = Some(level.node);
                Some(Ok(level))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<S: AsRef<str>> FusedIterator for Levels<'_, '_, S> {}

/// Shorthand for [`Levels::new`]
pub fn levels<'t, 'a, S: AsRef<str>>(tree: &'t CommandTree, argv: &'a [S]) -> Levels<'t, 'a, S> {
    Levels::new(tree, argv)
}
