#![forbid(unsafe_code)]

//! Reports of a parse run, for the `cmdtree parse` command

pub mod human;
pub mod jsonl;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;

use crate::parser::{Context, Levels, ParseError};
use crate::tree::CommandTree;

/// One resolved command level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelReport {
    /// Command names from the root down to this level
    pub path: Vec<String>,
    pub context: Context,
}

impl LevelReport {
    pub fn command(&self) -> String {
        self.path.join(" ")
    }
}

/// Everything learned from parsing one argv
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub levels: Vec<LevelReport>,
    pub error: Option<ParseError>,
    /// Path of the command the error is attributed to
    pub failed_command: Option<String>,
    /// Argv entries consumed before parsing stopped
    pub consumed: usize,
    pub total: usize,
}

impl ParseReport {
    /// Parses `argv` level by level, stopping at the first error
    pub fn collect<S: AsRef<str>>(tree: &CommandTree, argv: &[S]) -> Self {
        let mut walk = Levels::new(tree, argv);
        let mut levels = Vec::new();
        let mut error = None;

        for level in walk.by_ref() {
            match level {
                Ok(level) => levels.push(LevelReport {
                    path: tree.path(level.node).into_iter().map(String::from).collect(),
                    context: level.context,
                }),
                Err(err) => error = Some(err),
            }
        }

        let failed_command = error.as_ref().map(|err| tree.path(err.node()).join(" "));
        ParseReport {
            levels,
            error,
            failed_command,
            consumed: walk.cursor(),
            total: argv.len(),
        }
    }

    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}
