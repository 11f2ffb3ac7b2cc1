#![forbid(unsafe_code)]

//! cmdtree: command trees and level-by-level argv parsing
//!
//! A [`CommandTree`](tree::CommandTree) describes a git-style CLI: branch
//! commands route to subcommands, leaf commands take positional arguments,
//! and any command may declare options and flags. The parser resolves one
//! tree level per call, so arbitrarily deep subcommand chains are walked by
//! feeding each resolved command back in as the next parent.

pub mod cli;
pub mod config;
pub mod driver;
pub mod logic;
pub mod output;
pub mod parser;
pub mod tree;
pub mod usage;
