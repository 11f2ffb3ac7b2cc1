#![forbid(unsafe_code)]

//! Command tree model
//!
//! A [`CommandTree`] owns every [`CommandNode`] of a CLI. Nodes refer to each
//! other through [`NodeId`] handles, so the parent link never owns anything.

mod argument;
mod command_tree;
mod error;
mod node;

pub use argument::ArgumentDescriptor;
pub use command_tree::{CommandTree, NodeId, NodeMut};
pub use error::DefinitionError;
pub use node::{CommandNode, DEFAULT_DESCRIPTION};
