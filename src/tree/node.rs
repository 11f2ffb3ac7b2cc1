#![forbid(unsafe_code)]

//! A single point in the command tree

use super::argument::ArgumentDescriptor;
use super::command_tree::NodeId;
use crate::logic::CommandLogic;
use std::collections::BTreeMap;
use std::fmt;

/// Description given to commands that never had one set
pub const DEFAULT_DESCRIPTION: &str = "no desc provided";

/// A command in the tree
///
/// A node is either a branch (it has subcommands) or a leaf (it may declare
/// positional arguments). Options and flags are allowed on both.
pub struct CommandNode {
    pub(super) name: String,
    pub(super) description: String,
    pub(super) parent: Option<NodeId>,
    pub(super) children: BTreeMap<String, NodeId>,
    pub(super) options: BTreeMap<String, String>,
    pub(super) flags: BTreeMap<String, String>,
    pub(super) arguments: Vec<ArgumentDescriptor>,
    pub(super) logic: Option<Box<dyn CommandLogic>>,
}

impl CommandNode {
    pub(super) fn new(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        CommandNode {
            name: name.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            parent,
            children: BTreeMap::new(),
            options: BTreeMap::new(),
            flags: BTreeMap::new(),
            arguments: Vec::new(),
            logic: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The parent command, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Subcommands keyed by name
    pub fn children(&self) -> &BTreeMap<String, NodeId> {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    /// Options (which take a value) mapped to their descriptions
    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Flags (presence markers) mapped to their descriptions
    pub fn flags(&self) -> &BTreeMap<String, String> {
        &self.flags
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// Positional argument descriptors in registration order
    pub fn arguments(&self) -> &[ArgumentDescriptor] {
        &self.arguments
    }

    /// The execution logic bound to this command, if any
    pub fn logic(&self) -> Option<&dyn CommandLogic> {
        self.logic.as_deref()
    }

    /// True when the command routes to subcommands
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when the command has no subcommands and binds positional arguments
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("options", &self.options)
            .field("flags", &self.flags)
            .field("arguments", &self.arguments)
            .field("logic", &self.logic.is_some())
            .finish()
    }
}
