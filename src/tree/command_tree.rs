#![forbid(unsafe_code)]

//! Arena that owns every command of a CLI
//!
//! The tree is built once at startup and then only read. Handles returned by
//! one tree are meaningless for another; indexing a tree with a foreign
//! [`NodeId`] may panic.

use super::argument::ArgumentDescriptor;
use super::error::DefinitionError;
use super::node::CommandNode;
use crate::logic::CommandLogic;
use tracing::trace;

/// Handle to a node inside a [`CommandTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// The full command tree, rooted at a single command
///
/// The root is created with the tree and is the only node without a parent.
#[derive(Debug)]
pub struct CommandTree {
    nodes: Vec<CommandNode>,
}

impl CommandTree {
    const ROOT: NodeId = NodeId(0);

    /// Creates a tree holding only its root command
    pub fn new(root_name: impl Into<String>) -> Self {
        CommandTree {
            nodes: vec![CommandNode::new(root_name, None)],
        }
    }

    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Returns the node behind `id`
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this tree.
    pub fn node(&self, id: NodeId) -> &CommandNode {
        &self.nodes[id.0]
    }

    /// Fluent mutable access to one node
    pub fn node_mut(&mut self, id: NodeId) -> NodeMut<'_> {
        NodeMut { tree: self, id }
    }

    /// Number of commands in the tree, root included
    pub fn command_count(&self) -> usize {
        self.nodes.len()
    }

    /// All node handles, root first
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Returns the subcommand `name` of `parent`, creating an empty one if needed
    ///
    /// # Errors
    ///
    /// Fails if `parent` already declares positional arguments.
    pub fn get_or_create_child(
        &mut self,
        parent: NodeId,
        name: &str,
    ) -> Result<NodeId, DefinitionError> {
        let node = self.node(parent);
        if let Some(existing) = node.child(name) {
            return Ok(existing);
        }
        if !node.arguments.is_empty() {
            return Err(DefinitionError::BranchHasArguments {
                command: node.name.clone(),
                child: name.to_string(),
            });
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(CommandNode::new(name, Some(parent)));
        self.nodes[parent.0].children.insert(name.to_string(), id);
        trace!(parent = parent.0, child = name, "created subcommand");
        Ok(id)
    }

    /// Appends a positional argument descriptor to `id`
    ///
    /// # Errors
    ///
    /// Fails if the command has subcommands, if a required argument would
    /// follow an optional one, if anything would follow a list argument, or
    /// if the name is already taken. The command is left unchanged on failure.
    pub fn add_argument(
        &mut self,
        id: NodeId,
        argument: ArgumentDescriptor,
    ) -> Result<(), DefinitionError> {
        let node = &mut self.nodes[id.0];
        if !node.children.is_empty() {
            return Err(DefinitionError::LeafHasChildren {
                command: node.name.clone(),
                argument: argument.name().to_string(),
            });
        }
        if node.arguments.iter().any(|a| a.name() == argument.name()) {
            return Err(DefinitionError::DuplicateArgument {
                command: node.name.clone(),
                argument: argument.name().to_string(),
            });
        }
        if let Some(last) = node.arguments.last() {
            if last.is_list() {
                return Err(DefinitionError::ArgumentAfterList {
                    command: node.name.clone(),
                    argument: argument.name().to_string(),
                    list: last.name().to_string(),
                });
            }
            if argument.is_required() && !last.is_required() {
                return Err(DefinitionError::RequiredAfterOptional {
                    command: node.name.clone(),
                    argument: argument.name().to_string(),
                });
            }
        }

        node.arguments.push(argument);
        Ok(())
    }

    /// Registers an option; re-registering a name replaces its description
    pub fn add_option(&mut self, id: NodeId, name: impl Into<String>, description: impl Into<String>) {
        self.nodes[id.0]
            .options
            .insert(name.into(), description.into());
    }

    /// Registers a flag; re-registering a name replaces its description
    pub fn add_flag(&mut self, id: NodeId, name: impl Into<String>, description: impl Into<String>) {
        self.nodes[id.0].flags.insert(name.into(), description.into());
    }

    pub fn set_description(&mut self, id: NodeId, description: impl Into<String>) {
        self.nodes[id.0].description = description.into();
    }

    /// Attaches the execution logic run when `id` is resolved
    pub fn bind_logic(&mut self, id: NodeId, logic: impl CommandLogic + 'static) {
        self.nodes[id.0].logic = Some(Box::new(logic));
    }

    /// Follows a subcommand path from the root
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<NodeId> {
        path.iter()
            .try_fold(self.root(), |id, name| self.node(id).child(name.as_ref()))
    }

    /// Command names from the root down to `id`
    pub fn path(&self, id: NodeId) -> Vec<&str> {
        let mut names: Vec<&str> = self.ancestors(id).map(|a| self.node(a).name()).collect();
        names.reverse();
        names
    }

    /// `id` followed by each of its ancestors up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), |current| self.node(*current).parent())
    }
}

/// Mutable view of one node, for chained definitions
///
/// ```
/// use cmdtree::tree::{ArgumentDescriptor, CommandTree};
///
/// let mut tree = CommandTree::new("app");
/// let root = tree.root();
/// let mut user = tree.node_mut(root).child("user").unwrap();
/// user.description("Show a user")
///     .flag("v", "Verbose output")
///     .argument(ArgumentDescriptor::required("id", "User id"))
///     .unwrap();
/// assert_eq!(tree.path(tree.find(&["user"]).unwrap()), ["app", "user"]);
/// ```
pub struct NodeMut<'t> {
    tree: &'t mut CommandTree,
    id: NodeId,
}

impl<'t> NodeMut<'t> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.tree.set_description(self.id, description);
        self
    }

    pub fn option(&mut self, name: impl Into<String>, description: impl Into<String>) -> &mut Self {
        self.tree.add_option(self.id, name, description);
        self
    }

    pub fn flag(&mut self, name: impl Into<String>, description: impl Into<String>) -> &mut Self {
        self.tree.add_flag(self.id, name, description);
        self
    }

    pub fn argument(&mut self, argument: ArgumentDescriptor) -> Result<&mut Self, DefinitionError> {
        self.tree.add_argument(self.id, argument)?;
        Ok(self)
    }

    pub fn bind_logic(&mut self, logic: impl CommandLogic + 'static) -> &mut Self {
        self.tree.bind_logic(self.id, logic);
        self
    }

    /// Moves to the subcommand `name`, creating it if needed
    pub fn child(self, name: &str) -> Result<NodeMut<'t>, DefinitionError> {
        let id = self.tree.get_or_create_child(self.id, name)?;
        Ok(NodeMut {
            tree: self.tree,
            id,
        })
    }
}
