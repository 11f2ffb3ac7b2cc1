#![forbid(unsafe_code)]

//! TOML command tree definitions
//!
//! A definition mirrors the construction API: each table is a command with
//! optional `description`, `options`, `flags`, `arguments` and nested
//! `commands`. Building one goes through [`CommandTree`] so the same shape
//! rules apply.
//!
//! ```toml
//! name = "git"
//! description = "Version control"
//!
//! [commands.remote.commands.add]
//! description = "Add a remote"
//! flags = { f = "Fetch after adding" }
//! arguments = [
//!     { name = "name", description = "Remote name" },
//!     { name = "url", description = "Remote URL" },
//! ]
//! ```

use crate::tree::{ArgumentDescriptor, CommandTree, DefinitionError, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a tree definition
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read definition file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse definition: {0}")]
    Parse(#[from] toml::de::Error),

    /// The definition breaks a tree shape rule; `command` is the dotted path
    #[error("invalid command '{command}': {source}")]
    Invalid {
        command: String,
        #[source]
        source: DefinitionError,
    },
}

fn default_root_name() -> String {
    "root".to_string()
}

fn default_required() -> bool {
    true
}

/// A whole command tree; the root's keys sit at the top level of the file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TreeDefinition {
    #[serde(default = "default_root_name")]
    pub name: String,

    #[serde(flatten)]
    pub root: CommandDefinition,
}

/// One command and everything below it
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommandDefinition {
    #[serde(default)]
    pub description: Option<String>,

    /// Option name to description
    #[serde(default)]
    pub options: BTreeMap<String, String>,

    /// Flag name to description
    #[serde(default)]
    pub flags: BTreeMap<String, String>,

    #[serde(default)]
    pub arguments: Vec<ArgumentDefinition>,

    #[serde(default)]
    pub commands: BTreeMap<String, CommandDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArgumentDefinition {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_required")]
    pub required: bool,

    #[serde(default)]
    pub list: bool,
}

impl From<&ArgumentDefinition> for ArgumentDescriptor {
    fn from(def: &ArgumentDefinition) -> Self {
        ArgumentDescriptor::new(&def.name, &def.description, def.required, def.list)
    }
}

impl TreeDefinition {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a definition file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded tree definition");
        Self::from_toml_str(&content)
    }

    /// Builds the command tree described by this definition
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first command whose
    /// arguments or subcommands break the tree shape rules.
    pub fn build(&self) -> Result<CommandTree, ConfigError> {
        let mut tree = CommandTree::new(&self.name);
        let root = tree.root();
        apply(&mut tree, root, &self.name, &self.root)?;
        debug!(commands = tree.command_count(), "built command tree");
        Ok(tree)
    }
}

fn apply(
    tree: &mut CommandTree,
    id: NodeId,
    path: &str,
    def: &CommandDefinition,
) -> Result<(), ConfigError> {
    let invalid = |source| ConfigError::Invalid {
        command: path.to_string(),
        source,
    };

    let mut node = tree.node_mut(id);
    if let Some(description) = &def.description {
        node.description(description);
    }
    for (name, description) in &def.options {
        node.option(name, description);
    }
    for (name, description) in &def.flags {
        node.flag(name, description);
    }
    for argument in &def.arguments {
        node.argument(argument.into()).map_err(invalid)?;
    }

    for (name, child) in &def.commands {
        let child_id = tree.get_or_create_child(id, name).map_err(invalid)?;
        apply(tree, child_id, &format!("{}.{}", path, name), child)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::DEFAULT_DESCRIPTION;

    const GIT: &str = r#"
name = "git"
description = "Version control"
flags = { version = "Print version" }

[commands.remote]
description = "Manage remotes"
options = { C = "Run as if started in this path" }

[commands.remote.commands.add]
description = "Add a remote"
flags = { f = "Fetch after adding" }
arguments = [
    { name = "name", description = "Remote name" },
    { name = "url", description = "Remote URL" },
]

[commands.log]
arguments = [{ name = "paths", required = false, list = true }]
"#;

    #[test]
    fn test_parse_definition() {
        let def = TreeDefinition::from_toml_str(GIT).unwrap();
        assert_eq!(def.name, "git");
        assert_eq!(def.root.description.as_deref(), Some("Version control"));
        assert_eq!(def.root.commands.len(), 2);

        let log = &def.root.commands["log"];
        assert_eq!(log.arguments.len(), 1);
        assert!(!log.arguments[0].required);
        assert!(log.arguments[0].list);

        let add = &def.root.commands["remote"].commands["add"];
        assert!(add.arguments.iter().all(|a| a.required && !a.list));
    }

    #[test]
    fn test_build_tree() {
        let tree = TreeDefinition::from_toml_str(GIT).unwrap().build().unwrap();
        assert_eq!(tree.command_count(), 4);

        let root = tree.node(tree.root());
        assert_eq!(root.name(), "git");
        assert!(root.has_flag("version"));

        let add = tree.node(tree.find(&["remote", "add"]).unwrap());
        assert_eq!(add.description(), "Add a remote");
        assert_eq!(add.arguments().len(), 2);
        assert_eq!(add.arguments()[1].name(), "url");

        let log = tree.node(tree.find(&["log"]).unwrap());
        assert_eq!(log.description(), DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_default_root_name() {
        let tree = TreeDefinition::from_toml_str("").unwrap().build().unwrap();
        assert_eq!(tree.node(tree.root()).name(), "root");
        assert_eq!(tree.command_count(), 1);
    }

    #[test]
    fn test_branch_with_arguments_rejected() {
        let content = r#"
name = "app"
arguments = [{ name = "x" }]

[commands.sub]
"#;
        let err = TreeDefinition::from_toml_str(content)
            .unwrap()
            .build()
            .unwrap_err();
        match err {
            ConfigError::Invalid { command, source } => {
                assert_eq!(command, "app");
                assert!(matches!(source, DefinitionError::BranchHasArguments { .. }));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_required_after_optional_rejected_with_path() {
        let content = r#"
[commands.get.commands.user]
arguments = [{ name = "a", required = false }, { name = "b" }]
"#;
        let err = TreeDefinition::from_toml_str(content)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref command, source: DefinitionError::RequiredAfterOptional { .. } }
                if command == "root.get.user"
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let err = TreeDefinition::from_toml_str("name = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
