//! Declarative command tree definitions

pub mod definition;

pub use definition::{ArgumentDefinition, CommandDefinition, ConfigError, TreeDefinition};
