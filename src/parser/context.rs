#![forbid(unsafe_code)]

//! Bindings produced for one resolved command level

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Value bound to a positional argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Single(String),
    /// Everything a trailing list argument consumed, in order
    List(Vec<String>),
}

impl ArgValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ArgValue::Single(value) => Some(value),
            ArgValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ArgValue::Single(_) => None,
            ArgValue::List(values) => Some(values),
        }
    }

    /// All bound values; a single value is a one-element slice
    pub fn values(&self) -> &[String] {
        match self {
            ArgValue::Single(value) => std::slice::from_ref(value),
            ArgValue::List(values) => values,
        }
    }
}

/// Arguments, options and flags bound at one command level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Context {
    arguments: BTreeMap<String, ArgValue>,
    options: BTreeMap<String, String>,
    flags: BTreeSet<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn argument(&self, name: &str) -> Option<&ArgValue> {
        self.arguments.get(name)
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    pub fn arguments(&self) -> &BTreeMap<String, ArgValue> {
        &self.arguments
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    pub fn flags(&self) -> &BTreeSet<String> {
        &self.flags
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.options.is_empty() && self.flags.is_empty()
    }

    pub(crate) fn bind_argument(&mut self, name: &str, value: ArgValue) {
        self.arguments.insert(name.to_string(), value);
    }

    /// A repeated option keeps its last value
    pub(crate) fn set_option(&mut self, name: &str, value: &str) {
        self.options.insert(name.to_string(), value.to_string());
    }

    pub(crate) fn set_flag(&mut self, name: &str) {
        self.flags.insert(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_value_accessors() {
        let single = ArgValue::Single("42".to_string());
        assert_eq!(single.as_single(), Some("42"));
        assert_eq!(single.as_list(), None);
        assert_eq!(single.values(), ["42".to_string()]);

        let list = ArgValue::List(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(list.as_single(), None);
        assert_eq!(list.as_list().map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_context_serializes_flat_values() {
        let mut context = Context::new();
        context.bind_argument("id", ArgValue::Single("42".to_string()));
        context.bind_argument("files", ArgValue::List(vec!["a".to_string()]));
        context.set_option("level", "3");
        context.set_flag("v");

        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json["arguments"]["id"], "42");
        assert_eq!(json["arguments"]["files"][0], "a");
        assert_eq!(json["options"]["level"], "3");
        assert_eq!(json["flags"][0], "v");
    }

    #[test]
    fn test_repeated_option_keeps_last_value() {
        let mut context = Context::new();
        context.set_option("level", "1");
        context.set_option("level", "2");
        assert_eq!(context.option("level"), Some("2"));
        assert!(!context.is_empty());
    }
}
