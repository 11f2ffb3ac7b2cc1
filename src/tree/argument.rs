#![forbid(unsafe_code)]

//! Positional argument descriptors

/// Describes one positional parameter of a leaf command
///
/// Descriptors are created while the CLI is being defined and never change
/// afterwards. Only the last descriptor of a command may be a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDescriptor {
    name: String,
    description: String,
    required: bool,
    list: bool,
}

impl ArgumentDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        list: bool,
    ) -> Self {
        ArgumentDescriptor {
            name: name.into(),
            description: description.into(),
            required,
            list,
        }
    }

    /// A required, single-valued argument
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description, true, false)
    }

    /// An optional, single-valued argument
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description, false, false)
    }

    /// Turns this descriptor into a trailing list argument
    pub fn into_list(mut self) -> Self {
        self.list = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_list(&self) -> bool {
        self.list
    }

    /// Renders the descriptor for a usage line: `<id>`, `<files>...`,
    /// `[<name>]` or `[<files>...]`
    pub fn synopsis(&self) -> String {
        let mut rendered = format!("<{}>", self.name);
        if self.list {
            rendered.push_str("...");
        }
        if !self.required {
            rendered = format!("[{}]", rendered);
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let id = ArgumentDescriptor::required("id", "User id");
        assert_eq!(id.name(), "id");
        assert_eq!(id.description(), "User id");
        assert!(id.is_required());
        assert!(!id.is_list());

        let files = ArgumentDescriptor::optional("files", "Input files").into_list();
        assert!(!files.is_required());
        assert!(files.is_list());
    }

    #[test]
    fn test_synopsis() {
        assert_eq!(ArgumentDescriptor::required("id", "").synopsis(), "<id>");
        assert_eq!(ArgumentDescriptor::optional("name", "").synopsis(), "[<name>]");
        assert_eq!(
            ArgumentDescriptor::required("files", "").into_list().synopsis(),
            "<files>..."
        );
        assert_eq!(
            ArgumentDescriptor::optional("files", "").into_list().synopsis(),
            "[<files>...]"
        );
    }
}
