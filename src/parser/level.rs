#![forbid(unsafe_code)]

//! Resolution of a single command level
//!
//! Each call resolves one node and binds its options, flags and arguments.
//! Deep subcommand chains are handled by calling again with the resolved
//! node as the new parent and the same cursor.

use super::context::{ArgValue, Context};
use super::error::{ParseError, ParseErrorKind};
use super::token::{Token, classify, cluster_keys};
use crate::tree::{CommandNode, CommandTree, NodeId};
use tracing::{debug, trace};

/// A resolved command together with what was bound to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub node: NodeId,
    pub context: Context,
}

/// Parses the next command level of `argv`, starting at `cursor`
///
/// With no `parent`, the level resolves to the root and `argv[cursor]` is
/// taken as the program name. Otherwise `argv[cursor]` must name a
/// subcommand of `parent`.
///
/// Returns `Ok(None)` once the cursor has reached the end of `argv`. On
/// success the cursor moves past every token this level consumed; on error
/// it is left untouched.
///
/// # Errors
///
/// Returns a [`ParseError`] attributed to `parent` when the subcommand is
/// unknown, and to the resolved command for option and argument problems.
pub fn parse_level<S: AsRef<str>>(
    tree: &CommandTree,
    parent: Option<NodeId>,
    argv: &[S],
    cursor: &mut usize,
) -> Result<Option<Level>, ParseError> {
    let remaining = match argv.get(*cursor..) {
        Some(remaining) if !remaining.is_empty() => remaining,
        _ => return Ok(None),
    };

    let id = match parent {
        None => tree.root(),
        Some(parent) => {
            let name = remaining[0].as_ref();
            tree.node(parent).child(name).ok_or_else(|| {
                debug!(subcommand = name, "undefined subcommand");
                ParseError::new(
                    parent,
                    ParseErrorKind::UndefinedSubcommand {
                        name: name.to_string(),
                    },
                )
            })?
        }
    };

    let mut scanner = LevelScanner {
        id,
        command: tree.node(id),
        tokens: remaining,
        position: 1,
        context: Context::new(),
    };
    scanner.scan_options()?;
    if scanner.command.is_leaf() {
        scanner.bind_arguments()?;
    }

    let consumed = scanner.position;
    *cursor += consumed;
    debug!(
        command = scanner.command.name(),
        consumed,
        cursor = *cursor,
        "resolved command level"
    );

    Ok(Some(Level {
        node: id,
        context: scanner.context,
    }))
}

/// Walks the tokens of one level; `position` 0 is the command's own name
struct LevelScanner<'t, 'a, S> {
    id: NodeId,
    command: &'t CommandNode,
    tokens: &'a [S],
    position: usize,
    context: Context,
}

impl<S: AsRef<str>> LevelScanner<'_, '_, S> {
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        debug!(command = self.command.name(), error = %kind, "parse failed");
        ParseError::new(self.id, kind)
    }

    /// Consumes options and flags until the first positional token
    fn scan_options(&mut self) -> Result<(), ParseError> {
        let tokens = self.tokens;
        while let Some(token) = tokens.get(self.position) {
            let token = token.as_ref();
            match classify(token) {
                Token::Long(key) => {
                    trace!(token, "long option");
                    self.position += 1;
                    if self.command.has_option(key) {
                        self.take_option_value(key, "--")?;
                    } else if self.command.has_flag(key) {
                        self.context.set_flag(key);
                    } else {
                        return Err(self.error(ParseErrorKind::UndefinedOption {
                            option: format!("--{}", key),
                            command: self.command.name().to_string(),
                        }));
                    }
                }
                Token::Short(cluster) => {
                    trace!(token, "short cluster");
                    self.position += 1;
                    self.scan_cluster(cluster)?;
                }
                Token::Positional(_) => break,
            }
        }
        Ok(())
    }

    /// Every key but the last must be a flag; the last may also be an option
    fn scan_cluster(&mut self, cluster: &str) -> Result<(), ParseError> {
        let count = cluster.len();
        for (index, key) in cluster_keys(cluster).enumerate() {
            if self.command.has_flag(key) {
                self.context.set_flag(key);
            } else if index + 1 < count {
                return Err(self.error(ParseErrorKind::UndefinedFlag {
                    flag: format!("-{}", key),
                    command: self.command.name().to_string(),
                }));
            } else if self.command.has_option(key) {
                self.take_option_value(key, "-")?;
            } else {
                return Err(self.error(ParseErrorKind::UndefinedOption {
                    option: format!("-{}", key),
                    command: self.command.name().to_string(),
                }));
            }
        }
        Ok(())
    }

    fn take_option_value(&mut self, key: &str, dashes: &str) -> Result<(), ParseError> {
        match self.tokens.get(self.position) {
            Some(value) => {
                self.context.set_option(key, value.as_ref());
                self.position += 1;
                Ok(())
            }
            None => Err(self.error(ParseErrorKind::MissingOptionValue {
                option: format!("{}{}", dashes, key),
            })),
        }
    }

    /// Binds the rest of the tokens to the command's argument descriptors
    fn bind_arguments(&mut self) -> Result<(), ParseError> {
        let command = self.command;
        let total = self.tokens.len();
        for descriptor in command.arguments() {
            if self.position >= total {
                if descriptor.is_required() {
                    return Err(self.error(ParseErrorKind::MissingArgument {
                        argument: descriptor.name().to_string(),
                    }));
                }
                // Required descriptors come first, so the rest are optional too
                break;
            }

            let value = if descriptor.is_list() {
                let values = self.tokens[self.position..]
                    .iter()
                    .map(|t| t.as_ref().to_string())
                    .collect();
                self.position = total;
                ArgValue::List(values)
            } else {
                let value = self.tokens[self.position].as_ref().to_string();
                self.position += 1;
                ArgValue::Single(value)
            };
            trace!(argument = descriptor.name(), ?value, "bound argument");
            self.context.bind_argument(descriptor.name(), value);
        }

        if self.position < total {
            return Err(self.error(ParseErrorKind::TooManyArguments {
                command: self.command.name().to_string(),
                extra: total - self.position,
            }));
        }
        Ok(())
    }
}
