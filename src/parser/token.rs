#![forbid(unsafe_code)]

//! Token classification for argv entries

use regex::Regex;
use std::sync::LazyLock;

static LONG_OPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-(-[a-zA-Z0-9]+)+$").expect("long option pattern compiles"));

static SHORT_CLUSTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-[a-zA-Z]+$").expect("short cluster pattern compiles"));

/// What a single argv entry is, as far as option scanning is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `--log-level`, carrying the key after the leading `--`
    Long(&'a str),
    /// `-abc`, carrying the characters after the dash
    Short(&'a str),
    /// Anything else; ends option scanning for the current level
    Positional(&'a str),
}

/// Classifies one argv entry
pub fn classify(token: &str) -> Token<'_> {
    if LONG_OPTION.is_match(token) {
        Token::Long(&token[2..])
    } else if SHORT_CLUSTER.is_match(token) {
        Token::Short(&token[1..])
    } else {
        Token::Positional(token)
    }
}

/// Splits a short cluster into its one-character keys
///
/// The cluster pattern only admits ASCII letters, so every key is one byte.
pub(crate) fn cluster_keys(cluster: &str) -> impl Iterator<Item = &str> {
    (0..cluster.len()).map(move |i| &cluster[i..i + 1])
}
