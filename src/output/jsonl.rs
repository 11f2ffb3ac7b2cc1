#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line:
//! 1. One level record per resolved command, in argv order
//! 2. One status record

use super::ParseReport;
use crate::parser::Context;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the report as JSONL, one record per line
    pub fn format(&self, report: &ParseReport) -> String {
        let mut output = String::new();

        for level in &report.levels {
            let record = LevelRecord {
                record_type: "level",
                command: level.command(),
                context: &level.context,
            };
            push_record(&mut output, &record);
        }

        let status = StatusRecord {
            record_type: "status",
            passed: report.passed(),
            levels: report.levels.len(),
            consumed: report.consumed,
            total: report.total,
            error: report.error.as_ref().map(|err| err.to_string()),
            failed_command: report.failed_command.clone(),
        };
        push_record(&mut output, &status);

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

#[derive(Debug, Serialize)]
struct LevelRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    command: String,
    #[serde(flatten)]
    context: &'a Context,
}

#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    levels: usize,
    consumed: usize,
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failed_command: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ArgValue;
    use crate::tree::{ArgumentDescriptor, CommandTree};
    use serde_json::Value;

    fn parse_lines(output: &str) -> Vec<Value> {
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_format_levels_and_status() {
        let mut tree = CommandTree::new("app");
        let mut tag = tree.node_mut(tree.root()).child("tag").unwrap();
        tag.flag("f", "")
            .argument(ArgumentDescriptor::required("name", ""))
            .unwrap()
            .argument(ArgumentDescriptor::optional("commits", "").into_list())
            .unwrap();

        let report = ParseReport::collect(&tree, &["app", "tag", "-f", "v1", "abc", "def"]);
        let records = parse_lines(&JsonlFormatter::new().format(&report));

        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["type"], "level");
        assert_eq!(records[0]["command"], "app");
        assert_eq!(records[1]["command"], "app tag");
        assert_eq!(records[1]["arguments"]["name"], "v1");
        assert_eq!(records[1]["arguments"]["commits"][1], "def");
        assert_eq!(records[1]["flags"][0], "f");

        let status = &records[2];
        assert_eq!(status["type"], "status");
        assert_eq!(status["passed"], true);
        assert_eq!(status["consumed"], 6);
        assert!(status.get("error").is_none());
    }

    #[test]
    fn test_format_error_status() {
        let tree = CommandTree::new("app");
        let report = ParseReport::collect(&tree, &["app", "--nope"]);
        let records = parse_lines(&JsonlFormatter::new().format(&report));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["passed"], false);
        assert_eq!(
            records[0]["error"],
            "undefined option/flag '--nope' for command 'app'"
        );
        assert_eq!(records[0]["failed_command"], "app");
    }

    #[test]
    fn test_single_value_is_a_string() {
        let mut context = Context::new();
        context.bind_argument("id", ArgValue::Single("7".to_string()));
        let record = LevelRecord {
            record_type: "level",
            command: "app".to_string(),
            context: &context,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"type":"level","command":"app","arguments":{"id":"7"},"options":{},"flags":[]}"#
        );
    }
}
