#![forbid(unsafe_code)]

//! Human-readable parse report with colorization support

use super::{LevelReport, ParseReport};
use crate::parser::ArgValue;
use crate::usage::dashed;
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

/// Human-readable output formatter
///
/// Prints one block per resolved command level followed by a status line.
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Format the report as plain text
    pub fn format(&self, report: &ParseReport) -> String {
        let mut buffer = NoColor::new(Vec::new());
        // In-memory writes cannot fail
        let _ = self.write(report, &mut buffer);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }

    /// Write the report to stdout, colored per the configured choice
    pub fn write_to_stdout(&self, report: &ParseReport) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write(report, &mut stdout)
    }

    pub fn write<W: WriteColor>(&self, report: &ParseReport, out: &mut W) -> io::Result<()> {
        for level in &report.levels {
            write_level(out, level)?;
            writeln!(out)?;
        }

        match (&report.error, &report.failed_command) {
            (Some(err), Some(command)) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
                write!(out, "Parse FAILED")?;
                out.reset()?;
                writeln!(out, " at '{}': {}", command, err)?;
            }
            _ => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
                write!(out, "Parse OK")?;
                out.reset()?;
                writeln!(
                    out,
                    ": {} level{}, {} of {} tokens consumed",
                    report.levels.len(),
                    if report.levels.len() == 1 { "" } else { "s" },
                    report.consumed,
                    report.total
                )?;
            }
        }
        Ok(())
    }
}

fn write_level<W: WriteColor>(out: &mut W, level: &LevelReport) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "{}", level.command())?;
    out.reset()?;

    let context = &level.context;
    if context.is_empty() {
        writeln!(out, "  (nothing bound)")?;
        return Ok(());
    }

    if !context.arguments().is_empty() {
        writeln!(out, "  arguments:")?;
        for (name, value) in context.arguments() {
            let rendered = match value {
                ArgValue::Single(value) => value.clone(),
                ArgValue::List(values) => format!("[{}]", values.join(", ")),
            };
            write_binding(out, &format!("<{}>", name), Some(rendered.as_str()))?;
        }
    }
    if !context.options().is_empty() {
        writeln!(out, "  options:")?;
        for (name, value) in context.options() {
            write_binding(out, &dashed(name), Some(value.as_str()))?;
        }
    }
    if !context.flags().is_empty() {
        writeln!(out, "  flags:")?;
        for name in context.flags() {
            write_binding(out, &dashed(name), None)?;
        }
    }
    Ok(())
}

fn write_binding<W: WriteColor>(out: &mut W, name: &str, value: Option<&str>) -> io::Result<()> {
    write!(out, "    ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "{}", name)?;
    out.reset()?;
    match value {
        Some(value) => writeln!(out, " = {}", value),
        None => writeln!(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{ArgumentDescriptor, CommandTree};

    fn sample_tree() -> CommandTree {
        let mut tree = CommandTree::new("app");
        let mut copy = tree.node_mut(tree.root()).child("copy").unwrap();
        copy.option("mode", "")
            .flag("v", "")
            .argument(ArgumentDescriptor::required("files", "").into_list())
            .unwrap();
        tree
    }

    #[test]
    fn test_format_success() {
        let tree = sample_tree();
        let report = ParseReport::collect(&tree, &["app", "copy", "-v", "--mode", "644", "a", "b"]);
        let output = HumanFormatter::new(ColorChoice::Never).format(&report);

        let expected = "app\n  (nothing bound)\n\n\
            app copy\n  arguments:\n    <files> = [a, b]\n\
            \x20 options:\n    --mode = 644\n\
            \x20 flags:\n    -v\n\n\
            Parse OK: 2 levels, 7 of 7 tokens consumed\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_failure() {
        let tree = sample_tree();
        let report = ParseReport::collect(&tree, &["app", "move"]);
        let output = HumanFormatter::new(ColorChoice::Never).format(&report);

        assert!(output.starts_with("app\n  (nothing bound)\n\n"));
        assert!(output.ends_with("Parse FAILED at 'app': undefined subcommand 'move'\n"));
    }
}
