use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notice {
    Success,
    Info,
    Warning,
    Error,
}

impl Notice {
    fn kind(self) -> &'static str {
        match self {
            Notice::Success => "success",
            Notice::Info => "info",
            Notice::Warning => "warning",
            Notice::Error => "error",
        }
    }

    fn render(self, msg: &str) -> String {
        match self {
            Notice::Success => format!("{} {}", "✓".green(), msg),
            Notice::Info => msg.to_string(),
            Notice::Warning => format!("{} {}", "⚠".yellow(), msg),
            Notice::Error => format!("{} {}", "✗".red(), msg),
        }
    }
}

/// Writes command results to stdout, as text for people or one JSON document per line.
///
/// Logs go to stderr through tracing and never mix with this stream.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.notice(Notice::Success, msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.notice(Notice::Info, msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.notice(Notice::Warning, msg.as_ref());
    }

    /// Emit a result: `human` renders it as text, JSON modes serialize `value`
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce()) {
        if self.quiet {
            return;
        }
        if self.is_human() {
            human();
            return;
        }
        match serde_json::to_value(value) {
            Ok(data) => self.write_json(&data),
            Err(e) => self.notice(Notice::Error, &format!("Failed to serialize output: {}", e)),
        }
    }

    fn notice(&self, notice: Notice, msg: &str) {
        // Errors survive --quiet
        if self.quiet && notice != Notice::Error {
            return;
        }
        match (self.format, notice) {
            (OutputFormat::Human, Notice::Error) => eprintln!("{}", notice.render(msg)),
            (OutputFormat::Human, _) => println!("{}", notice.render(msg)),
            _ => self.write_json(&json!({ "type": notice.kind(), "message": msg })),
        }
    }

    fn write_json(&self, data: &Value) {
        let text = if self.format == OutputFormat::JsonPretty {
            serde_json::to_string_pretty(data)
        } else {
            serde_json::to_string(data)
        };
        println!("{}", text.unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_kinds() {
        assert_eq!(Notice::Warning.kind(), "warning");
        assert!(Notice::Success.render("saved").ends_with("saved"));
        assert_eq!(Notice::Info.render("plain"), "plain");
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::from_str("json-pretty", false).unwrap(), OutputFormat::JsonPretty);
        assert!(Output::new(OutputFormat::Human, false).is_human());
        assert!(!Output::new(OutputFormat::Json, false).is_human());
    }
}
