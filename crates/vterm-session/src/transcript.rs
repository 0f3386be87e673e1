//! The append-only transcript: what the terminal has shown so far.

use serde::Serialize;
use vterm_platform::SystemTime;

/// One executed command and what it printed.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptRecord {
    /// The line as the user typed it.
    pub command: String,
    /// The text shown below the prompt line.
    pub output: String,
    /// Whether the output is an error message.
    #[serde(rename = "isError")]
    pub is_error: bool,
    /// When the command was submitted.
    pub timestamp: SystemTime,
}

impl TranscriptRecord {
    pub fn ok(command: impl Into<String>, output: impl Into<String>, timestamp: SystemTime) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
            is_error: false,
            timestamp,
        }
    }

    pub fn error(
        command: impl Into<String>,
        output: impl Into<String>,
        timestamp: SystemTime,
    ) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
            is_error: true,
            timestamp,
        }
    }
}

/// Render records the way a copy-to-clipboard export would:
/// `$ command`, its output, blank line between entries.
pub fn render_text(records: &[TranscriptRecord]) -> String {
    records
        .iter()
        .map(|r| format!("$ {}\n{}", r.command, r.output))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vterm_platform::{Clock, FixedClock};

    #[test]
    fn render_text_joins_with_blank_lines() {
        let t = FixedClock::default_fixture().now();
        let records = vec![
            TranscriptRecord::ok("pwd", "/home/admin", t),
            TranscriptRecord::ok("whoami", "admin", t),
        ];
        assert_eq!(
            render_text(&records),
            "$ pwd\n/home/admin\n\n$ whoami\nadmin"
        );
    }

    #[test]
    fn serializes_is_error_in_camel_case() {
        let t = FixedClock::default_fixture().now();
        let json = serde_json::to_string(&TranscriptRecord::error("nope", "bash: nope", t)).unwrap();
        assert!(json.contains("\"isError\":true"));
        assert!(json.contains("\"command\":\"nope\""));
    }
}
