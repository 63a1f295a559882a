//! Core diagnostic message types.

use resumark_source_map::Range;
use serde::{Deserialize, Serialize};

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An error that prevents completion
    Error,
    /// A warning that doesn't prevent completion but indicates a problem
    Warning,
    /// Informational message
    Info,
}

impl DiagnosticKind {
    fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
        }
    }
}

/// How detail items should be presented (tidyverse x/i bullet style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailKind {
    /// Error detail (✖ bullet)
    Error,
    /// Info detail (ℹ bullet)
    Info,
    /// Note detail (plain bullet)
    Note,
}

/// The content of a message or detail item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageContent {
    /// Plain text content
    Plain(String),
    /// Markdown content
    Markdown(String),
}

impl MessageContent {
    /// Get the raw string content for display
    pub fn as_str(&self) -> &str {
        match self {
            MessageContent::Plain(s) => s,
            MessageContent::Markdown(s) => s,
        }
    }

    /// Convert to JSON value with type information
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;
        match self {
            MessageContent::Plain(s) => json!({
                "type": "plain",
                "content": s
            }),
            MessageContent::Markdown(s) => json!({
                "type": "markdown",
                "content": s
            }),
        }
    }
}

impl From<String> for MessageContent {
    fn from(s: String) -> Self {
        MessageContent::Markdown(s)
    }
}

impl From<&str> for MessageContent {
    fn from(s: &str) -> Self {
        MessageContent::Markdown(s.to_string())
    }
}

/// A detail item in a diagnostic message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailItem {
    /// The kind of detail (error, info, note)
    pub kind: DetailKind,
    /// The content of the detail
    pub content: MessageContent,
    /// Optional source range this detail applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

/// A diagnostic message following tidyverse-style structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    /// Brief title for the message
    pub title: String,

    /// The kind of diagnostic (Error, Warning, Info)
    pub kind: DiagnosticKind,

    /// The problem statement (the "what" - using "must" or "can't")
    pub problem: Option<MessageContent>,

    /// Specific details (the "where/why")
    pub details: Vec<DetailItem>,

    /// Optional hints for fixing (ends with ?)
    pub hints: Vec<MessageContent>,

    /// Source range for this diagnostic, when it points at a span
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Range>,
}

impl DiagnosticMessage {
    /// Create a new diagnostic message with just a title and kind.
    ///
    /// Consider [`crate::DiagnosticMessageBuilder`] for structured messages.
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            problem: None,
            details: Vec::new(),
            hints: Vec::new(),
            location: None,
        }
    }

    /// Create an error diagnostic.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    /// Create a warning diagnostic.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    /// Render this message as text in tidyverse style.
    ///
    /// Format:
    /// ```text
    /// Error: title
    /// Problem statement here
    /// ✖ Error detail
    /// ℹ Info detail
    /// • Note detail
    /// ? Hint
    /// ```
    pub fn to_text(&self) -> String {
        use std::fmt::Write;

        let mut result = String::new();
        let _ = writeln!(result, "{}: {}", self.kind.label(), self.title);

        if let Some(problem) = &self.problem {
            let _ = writeln!(result, "{}", problem.as_str());
        }

        for detail in &self.details {
            let bullet = match detail.kind {
                DetailKind::Error => "✖",
                DetailKind::Info => "ℹ",
                DetailKind::Note => "•",
            };
            match detail.location {
                // Positions are 0-based internally; render 1-based.
                Some(range) => {
                    let _ = writeln!(
                        result,
                        "{} {} (line {}, column {})",
                        bullet,
                        detail.content.as_str(),
                        range.start.line + 1,
                        range.start.character + 1
                    );
                }
                None => {
                    let _ = writeln!(result, "{} {}", bullet, detail.content.as_str());
                }
            }
        }

        for hint in &self.hints {
            let _ = writeln!(result, "? {}", hint.as_str());
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_text_renders_all_parts() {
        let mut msg = DiagnosticMessage::error("Missing required metadata");
        msg.problem = Some("Every CV must carry contact information".into());
        msg.details.push(DetailItem {
            kind: DetailKind::Error,
            content: "`email_address` did not resolve".into(),
            location: None,
        });
        msg.hints.push("Set CV_EMAIL?".into());

        let text = msg.to_text();
        assert!(text.contains("Error: Missing required metadata"));
        assert!(text.contains("Every CV must carry contact information"));
        assert!(text.contains("✖ `email_address` did not resolve"));
        assert!(text.contains("? Set CV_EMAIL?"));
    }

    #[test]
    fn message_content_json_carries_type() {
        let content = MessageContent::Plain("hello".to_string());
        let json = content.to_json();
        assert_eq!(json["type"], "plain");
        assert_eq!(json["content"], "hello");
    }
}
