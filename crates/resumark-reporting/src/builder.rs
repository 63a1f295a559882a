//! Builder API for diagnostic messages.

use crate::diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent};
use resumark_source_map::Range;

/// Builder for creating diagnostic messages following tidyverse
/// guidelines: title, problem statement, bulleted details, hints.
///
/// # Example
///
/// ```
/// use resumark_reporting::DiagnosticMessageBuilder;
///
/// let error = DiagnosticMessageBuilder::error("Missing required section")
///     .problem("A CV must list work experience")
///     .add_detail("no `# Experience` heading was found")
///     .add_hint("Add a `# Experience` section?")
///     .build();
///
/// assert_eq!(error.title, "Missing required section");
/// assert_eq!(error.details.len(), 1);
/// assert_eq!(error.hints.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticMessageBuilder {
    kind: DiagnosticKind,
    title: String,
    problem: Option<MessageContent>,
    details: Vec<DetailItem>,
    hints: Vec<MessageContent>,
    location: Option<Range>,
}

impl DiagnosticMessageBuilder {
    /// Create a new builder with the specified kind and title.
    pub fn new(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            problem: None,
            details: Vec::new(),
            hints: Vec::new(),
            location: None,
        }
    }

    /// Create an error diagnostic builder.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, title)
    }

    /// Create a warning diagnostic builder.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, title)
    }

    /// Create an info diagnostic builder.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Info, title)
    }

    /// Set the problem statement (the "must" or "can't" sentence).
    pub fn problem(mut self, content: impl Into<MessageContent>) -> Self {
        self.problem = Some(content.into());
        self
    }

    /// Add an error detail (✖ bullet).
    pub fn add_detail(mut self, content: impl Into<MessageContent>) -> Self {
        self.details.push(DetailItem {
            kind: DetailKind::Error,
            content: content.into(),
            location: None,
        });
        self
    }

    /// Add an error detail anchored at a source range.
    pub fn add_detail_at(mut self, content: impl Into<MessageContent>, location: Range) -> Self {
        self.details.push(DetailItem {
            kind: DetailKind::Error,
            content: content.into(),
            location: Some(location),
        });
        self
    }

    /// Add an info detail (ℹ bullet).
    pub fn add_info(mut self, content: impl Into<MessageContent>) -> Self {
        self.details.push(DetailItem {
            kind: DetailKind::Info,
            content: content.into(),
            location: None,
        });
        self
    }

    /// Add a hint (phrased as a question).
    pub fn add_hint(mut self, content: impl Into<MessageContent>) -> Self {
        self.hints.push(content.into());
        self
    }

    /// Anchor the whole message at a source range.
    pub fn at_location(mut self, location: Range) -> Self {
        self.location = Some(location);
        self
    }

    /// Build the final message.
    pub fn build(self) -> DiagnosticMessage {
        DiagnosticMessage {
            title: self.title,
            kind: self.kind,
            problem: self.problem,
            details: self.details,
            hints: self.hints,
            location: self.location,
        }
    }
}
