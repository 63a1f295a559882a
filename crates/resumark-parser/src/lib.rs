//! Block parser for resumark CV documents.
//!
//! Turns a raw markdown document into a [`ParsedCV`]: an optional
//! frontmatter block is split off and decoded, the body is scanned for
//! H1 section headings which are matched against the section registry,
//! and each section body is decoded — either from a `resume:<kind>`
//! fenced block into typed entries, or as free text, a bullet list, or a
//! chronological table.
//!
//! The parser never aborts on malformed content. Bad dates, broken
//! fenced blocks, and structurally incomplete entries are recorded as
//! [`ParseIssue`]s with their source ranges, and parsing continues past
//! them, so partial documents stay useful to editor tooling.
//!
//! # Example
//!
//! ```rust
//! use resumark_parser::parse_with_lookup;
//!
//! let doc = "---\nname: Ada Lovelace\n---\n\n# Experience\n\nBuilt the engine.\n";
//! let result = parse_with_lookup(doc, |_| None);
//!
//! assert!(result.issues.is_empty());
//! assert_eq!(result.cv.metadata.value("name"), Some("Ada Lovelace"));
//! assert_eq!(result.cv.sections.len(), 1);
//! ```

pub mod blocks;
pub mod frontmatter;
pub mod resolve;
pub mod sections;

use resumark_model::{ParsedCV, ParsedSection, find_section_by_tag};
use resumark_source_map::Range;
use serde::{Deserialize, Serialize};

/// A non-fatal problem encountered while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseIssue {
    pub message: String,
    pub range: Range,
}

impl ParseIssue {
    pub fn new(message: impl Into<String>, range: Range) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A best-effort parse: the document that could be extracted plus every
/// problem found along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    pub cv: ParsedCV,
    pub issues: Vec<ParseIssue>,
}

/// Parse a CV document, resolving metadata fallbacks from the process
/// environment.
pub fn parse(content: &str) -> ParseResult {
    parse_with_lookup(content, |name| std::env::var(name).ok())
}

/// Parse a CV document with an explicit environment lookup.
///
/// Tests use this to stay hermetic; [`parse`] is the production entry
/// point. Parsing the same content with the same lookup twice yields
/// structurally identical results, ranges included.
pub fn parse_with_lookup(
    content: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> ParseResult {
    let lines: Vec<&str> = content.lines().collect();
    let mut issues = Vec::new();

    let split = frontmatter::split(&lines, &mut issues);
    let raw_sections = sections::scan_sections(&lines, split.body_start_line);

    let mut parsed_sections = Vec::new();
    let mut unknown_sections = Vec::new();

    for raw in raw_sections {
        match find_section_by_tag(&raw.title.value) {
            Some(def) => {
                let content =
                    blocks::decode_section_body(&lines, raw.body_start, raw.body_end, &mut issues);
                parsed_sections.push(ParsedSection {
                    id: def.id,
                    title: raw.title,
                    content,
                });
            }
            None => {
                tracing::debug!(title = %raw.title.value, "unknown section heading");
                unknown_sections.push(raw.title);
            }
        }
    }

    let metadata = resolve::resolve_metadata(&split.pairs, &lookup);

    ParseResult {
        cv: ParsedCV {
            metadata,
            frontmatter: split.pairs,
            sections: parsed_sections,
            unknown_sections,
            raw_content: content.to_string(),
        },
        issues,
    }
}
