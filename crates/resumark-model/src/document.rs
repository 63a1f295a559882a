//! The parsed CV document.

use crate::content::SectionContent;
use crate::metadata::Metadata;
use crate::registry::SectionId;
use resumark_source_map::Located;
use serde::{Deserialize, Serialize};

/// One raw frontmatter key/value pair, pre-resolution, with ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontmatterPair {
    pub key: Located<String>,
    pub value: Located<String>,
}

/// One recognized section with its decoded content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedSection {
    pub id: SectionId,
    /// The heading text as it appeared in the source.
    pub title: Located<String>,
    pub content: SectionContent,
}

/// A parsed CV document.
///
/// Built once per parse invocation from an immutable source string and
/// never mutated afterward. Section order is insertion order from the
/// source document; it becomes render order downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCV {
    /// Resolved metadata (frontmatter reconciled with env fallbacks).
    pub metadata: Metadata,
    /// Raw frontmatter pairs, retained for diagnostics and hover.
    pub frontmatter: Vec<FrontmatterPair>,
    /// Recognized sections in document order.
    pub sections: Vec<ParsedSection>,
    /// Headings the registry did not recognize, retained verbatim for
    /// warning emission.
    pub unknown_sections: Vec<Located<String>>,
    /// The original source text.
    pub raw_content: String,
}

impl ParsedCV {
    /// The first section with the given id, if present.
    pub fn section(&self, id: SectionId) -> Option<&ParsedSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Whether a section with the given id was parsed.
    pub fn has_section(&self, id: SectionId) -> bool {
        self.section(id).is_some()
    }

    /// The raw frontmatter pair for a key, if the frontmatter supplied one.
    pub fn frontmatter_pair(&self, key: &str) -> Option<&FrontmatterPair> {
        self.frontmatter.iter().find(|pair| pair.key.value == key)
    }
}
