//! Typed entries decoded from `resume:<kind>` fenced blocks.
//!
//! Every scalar field is wrapped in [`Located`] so diagnostics and editor
//! tooling can point at the exact source span it was parsed from; each
//! entry also carries the range of its whole declaration. Entry order is
//! declaration order from the source document — reverse-chronological
//! listing is a documentation convention, not something the parser
//! enforces or repairs.

use crate::date::{CvDate, EndDate};
use resumark_source_map::{Located, Range};
use serde::{Deserialize, Serialize};

/// One school attended, from a `resume:education` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: Located<String>,
    pub degree: Option<Located<String>>,
    pub location: Option<Located<String>>,
    pub start: Option<Located<CvDate>>,
    pub end: Option<Located<CvDate>>,
    pub details: Vec<Located<String>>,
    /// Range of the whole entry declaration.
    pub range: Range,
}

/// One employer, from a `resume:experience` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: Located<String>,
    pub location: Option<Located<String>>,
    pub url: Option<Located<String>>,
    pub summary: Option<Located<String>>,
    pub roles: Vec<RoleEntry>,
    pub range: Range,
}

/// One position held at an employer. The end date may be the `present`
/// sentinel, which is distinct from an absent end date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleEntry {
    pub title: Located<String>,
    pub team: Option<Located<String>>,
    pub start: Option<Located<CvDate>>,
    pub end: Option<Located<EndDate>>,
    pub summary: Option<Located<String>>,
    pub highlights: Vec<Located<String>>,
    pub projects: Vec<ProjectEntry>,
    pub range: Range,
}

/// A project within a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: Located<String>,
    pub description: Option<Located<String>>,
    pub url: Option<Located<String>>,
    pub bullets: Vec<Located<String>>,
    pub range: Range,
}

/// One certification or license, from a `resume:certifications` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: Located<String>,
    pub issuer: Option<Located<String>>,
    pub date: Option<Located<CvDate>>,
    pub url: Option<Located<String>>,
    pub range: Range,
}

/// One skill group, from a `resume:skills` block.
///
/// A flat item list decodes to a single entry with `category: None`; a
/// categorized list decodes to one entry per category, each with either
/// `items` or a `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub category: Option<Located<String>>,
    pub items: Vec<Located<String>>,
    pub description: Option<Located<String>>,
    pub range: Range,
}

/// All skill entries of a section plus their display options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsContent {
    pub entries: Vec<SkillEntry>,
    /// Number of columns to lay items out in, when requested.
    pub columns: Option<u32>,
    /// Render as a grid instead of an inline list.
    pub grid: bool,
}

impl SkillsContent {
    /// Whether any entry carries a category name.
    pub fn categorized(&self) -> bool {
        self.entries.iter().any(|entry| entry.category.is_some())
    }
}

/// One competency, from a `resume:competencies` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyEntry {
    pub header: Located<String>,
    pub description: Option<Located<String>>,
    pub range: Range,
}

/// One language proficiency, from a `resume:languages` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub language: Located<String>,
    pub level: Option<Located<String>>,
    pub range: Range,
}

/// One row of a rirekisho-style chronological table (year, month, content).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub year: Located<String>,
    pub month: Located<String>,
    pub content: Located<String>,
    pub range: Range,
}
