//! The static section registry.
//!
//! Maps recognized heading text ("tags") to canonical section
//! identities, and answers format-applicability queries. English and
//! Japanese tags coexist in one registry, so a document may mix heading
//! languages even though in practice one language dominates.
//!
//! The table is process-wide immutable data: constructed once on first
//! access and never mutated, so concurrent parses may query it without
//! synchronization.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Target output format for validation and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Cv,
    Rirekisho,
    /// Both concrete formats at once; requirements are the union.
    Both,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Cv => "cv",
            OutputFormat::Rirekisho => "rirekisho",
            OutputFormat::Both => "both",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cv" => Ok(OutputFormat::Cv),
            "rirekisho" => Ok(OutputFormat::Rirekisho),
            "both" => Ok(OutputFormat::Both),
            other => Err(format!(
                "unknown format `{other}` (expected cv, rirekisho, or both)"
            )),
        }
    }
}

/// Which output formats a section may appear in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionUsage {
    Cv,
    Rirekisho,
    Both,
}

impl SectionUsage {
    /// Whether a section with this usage is applicable to `format`.
    pub fn allows(&self, format: OutputFormat) -> bool {
        match (self, format) {
            (SectionUsage::Both, _) => true,
            (_, OutputFormat::Both) => true,
            (SectionUsage::Cv, OutputFormat::Cv) => true,
            (SectionUsage::Rirekisho, OutputFormat::Rirekisho) => true,
            _ => false,
        }
    }
}

/// Canonical section identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Languages,
    Competencies,
    Motivation,
    Requests,
    Interests,
}

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Summary => "summary",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Certifications => "certifications",
            SectionId::Languages => "languages",
            SectionId::Competencies => "competencies",
            SectionId::Motivation => "motivation",
            SectionId::Requests => "requests",
            SectionId::Interests => "interests",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition of one section: its identity, recognized heading tags,
/// usage scope, and the formats that require it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionDef {
    pub id: SectionId,
    /// Recognized heading strings, lowercase, in display-preference order.
    pub tags: &'static [&'static str],
    pub usage: SectionUsage,
    /// Concrete formats (never `Both`) that require this section.
    pub required_for: &'static [OutputFormat],
}

const SECTIONS: &[SectionDef] = &[
    SectionDef {
        id: SectionId::Summary,
        tags: &["summary", "about", "profile", "自己紹介", "プロフィール"],
        usage: SectionUsage::Both,
        required_for: &[],
    },
    SectionDef {
        id: SectionId::Experience,
        tags: &[
            "experience",
            "work experience",
            "employment",
            "職歴",
            "職務経歴",
        ],
        usage: SectionUsage::Both,
        required_for: &[OutputFormat::Cv, OutputFormat::Rirekisho],
    },
    SectionDef {
        id: SectionId::Education,
        tags: &["education", "academic background", "学歴"],
        usage: SectionUsage::Both,
        required_for: &[OutputFormat::Rirekisho],
    },
    SectionDef {
        id: SectionId::Skills,
        tags: &["skills", "technical skills", "スキル", "技術スキル"],
        usage: SectionUsage::Cv,
        required_for: &[],
    },
    SectionDef {
        id: SectionId::Certifications,
        tags: &[
            "certifications",
            "licenses",
            "certificates",
            "免許・資格",
            "資格",
        ],
        usage: SectionUsage::Both,
        required_for: &[],
    },
    SectionDef {
        id: SectionId::Languages,
        tags: &["languages", "語学", "言語"],
        usage: SectionUsage::Both,
        required_for: &[],
    },
    SectionDef {
        id: SectionId::Competencies,
        tags: &["competencies", "core competencies", "strengths", "強み"],
        usage: SectionUsage::Cv,
        required_for: &[],
    },
    SectionDef {
        id: SectionId::Motivation,
        tags: &["motivation", "objective", "志望動機"],
        usage: SectionUsage::Rirekisho,
        required_for: &[],
    },
    SectionDef {
        id: SectionId::Requests,
        tags: &["requests", "preferences", "本人希望記入欄", "本人希望"],
        usage: SectionUsage::Rirekisho,
        required_for: &[],
    },
    SectionDef {
        id: SectionId::Interests,
        tags: &["interests", "hobbies", "趣味・特技"],
        usage: SectionUsage::Both,
        required_for: &[],
    },
];

/// The registry, integrity-checked on first access: no two section
/// definitions may share a tag.
static REGISTRY: Lazy<&'static [SectionDef]> = Lazy::new(|| {
    let mut seen = HashSet::new();
    for def in SECTIONS {
        for tag in def.tags {
            assert!(
                seen.insert(*tag),
                "section registry: tag `{tag}` appears in more than one definition"
            );
        }
    }
    SECTIONS
});

/// Look up a section definition by heading text.
///
/// Matching is case-insensitive and ignores surrounding whitespace. An
/// unmatched heading is not an error: callers treat it as an unknown
/// section and emit a warning.
pub fn find_section_by_tag(tag: &str) -> Option<&'static SectionDef> {
    let normalized = tag.trim().to_lowercase();
    REGISTRY
        .iter()
        .find(|def| def.tags.iter().any(|t| *t == normalized))
}

/// All tags whose owning definition is applicable to `format`.
pub fn valid_tags_for_format(format: OutputFormat) -> Vec<&'static str> {
    REGISTRY
        .iter()
        .filter(|def| def.usage.allows(format))
        .flat_map(|def| def.tags.iter().copied())
        .collect()
}

/// Section ids required by `format`.
///
/// Requesting `both` requires every section required by either concrete
/// format.
pub fn required_sections_for_format(format: OutputFormat) -> Vec<SectionId> {
    REGISTRY
        .iter()
        .filter(|def| match format {
            OutputFormat::Both => !def.required_for.is_empty(),
            concrete => def.required_for.contains(&concrete),
        })
        .map(|def| def.id)
        .collect()
}

/// Whether `id` may appear in output format `format`.
pub fn is_section_valid_for_format(id: SectionId, format: OutputFormat) -> bool {
    REGISTRY
        .iter()
        .find(|def| def.id == id)
        .is_some_and(|def| def.usage.allows(format))
}

/// Definition for a known section id.
pub fn section_def(id: SectionId) -> Option<&'static SectionDef> {
    REGISTRY.iter().find(|def| def.id == id)
}
