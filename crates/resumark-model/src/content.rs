//! Section content variants.

use crate::entries::{
    CertificationEntry, CompetencyEntry, EducationEntry, ExperienceEntry, LanguageEntry,
    SkillsContent, TableRow,
};
use resumark_source_map::Located;
use serde::{Deserialize, Serialize};

/// The decoded body of a section.
///
/// A discriminated sum rather than a dynamically-shaped value, so that
/// renderers can be checked for exhaustiveness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SectionContent {
    /// Free paragraph text.
    Text(Located<String>),
    /// A bullet list, one located string per item.
    List(Vec<Located<String>>),
    /// Entries from a `resume:education` block.
    Education(Vec<EducationEntry>),
    /// Entries from a `resume:experience` block.
    Experience(Vec<ExperienceEntry>),
    /// Entries from a `resume:certifications` block.
    Certifications(Vec<CertificationEntry>),
    /// Entries and display options from a `resume:skills` block.
    Skills(SkillsContent),
    /// Entries from a `resume:competencies` block.
    Competencies(Vec<CompetencyEntry>),
    /// Entries from a `resume:languages` block.
    Languages(Vec<LanguageEntry>),
    /// Rirekisho-style chronological table rows.
    Table(Vec<TableRow>),
}

impl SectionContent {
    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            SectionContent::Text(_) => "text",
            SectionContent::List(_) => "list",
            SectionContent::Education(_) => "education",
            SectionContent::Experience(_) => "experience",
            SectionContent::Certifications(_) => "certifications",
            SectionContent::Skills(_) => "skills",
            SectionContent::Competencies(_) => "competencies",
            SectionContent::Languages(_) => "languages",
            SectionContent::Table(_) => "table",
        }
    }
}
