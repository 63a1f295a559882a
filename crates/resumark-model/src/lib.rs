//! Typed document model for resumark CVs.
//!
//! This crate defines what a parsed CV *is*: the entry types decoded from
//! `resume:<kind>` fenced blocks, the [`SectionContent`] sum over them,
//! the static section registry that maps heading text to section
//! identities, the metadata field table with its environment-variable
//! fallbacks, and the [`ParsedCV`] document that ties it all together.
//!
//! Everything here is plain data. Parsing lives in `resumark-parser`,
//! validation in `resumark-validation`.

pub mod content;
pub mod date;
pub mod document;
pub mod entries;
pub mod metadata;
pub mod registry;

pub use content::SectionContent;
pub use date::{CvDate, DateError, EndDate};
pub use document::{FrontmatterPair, ParsedCV, ParsedSection};
pub use entries::{
    CertificationEntry, CompetencyEntry, EducationEntry, ExperienceEntry, LanguageEntry,
    ProjectEntry, RoleEntry, SkillEntry, SkillsContent, TableRow,
};
pub use metadata::{FieldDef, Metadata, MetadataSource, MetadataValue, metadata_field, metadata_fields};
pub use registry::{
    OutputFormat, SectionDef, SectionId, SectionUsage, find_section_by_tag,
    is_section_valid_for_format, required_sections_for_format, section_def,
    valid_tags_for_format,
};
