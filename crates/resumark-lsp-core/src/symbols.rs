//! Document symbol outline.
//!
//! One symbol per parsed section, with the section's primary entries
//! (companies, schools, certifications, skill categories) as children.

use crate::types::{Symbol, SymbolKind};
use resumark_model::{ParsedCV, ParsedSection, SectionContent};

/// Build the document outline for a parsed CV.
pub fn document_symbols(cv: &ParsedCV) -> Vec<Symbol> {
    cv.sections.iter().map(section_symbol).collect()
}

fn section_symbol(section: &ParsedSection) -> Symbol {
    let title_range = section.title.range;
    Symbol::new(
        section.title.value.clone(),
        SymbolKind::Module,
        title_range,
        title_range,
    )
    .with_detail(section.content.kind())
    .with_children(entry_symbols(&section.content))
}

fn entry_symbols(content: &SectionContent) -> Vec<Symbol> {
    match content {
        SectionContent::Experience(entries) => entries
            .iter()
            .map(|entry| {
                Symbol::new(
                    entry.company.value.clone(),
                    SymbolKind::Field,
                    entry.range,
                    entry.company.range,
                )
            })
            .collect(),
        SectionContent::Education(entries) => entries
            .iter()
            .map(|entry| {
                Symbol::new(
                    entry.school.value.clone(),
                    SymbolKind::Field,
                    entry.range,
                    entry.school.range,
                )
            })
            .collect(),
        SectionContent::Certifications(entries) => entries
            .iter()
            .map(|entry| {
                Symbol::new(
                    entry.name.value.clone(),
                    SymbolKind::Field,
                    entry.range,
                    entry.name.range,
                )
            })
            .collect(),
        SectionContent::Languages(entries) => entries
            .iter()
            .map(|entry| {
                Symbol::new(
                    entry.language.value.clone(),
                    SymbolKind::Field,
                    entry.range,
                    entry.language.range,
                )
            })
            .collect(),
        SectionContent::Competencies(entries) => entries
            .iter()
            .map(|entry| {
                Symbol::new(
                    entry.header.value.clone(),
                    SymbolKind::Field,
                    entry.range,
                    entry.header.range,
                )
            })
            .collect(),
        SectionContent::Skills(skills) => skills
            .entries
            .iter()
            .filter_map(|entry| {
                entry.category.as_ref().map(|category| {
                    Symbol::new(
                        category.value.clone(),
                        SymbolKind::Field,
                        entry.range,
                        category.range,
                    )
                })
            })
            .collect(),
        SectionContent::Text(_) | SectionContent::List(_) | SectionContent::Table(_) => Vec::new(),
    }
}
