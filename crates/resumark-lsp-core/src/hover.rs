//! Hover payloads derived from retained source ranges.
//!
//! Every value the parser extracts keeps its `Located` range, so hover
//! is a lookup: collect the ranges that carry hoverable information and
//! return the narrowest one containing the requested position.

use resumark_model::{CvDate, EndDate, ParsedCV, SectionContent};
use resumark_source_map::{Located, Position, Range};
use serde::{Deserialize, Serialize};

/// A hover payload: markdown contents and the range they apply to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    /// Markdown contents to display.
    pub contents: String,
    /// The range the contents describe.
    pub range: Range,
}

/// Compute hover information at a position, if any tracked value
/// contains it.
pub fn hover(cv: &ParsedCV, position: Position) -> Option<Hover> {
    let mut candidates = Vec::new();
    collect_targets(cv, &mut candidates);

    candidates
        .into_iter()
        .filter(|(range, _)| range.contains(position))
        .min_by_key(|(range, _)| {
            (
                range.end.line - range.start.line,
                range.end.character.saturating_sub(range.start.character),
            )
        })
        .map(|(range, contents)| Hover { contents, range })
}

fn collect_targets(cv: &ParsedCV, out: &mut Vec<(Range, String)>) {
    for pair in &cv.frontmatter {
        out.push((
            pair.value.range,
            format!("**{}**: {}", pair.key.value, pair.value.value),
        ));
    }

    for section in &cv.sections {
        out.push((
            section.title.range,
            format!("section `{}`", section.id),
        ));

        match &section.content {
            SectionContent::Experience(entries) => {
                for entry in entries {
                    out.push((entry.company.range, format!("**{}**", entry.company.value)));
                    for role in &entry.roles {
                        out.push((
                            role.title.range,
                            format!(
                                "{} at {}{}",
                                role.title.value,
                                entry.company.value,
                                date_span(&role.start, &role.end)
                            ),
                        ));
                        push_dates(&role.start, role.end.as_ref(), out);
                        for project in &role.projects {
                            out.push((
                                project.name.range,
                                format!("project **{}**", project.name.value),
                            ));
                        }
                    }
                }
            }
            SectionContent::Education(entries) => {
                for entry in entries {
                    out.push((entry.school.range, format!("**{}**", entry.school.value)));
                    push_date(&entry.start, out);
                    push_date(&entry.end, out);
                }
            }
            SectionContent::Certifications(entries) => {
                for entry in entries {
                    out.push((entry.name.range, format!("**{}**", entry.name.value)));
                    push_date(&entry.date, out);
                }
            }
            SectionContent::Languages(entries) => {
                for entry in entries {
                    let level = entry
                        .level
                        .as_ref()
                        .map(|l| format!(" — {}", l.value))
                        .unwrap_or_default();
                    out.push((
                        entry.language.range,
                        format!("**{}**{}", entry.language.value, level),
                    ));
                }
            }
            SectionContent::Competencies(entries) => {
                for entry in entries {
                    out.push((entry.header.range, format!("**{}**", entry.header.value)));
                }
            }
            SectionContent::Skills(skills) => {
                for entry in &skills.entries {
                    if let Some(category) = &entry.category {
                        out.push((category.range, format!("skill category **{}**", category.value)));
                    }
                }
            }
            SectionContent::Text(_) | SectionContent::List(_) | SectionContent::Table(_) => {}
        }
    }
}

fn push_date(date: &Option<Located<CvDate>>, out: &mut Vec<(Range, String)>) {
    if let Some(date) = date {
        out.push((date.range, date.value.to_string()));
    }
}

fn push_dates(
    start: &Option<Located<CvDate>>,
    end: Option<&Located<EndDate>>,
    out: &mut Vec<(Range, String)>,
) {
    push_date(start, out);
    if let Some(end) = end {
        out.push((end.range, end.value.to_string()));
    }
}

fn date_span(start: &Option<Located<CvDate>>, end: &Option<Located<EndDate>>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!(" ({} – {})", start.value, end.value),
        (Some(start), None) => format!(" (from {})", start.value),
        (None, Some(end)) => format!(" (until {})", end.value),
        (None, None) => String::new(),
    }
}
