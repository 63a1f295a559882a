//! Section body decoding.
//!
//! A section body either contains one `resume:<kind>` fenced block,
//! decoded into typed entries through the span-tracking YAML reader, or
//! it is free content classified as text, a bullet list, or a
//! rirekisho-style chronological table.

use crate::ParseIssue;
use crate::sections::{is_fence_line, line_range, segment_range, utf16_len};
use resumark_model::{
    CertificationEntry, CompetencyEntry, CvDate, EducationEntry, EndDate, ExperienceEntry,
    LanguageEntry, ProjectEntry, RoleEntry, SectionContent, SkillEntry, SkillsContent, TableRow,
};
use resumark_source_map::{Located, Position, Range};
use resumark_yaml::YamlNode;
use std::str::FromStr;

/// The payload kinds a `resume:` fence may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResumeKind {
    Education,
    Experience,
    Certifications,
    Skills,
    Languages,
    Competencies,
}

impl FromStr for ResumeKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "education" => Ok(ResumeKind::Education),
            "experience" => Ok(ResumeKind::Experience),
            "certifications" => Ok(ResumeKind::Certifications),
            "skills" => Ok(ResumeKind::Skills),
            "languages" => Ok(ResumeKind::Languages),
            "competencies" => Ok(ResumeKind::Competencies),
            _ => Err(()),
        }
    }
}

impl ResumeKind {
    /// Typed content with no entries, for degraded decoding.
    fn empty_content(self) -> SectionContent {
        match self {
            ResumeKind::Education => SectionContent::Education(Vec::new()),
            ResumeKind::Experience => SectionContent::Experience(Vec::new()),
            ResumeKind::Certifications => SectionContent::Certifications(Vec::new()),
            ResumeKind::Skills => SectionContent::Skills(SkillsContent {
                entries: Vec::new(),
                columns: None,
                grid: false,
            }),
            ResumeKind::Languages => SectionContent::Languages(Vec::new()),
            ResumeKind::Competencies => SectionContent::Competencies(Vec::new()),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ResumeKind::Education => "education",
            ResumeKind::Experience => "experience",
            ResumeKind::Certifications => "certifications",
            ResumeKind::Skills => "skills",
            ResumeKind::Languages => "languages",
            ResumeKind::Competencies => "competencies",
        }
    }
}

/// A located `resume:` fenced block within a section body.
struct ResumeBlock {
    kind: String,
    fence_line: u32,
    inner_start: u32,
    inner_end: u32,
    closed: bool,
}

/// Decode the body of one section, lines `[start, end)`.
pub fn decode_section_body(
    lines: &[&str],
    start: u32,
    end: u32,
    issues: &mut Vec<ParseIssue>,
) -> SectionContent {
    match find_resume_block(lines, start, end, issues) {
        Some(block) => decode_resume_block(lines, start, end, &block, issues),
        None => classify_free_text(lines, &body_line_indices(start, end, None)),
    }
}

/// Locate the section's `resume:` block, reporting extras.
///
/// Non-`resume:` fences are skipped as opaque regions so their content
/// cannot be mistaken for headings or blocks.
fn find_resume_block(
    lines: &[&str],
    start: u32,
    end: u32,
    issues: &mut Vec<ParseIssue>,
) -> Option<ResumeBlock> {
    let mut first: Option<ResumeBlock> = None;
    let mut i = start as usize;

    while i < end as usize {
        let line = lines[i];
        if !is_fence_line(line) {
            i += 1;
            continue;
        }

        let info = line.trim_start()[3..].trim();
        let close = (i + 1..end as usize).find(|&j| is_fence_line(lines[j]));

        if let Some(kind) = info.strip_prefix("resume:") {
            let block = ResumeBlock {
                kind: kind.trim().to_string(),
                fence_line: i as u32,
                inner_start: (i + 1) as u32,
                inner_end: close.unwrap_or(end as usize) as u32,
                closed: close.is_some(),
            };
            if first.is_none() {
                first = Some(block);
            } else {
                issues.push(ParseIssue::new(
                    "only the first resume block in a section is used",
                    line_range(i as u32, line),
                ));
            }
        }

        i = close.map(|c| c + 1).unwrap_or(end as usize);
    }

    first
}

/// All line indices of the body, optionally excluding a block region.
fn body_line_indices(start: u32, end: u32, exclude: Option<(u32, u32)>) -> Vec<u32> {
    (start..end)
        .filter(|idx| match exclude {
            Some((from, to)) => *idx < from || *idx > to,
            None => true,
        })
        .collect()
}

fn decode_resume_block(
    lines: &[&str],
    start: u32,
    end: u32,
    block: &ResumeBlock,
    issues: &mut Vec<ParseIssue>,
) -> SectionContent {
    let fence_range = line_range(block.fence_line, lines[block.fence_line as usize]);
    let block_span = (
        block.fence_line,
        if block.closed {
            block.inner_end
        } else {
            end.saturating_sub(1)
        },
    );

    if !block.closed {
        issues.push(ParseIssue::new(
            "resume block is never closed (expected a closing ``` line)",
            fence_range,
        ));
    }

    let Ok(kind) = ResumeKind::from_str(&block.kind) else {
        issues.push(ParseIssue::new(
            format!(
                "unknown resume block kind `{}` (expected education, experience, certifications, skills, languages, or competencies)",
                block.kind
            ),
            fence_range,
        ));
        return classify_free_text(lines, &body_line_indices(start, end, Some(block_span)));
    };

    let inner = lines[block.inner_start as usize..block.inner_end as usize].join("\n");
    if inner.trim().is_empty() {
        issues.push(ParseIssue::new(
            format!("resume:{} block is empty", kind.as_str()),
            fence_range,
        ));
        return kind.empty_content();
    }

    let root = match resumark_yaml::parse_with_origin(&inner, block.inner_start) {
        Ok(root) => root,
        Err(err) => {
            issues.push(ParseIssue::new(
                format!("malformed resume:{} block: {err}", kind.as_str()),
                err.range().unwrap_or(fence_range),
            ));
            return classify_free_text(lines, &body_line_indices(start, end, Some(block_span)));
        }
    };

    match kind {
        ResumeKind::Education => SectionContent::Education(decode_entries(
            &root,
            kind,
            issues,
            decode_education_entry,
        )),
        ResumeKind::Experience => SectionContent::Experience(decode_entries(
            &root,
            kind,
            issues,
            decode_experience_entry,
        )),
        ResumeKind::Certifications => SectionContent::Certifications(decode_entries(
            &root,
            kind,
            issues,
            decode_certification_entry,
        )),
        ResumeKind::Skills => SectionContent::Skills(decode_skills(&root, issues)),
        ResumeKind::Languages => SectionContent::Languages(decode_entries(
            &root,
            kind,
            issues,
            decode_language_entry,
        )),
        ResumeKind::Competencies => SectionContent::Competencies(decode_entries(
            &root,
            kind,
            issues,
            decode_competency_entry,
        )),
    }
}

// ============================================================================
// Typed entry decoding
// ============================================================================

/// Decode a sequence of mapping entries, skipping malformed items so the
/// rest of the block still decodes.
fn decode_entries<T>(
    root: &YamlNode,
    kind: ResumeKind,
    issues: &mut Vec<ParseIssue>,
    decode: impl Fn(&YamlNode, &mut Vec<ParseIssue>) -> Option<T>,
) -> Vec<T> {
    let Some(items) = root.as_sequence() else {
        issues.push(ParseIssue::new(
            format!("resume:{} block must be a list of entries", kind.as_str()),
            root.range,
        ));
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            if !item.is_mapping() {
                issues.push(ParseIssue::new(
                    format!("{} entries must be key/value mappings", kind.as_str()),
                    item.range,
                ));
                return None;
            }
            decode(item, issues)
        })
        .collect()
}

fn decode_education_entry(
    item: &YamlNode,
    issues: &mut Vec<ParseIssue>,
) -> Option<EducationEntry> {
    let school = required_str_field(item, "school", "education entry", issues)?;
    Some(EducationEntry {
        school,
        degree: str_field(item, "degree"),
        location: str_field(item, "location"),
        start: date_field(item, "start", issues),
        end: date_field(item, "end", issues),
        details: string_list(item, "details", issues),
        range: item.range,
    })
}

fn decode_experience_entry(
    item: &YamlNode,
    issues: &mut Vec<ParseIssue>,
) -> Option<ExperienceEntry> {
    let company = required_str_field(item, "company", "experience entry", issues)?;

    let roles = match item.get("roles") {
        None => Vec::new(),
        Some(list) => match list.as_sequence() {
            Some(role_items) => role_items
                .iter()
                .filter_map(|role| {
                    if !role.is_mapping() {
                        issues.push(ParseIssue::new(
                            "roles must be key/value mappings",
                            role.range,
                        ));
                        return None;
                    }
                    decode_role(role, issues)
                })
                .collect(),
            None => {
                issues.push(ParseIssue::new("`roles` must be a list", list.range));
                Vec::new()
            }
        },
    };

    Some(ExperienceEntry {
        company,
        location: str_field(item, "location"),
        url: str_field(item, "url"),
        summary: str_field(item, "summary"),
        roles,
        range: item.range,
    })
}

fn decode_role(item: &YamlNode, issues: &mut Vec<ParseIssue>) -> Option<RoleEntry> {
    let title = required_str_field(item, "title", "role entry", issues)?;

    let projects = match item.get("projects") {
        None => Vec::new(),
        Some(list) => match list.as_sequence() {
            Some(project_items) => project_items
                .iter()
                .filter_map(|project| {
                    if !project.is_mapping() {
                        issues.push(ParseIssue::new(
                            "projects must be key/value mappings",
                            project.range,
                        ));
                        return None;
                    }
                    decode_project(project, issues)
                })
                .collect(),
            None => {
                issues.push(ParseIssue::new("`projects` must be a list", list.range));
                Vec::new()
            }
        },
    };

    Some(RoleEntry {
        title,
        team: str_field(item, "team"),
        start: date_field(item, "start", issues),
        end: end_date_field(item, "end", issues),
        summary: str_field(item, "summary"),
        highlights: string_list(item, "highlights", issues),
        projects,
        range: item.range,
    })
}

fn decode_project(item: &YamlNode, issues: &mut Vec<ParseIssue>) -> Option<ProjectEntry> {
    let name = required_str_field(item, "name", "project entry", issues)?;
    Some(ProjectEntry {
        name,
        description: str_field(item, "description"),
        url: str_field(item, "url"),
        bullets: string_list(item, "bullets", issues),
        range: item.range,
    })
}

fn decode_certification_entry(
    item: &YamlNode,
    issues: &mut Vec<ParseIssue>,
) -> Option<CertificationEntry> {
    let name = required_str_field(item, "name", "certification entry", issues)?;
    Some(CertificationEntry {
        name,
        issuer: str_field(item, "issuer"),
        date: date_field(item, "date", issues),
        url: str_field(item, "url"),
        range: item.range,
    })
}

fn decode_language_entry(item: &YamlNode, issues: &mut Vec<ParseIssue>) -> Option<LanguageEntry> {
    let language = required_str_field(item, "language", "language entry", issues)?;
    Some(LanguageEntry {
        language,
        level: str_field(item, "level"),
        range: item.range,
    })
}

fn decode_competency_entry(
    item: &YamlNode,
    issues: &mut Vec<ParseIssue>,
) -> Option<CompetencyEntry> {
    let header = required_str_field(item, "header", "competency entry", issues)?;
    Some(CompetencyEntry {
        header,
        description: str_field(item, "description"),
        range: item.range,
    })
}

/// Decode a skills block. Two shapes are accepted: a plain item list
/// (one uncategorized entry), and a mapping with display options and an
/// `items`/`categories` list whose members may be strings or category
/// mappings. Both decode into the same [`SkillEntry`] shape.
fn decode_skills(root: &YamlNode, issues: &mut Vec<ParseIssue>) -> SkillsContent {
    let mut columns = None;
    let mut grid = false;

    let items_node = if root.is_sequence() {
        Some(root)
    } else if root.is_mapping() {
        if let Some(node) = root.get("columns") {
            match node.as_i64() {
                Some(v) if v > 0 => columns = Some(v as u32),
                _ => issues.push(ParseIssue::new(
                    "`columns` must be a positive integer",
                    node.range,
                )),
            }
        }
        if let Some(node) = root.get("grid") {
            match node.as_bool() {
                Some(b) => grid = b,
                None => issues.push(ParseIssue::new(
                    "`grid` must be true or false",
                    node.range,
                )),
            }
        }
        root.get("items").or_else(|| root.get("categories"))
    } else {
        issues.push(ParseIssue::new(
            "resume:skills block must be a list or a mapping with an `items` list",
            root.range,
        ));
        None
    };

    let mut entries = Vec::new();
    if let Some(items_node) = items_node {
        match items_node.as_sequence() {
            Some(items) => {
                if !items.is_empty() && items.iter().all(|item| item.is_scalar()) {
                    // Flat shape: one uncategorized entry holding every item.
                    let located = items
                        .iter()
                        .filter_map(|item| {
                            item.scalar_to_string().map(|s| Located::new(s, item.range))
                        })
                        .collect();
                    entries.push(SkillEntry {
                        category: None,
                        items: located,
                        description: None,
                        range: items_node.range,
                    });
                } else {
                    for item in items {
                        if let Some(s) = item.scalar_to_string() {
                            entries.push(SkillEntry {
                                category: None,
                                items: vec![Located::new(s, item.range)],
                                description: None,
                                range: item.range,
                            });
                        } else if item.is_mapping() {
                            entries.push(SkillEntry {
                                category: str_field(item, "category"),
                                items: string_list(item, "items", issues),
                                description: str_field(item, "description"),
                                range: item.range,
                            });
                        } else {
                            issues.push(ParseIssue::new(
                                "skill entries must be text or category mappings",
                                item.range,
                            ));
                        }
                    }
                }
            }
            None => issues.push(ParseIssue::new(
                "skill items must be a list",
                items_node.range,
            )),
        }
    }

    SkillsContent {
        entries,
        columns,
        grid,
    }
}

// ============================================================================
// Field helpers
// ============================================================================

/// An optional scalar field; an empty (null) value counts as absent.
fn str_field(node: &YamlNode, key: &str) -> Option<Located<String>> {
    let value = node.get(key)?;
    let s = value.scalar_to_string()?;
    Some(Located::new(s, value.range))
}

/// A required scalar field; missing or empty records an issue spanning
/// the whole entry.
fn required_str_field(
    node: &YamlNode,
    key: &str,
    what: &str,
    issues: &mut Vec<ParseIssue>,
) -> Option<Located<String>> {
    match str_field(node, key) {
        Some(v) if !v.value.trim().is_empty() => Some(v),
        _ => {
            issues.push(ParseIssue::new(
                format!("{what} is missing required key `{key}`"),
                node.range,
            ));
            None
        }
    }
}

/// An optional list-of-strings field.
fn string_list(node: &YamlNode, key: &str, issues: &mut Vec<ParseIssue>) -> Vec<Located<String>> {
    let Some(list) = node.get(key) else {
        return Vec::new();
    };
    let Some(items) = list.as_sequence() else {
        issues.push(ParseIssue::new(
            format!("`{key}` must be a list"),
            list.range,
        ));
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item.scalar_to_string() {
            Some(s) => Some(Located::new(s, item.range)),
            None => {
                issues.push(ParseIssue::new(
                    format!("items in `{key}` must be plain text"),
                    item.range,
                ));
                None
            }
        })
        .collect()
}

/// An optional `YYYY-MM`/`YYYY-MM-DD` date field. `present` is rejected
/// here; only end dates accept the sentinel.
fn date_field(
    node: &YamlNode,
    key: &str,
    issues: &mut Vec<ParseIssue>,
) -> Option<Located<CvDate>> {
    let (s, range) = date_text(node, key, issues)?;
    if s == "present" {
        issues.push(ParseIssue::new(
            "`present` is only valid as a role end date",
            range,
        ));
        return None;
    }
    match s.parse::<CvDate>() {
        Ok(date) => Some(Located::new(date, range)),
        Err(err) => {
            issues.push(ParseIssue::new(err.to_string(), range));
            None
        }
    }
}

/// An optional end-date field: a date or the `present` sentinel.
fn end_date_field(
    node: &YamlNode,
    key: &str,
    issues: &mut Vec<ParseIssue>,
) -> Option<Located<EndDate>> {
    let (s, range) = date_text(node, key, issues)?;
    match s.parse::<EndDate>() {
        Ok(end) => Some(Located::new(end, range)),
        Err(err) => {
            issues.push(ParseIssue::new(err.to_string(), range));
            None
        }
    }
}

fn date_text(
    node: &YamlNode,
    key: &str,
    issues: &mut Vec<ParseIssue>,
) -> Option<(String, Range)> {
    let value = node.get(key)?;
    if value.is_null() {
        return None;
    }
    match value.scalar_to_string() {
        Some(s) => Some((s.trim().to_string(), value.range)),
        None => {
            issues.push(ParseIssue::new(
                format!("`{key}` must be a date literal"),
                value.range,
            ));
            None
        }
    }
}

// ============================================================================
// Free content classification
// ============================================================================

/// Classify untyped body lines as text, a bullet list, or a table.
fn classify_free_text(lines: &[&str], idxs: &[u32]) -> SectionContent {
    let non_empty: Vec<u32> = idxs
        .iter()
        .copied()
        .filter(|&idx| !lines[idx as usize].trim().is_empty())
        .collect();

    if non_empty.is_empty() {
        let line = idxs.first().copied().unwrap_or(0);
        return SectionContent::Text(Located::new(
            String::new(),
            Range::point(Position::new(line, 0)),
        ));
    }

    let table_rows = non_empty
        .iter()
        .filter(|&&idx| lines[idx as usize].trim_start().starts_with('|'))
        .count();
    if table_rows * 2 > non_empty.len() {
        return SectionContent::Table(decode_table_rows(lines, &non_empty));
    }

    let list_items = non_empty
        .iter()
        .filter(|&&idx| is_list_item(lines[idx as usize]))
        .count();
    if list_items * 2 > non_empty.len() {
        let items = non_empty
            .iter()
            .filter_map(|&idx| list_item(idx, lines[idx as usize]))
            .collect();
        return SectionContent::List(items);
    }

    let first = non_empty[0];
    let last = *non_empty.last().expect("non_empty checked above");
    let value = lines[first as usize..=last as usize].join("\n");
    let range = Range::new(
        Position::new(first, 0),
        Position::new(last, utf16_len(lines[last as usize])),
    );
    SectionContent::Text(Located::new(value, range))
}

fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("- ") || trimmed.starts_with("* ")
}

fn list_item(idx: u32, line: &str) -> Option<Located<String>> {
    if !is_list_item(line) {
        return None;
    }
    let indent = line.len() - line.trim_start().len();
    let after_marker = &line[indent + 2..];
    let text = after_marker.trim();
    let leading = after_marker.len() - after_marker.trim_start().len();
    Some(Located::new(
        text.to_string(),
        segment_range(idx, line, indent + 2 + leading, text),
    ))
}

/// Decode markdown pipe-table rows into `year / month / content` rows.
///
/// Separator rows and a `year`/`年` header row are skipped; other rows
/// must have exactly three cells.
fn decode_table_rows(lines: &[&str], idxs: &[u32]) -> Vec<TableRow> {
    let mut rows = Vec::new();

    for &idx in idxs {
        let line = lines[idx as usize];
        let trimmed = line.trim_start();
        if !trimmed.starts_with('|') {
            continue;
        }
        if trimmed
            .chars()
            .all(|ch| matches!(ch, '|' | '-' | ':' | ' '))
        {
            continue; // separator row
        }

        let cells = split_table_cells(idx, line);
        if cells.len() != 3 {
            continue;
        }

        let header = cells[0].value.trim().to_lowercase();
        if header == "year" || header == "年" {
            continue;
        }

        rows.push(TableRow {
            year: cells[0].clone(),
            month: cells[1].clone(),
            content: cells[2].clone(),
            range: line_range(idx, line),
        });
    }

    rows
}

/// Split one `| a | b | c |` line into located, trimmed cells.
fn split_table_cells(idx: u32, line: &str) -> Vec<Located<String>> {
    let pipe_positions: Vec<usize> = line
        .char_indices()
        .filter(|(_, ch)| *ch == '|')
        .map(|(pos, _)| pos)
        .collect();

    pipe_positions
        .windows(2)
        .map(|window| {
            let raw = &line[window[0] + 1..window[1]];
            let text = raw.trim();
            let leading = raw.len() - raw.trim_start().len();
            Located::new(
                text.to_string(),
                segment_range(idx, line, window[0] + 1 + leading, text),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(doc: &str) -> (SectionContent, Vec<ParseIssue>) {
        let lines: Vec<&str> = doc.lines().collect();
        let mut issues = Vec::new();
        let content = decode_section_body(&lines, 0, lines.len() as u32, &mut issues);
        (content, issues)
    }

    #[test]
    fn decode_education_block() {
        let (content, issues) = decode(
            "```resume:education\n- school: University of Tsukuba\n  degree: BSc Computer Science\n  start: 2014-04\n  end: 2018-03\n  details:\n    - Graduated with honors\n```",
        );
        assert!(issues.is_empty(), "{issues:?}");

        let SectionContent::Education(entries) = content else {
            panic!("expected education content, got {content:?}");
        };
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.school.value, "University of Tsukuba");
        assert_eq!(entry.degree.as_ref().unwrap().value, "BSc Computer Science");
        assert_eq!(entry.start.as_ref().unwrap().value, CvDate::new(2014, 4));
        assert_eq!(entry.end.as_ref().unwrap().value, CvDate::new(2018, 3));
        assert_eq!(entry.details.len(), 1);
        // The school scalar sits on line 1 of the body.
        assert_eq!(entry.school.range.start.line, 1);
    }

    #[test]
    fn decode_nested_experience() {
        let (content, issues) = decode(
            "```resume:experience\n- company: Acme Corp\n  location: Tokyo\n  roles:\n    - title: Senior Engineer\n      team: Platform\n      start: 2021-04\n      end: present\n      highlights:\n        - Led the billing migration\n      projects:\n        - name: Billing rewrite\n          bullets:\n            - Cut costs by 40%\n```",
        );
        assert!(issues.is_empty(), "{issues:?}");

        let SectionContent::Experience(entries) = content else {
            panic!("expected experience content");
        };
        let entry = &entries[0];
        assert_eq!(entry.company.value, "Acme Corp");
        assert_eq!(entry.roles.len(), 1);

        let role = &entry.roles[0];
        assert_eq!(role.title.value, "Senior Engineer");
        assert_eq!(role.end.as_ref().unwrap().value, EndDate::Present);
        assert_eq!(role.highlights.len(), 1);
        assert_eq!(role.projects.len(), 1);
        assert_eq!(role.projects[0].name.value, "Billing rewrite");
        assert_eq!(role.projects[0].bullets[0].value, "Cut costs by 40%");
    }

    #[test]
    fn entry_missing_company_is_skipped_with_issue() {
        let (content, issues) = decode(
            "```resume:experience\n- location: Tokyo\n- company: Acme Corp\n```",
        );

        let SectionContent::Experience(entries) = content else {
            panic!("expected experience content");
        };
        // The good entry still decodes.
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company.value, "Acme Corp");

        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("company"));
        // The issue spans the offending entry on line 1.
        assert_eq!(issues[0].range.start.line, 1);
    }

    #[test]
    fn malformed_date_reports_issue_and_continues() {
        let (content, issues) = decode(
            "```resume:education\n- school: Univ\n  start: april 2014\n  end: 2018-03\n```",
        );

        let SectionContent::Education(entries) = content else {
            panic!("expected education content");
        };
        assert_eq!(entries.len(), 1);
        assert!(entries[0].start.is_none());
        assert_eq!(entries[0].end.as_ref().unwrap().value, CvDate::new(2018, 3));

        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("YYYY-MM"));
        assert_eq!(issues[0].range.start.line, 2);
    }

    #[test]
    fn present_rejected_as_start_date() {
        let (_, issues) = decode(
            "```resume:experience\n- company: Acme\n  roles:\n    - title: Engineer\n      start: present\n```",
        );
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("end date"));
    }

    #[test]
    fn decode_flat_skills() {
        let (content, issues) = decode("```resume:skills\n- Rust\n- TypeScript\n- SQL\n```");
        assert!(issues.is_empty());

        let SectionContent::Skills(skills) = content else {
            panic!("expected skills content");
        };
        assert_eq!(skills.entries.len(), 1);
        assert!(skills.entries[0].category.is_none());
        assert_eq!(skills.entries[0].items.len(), 3);
        assert!(!skills.categorized());
    }

    #[test]
    fn decode_categorized_skills_with_display_options() {
        let (content, issues) = decode(
            "```resume:skills\ncolumns: 3\ngrid: true\ncategories:\n  - category: Languages\n    items:\n      - Rust\n      - Go\n  - category: Practices\n    description: TDD and code review culture\n```",
        );
        assert!(issues.is_empty(), "{issues:?}");

        let SectionContent::Skills(skills) = content else {
            panic!("expected skills content");
        };
        assert_eq!(skills.columns, Some(3));
        assert!(skills.grid);
        assert!(skills.categorized());
        assert_eq!(skills.entries.len(), 2);
        assert_eq!(skills.entries[0].items.len(), 2);
        assert_eq!(
            skills.entries[1].description.as_ref().unwrap().value,
            "TDD and code review culture"
        );
    }

    #[test]
    fn decode_languages_and_competencies() {
        let (content, issues) =
            decode("```resume:languages\n- language: Japanese\n  level: JLPT N1\n```");
        assert!(issues.is_empty());
        let SectionContent::Languages(entries) = content else {
            panic!("expected languages content");
        };
        assert_eq!(entries[0].language.value, "Japanese");
        assert_eq!(entries[0].level.as_ref().unwrap().value, "JLPT N1");

        let (content, issues) = decode(
            "```resume:competencies\n- header: Leadership\n  description: Mentored four engineers\n```",
        );
        assert!(issues.is_empty());
        let SectionContent::Competencies(entries) = content else {
            panic!("expected competencies content");
        };
        assert_eq!(entries[0].header.value, "Leadership");
    }

    #[test]
    fn unknown_kind_falls_back_to_text() {
        let (content, issues) = decode("intro line\n\n```resume:publications\n- name: x\n```");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("unknown resume block kind"));
        let SectionContent::Text(text) = content else {
            panic!("expected text fallback");
        };
        assert_eq!(text.value, "intro line");
    }

    #[test]
    fn unclosed_block_reports_issue_but_decodes() {
        let (content, issues) = decode("```resume:education\n- school: Univ");
        assert!(issues.iter().any(|i| i.message.contains("never closed")));
        let SectionContent::Education(entries) = content else {
            panic!("expected education content");
        };
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn second_resume_block_is_reported() {
        let (content, issues) = decode(
            "```resume:education\n- school: Univ\n```\n\n```resume:education\n- school: Other\n```",
        );
        let SectionContent::Education(entries) = content else {
            panic!("expected education content");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].school.value, "Univ");
        assert!(issues.iter().any(|i| i.message.contains("first resume block")));
    }

    #[test]
    fn bullet_body_becomes_list() {
        let (content, issues) = decode("- shipped a thing\n- mentored people\n");
        assert!(issues.is_empty());
        let SectionContent::List(items) = content else {
            panic!("expected list content");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].value, "shipped a thing");
        assert_eq!(items[0].range.start, Position::new(0, 2));
    }

    #[test]
    fn pipe_table_becomes_chronological_rows() {
        let (content, issues) = decode(
            "| year | month | content |\n|------|-------|---------|\n| 2014 | 4 | Entered University of Tsukuba |\n| 2018 | 3 | Graduated |\n",
        );
        assert!(issues.is_empty());
        let SectionContent::Table(rows) = content else {
            panic!("expected table content");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year.value, "2014");
        assert_eq!(rows[0].month.value, "4");
        assert_eq!(rows[0].content.value, "Entered University of Tsukuba");
        assert_eq!(rows[1].content.value, "Graduated");
        assert_eq!(rows[0].range.start.line, 2);
    }

    #[test]
    fn plain_paragraph_becomes_text() {
        let (content, issues) = decode("I build parsers.\nAnd I like it.\n");
        assert!(issues.is_empty());
        let SectionContent::Text(text) = content else {
            panic!("expected text content");
        };
        assert_eq!(text.value, "I build parsers.\nAnd I like it.");
        assert_eq!(text.range.start, Position::new(0, 0));
        assert_eq!(text.range.end, Position::new(1, 14));
    }
}
