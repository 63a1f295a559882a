//! Heading scan: split the document body into H1-delimited sections.

use resumark_source_map::{Located, Position, Range};

/// A section heading with the line span of its body.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSection {
    /// The heading text as it appeared in the source, with its range.
    pub title: Located<String>,
    /// First body line (the line after the heading).
    pub body_start: u32,
    /// One past the last body line.
    pub body_end: u32,
}

/// UTF-16 length of a string, for character offsets.
pub(crate) fn utf16_len(s: &str) -> u32 {
    s.chars().map(|ch| ch.len_utf16() as u32).sum()
}

/// Range of `segment` within `line`, where `segment` starts at byte
/// `start_byte` of the line.
pub(crate) fn segment_range(line_idx: u32, line: &str, start_byte: usize, segment: &str) -> Range {
    let start_char = utf16_len(&line[..start_byte]);
    Range::new(
        Position::new(line_idx, start_char),
        Position::new(line_idx, start_char + utf16_len(segment)),
    )
}

/// Range covering a whole line.
pub(crate) fn line_range(line_idx: u32, line: &str) -> Range {
    Range::from_coords(line_idx, 0, line_idx, utf16_len(line))
}

/// Whether a line is a fence delimiter (` ``` ` with or without info string).
pub(crate) fn is_fence_line(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

/// Scan body lines for top-level (H1) headings, starting at `from_line`.
///
/// Headings inside fenced code blocks are not section boundaries.
/// Content before the first heading is preamble and is ignored.
pub fn scan_sections(lines: &[&str], from_line: u32) -> Vec<RawSection> {
    let mut headings: Vec<(u32, Located<String>)> = Vec::new();
    let mut in_fence = false;

    for (idx, line) in lines.iter().enumerate().skip(from_line as usize) {
        if is_fence_line(line) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        if let Some(title) = heading_title(idx as u32, line) {
            headings.push((idx as u32, title));
        }
    }

    let total = lines.len() as u32;
    headings
        .iter()
        .enumerate()
        .map(|(i, (heading_line, title))| {
            let body_end = headings
                .get(i + 1)
                .map(|(next_line, _)| *next_line)
                .unwrap_or(total);
            RawSection {
                title: title.clone(),
                body_start: heading_line + 1,
                body_end,
            }
        })
        .collect()
}

/// Extract the title of an H1 heading line, or `None` for any other line.
fn heading_title(line_idx: u32, line: &str) -> Option<Located<String>> {
    let rest = line.strip_prefix('#')?;
    // H2 and deeper are not section boundaries in this dialect.
    if rest.starts_with('#') {
        return None;
    }
    let rest = rest.strip_prefix(' ')?;

    let title = rest.trim();
    let leading = rest.len() - rest.trim_start().len();
    let start_byte = 2 + leading;
    Some(Located::new(
        title.to_string(),
        segment_range(line_idx, line, start_byte, title),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_basic_sections() {
        let lines = vec!["# Experience", "body a", "", "# Education", "body b"];
        let sections = scan_sections(&lines, 0);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title.value, "Experience");
        assert_eq!(sections[0].body_start, 1);
        assert_eq!(sections[0].body_end, 3);
        assert_eq!(sections[1].title.value, "Education");
        assert_eq!(sections[1].body_end, 5);
    }

    #[test]
    fn heading_range_covers_title_text() {
        let sections = scan_sections(&["#  Experience  "], 0);
        let range = sections[0].title.range;
        assert_eq!(range.start, Position::new(0, 3));
        assert_eq!(range.end, Position::new(0, 13));
    }

    #[test]
    fn deeper_headings_are_not_sections() {
        let lines = vec!["# Experience", "## Acme Corp", "work"];
        let sections = scan_sections(&lines, 0);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body_end, 3);
    }

    #[test]
    fn headings_inside_fences_are_ignored() {
        let lines = vec![
            "# Experience",
            "```resume:experience",
            "# not a heading",
            "```",
            "# Education",
        ];
        let sections = scan_sections(&lines, 0);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title.value, "Experience");
        assert_eq!(sections[1].title.value, "Education");
    }

    #[test]
    fn preamble_before_first_heading_is_ignored() {
        let lines = vec!["stray text", "", "# Experience", "work"];
        let sections = scan_sections(&lines, 0);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body_start, 3);
    }

    #[test]
    fn japanese_heading_ranges_use_utf16_units() {
        let sections = scan_sections(&["# 職務経歴"], 0);
        let range = sections[0].title.range;
        assert_eq!(range.start, Position::new(0, 2));
        assert_eq!(range.end, Position::new(0, 6));
    }
}
