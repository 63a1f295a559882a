//! Frontmatter splitting and decoding.
//!
//! A document may open with a `---` delimited block of key/value pairs.
//! The block is decoded through the span-tracking YAML reader so every
//! key and value keeps its source range for diagnostics and hover.

use crate::ParseIssue;
use crate::sections::line_range;
use resumark_model::FrontmatterPair;
use resumark_source_map::{Located, Range};

const FRONTMATTER_MARKER: &str = "---";

/// Result of splitting the frontmatter off a document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrontmatterSplit {
    /// Decoded key/value pairs, in declaration order.
    pub pairs: Vec<FrontmatterPair>,
    /// Line at which the document body begins.
    pub body_start_line: u32,
}

/// Split and decode an optional leading frontmatter block.
///
/// Malformed frontmatter is recorded as an issue and decoding degrades
/// to an empty pair list; the parse continues with the body.
pub fn split(lines: &[&str], issues: &mut Vec<ParseIssue>) -> FrontmatterSplit {
    if lines.first().map(|l| l.trim_end()) != Some(FRONTMATTER_MARKER) {
        return FrontmatterSplit::default();
    }

    let Some(close) = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim_end() == FRONTMATTER_MARKER)
        .map(|(idx, _)| idx)
    else {
        issues.push(ParseIssue::new(
            "frontmatter block is never closed (expected a closing `---` line)",
            line_range(0, lines[0]),
        ));
        return FrontmatterSplit::default();
    };

    let inner = lines[1..close].join("\n");
    let body_start_line = (close + 1) as u32;

    if inner.trim().is_empty() {
        return FrontmatterSplit {
            pairs: Vec::new(),
            body_start_line,
        };
    }

    let block_range = Range::from_coords(0, 0, body_start_line, 0);
    let node = match resumark_yaml::parse_with_origin(&inner, 1) {
        Ok(node) => node,
        Err(err) => {
            issues.push(ParseIssue::new(
                format!("malformed frontmatter: {err}"),
                err.range().unwrap_or(block_range),
            ));
            return FrontmatterSplit {
                pairs: Vec::new(),
                body_start_line,
            };
        }
    };

    let Some(entries) = node.as_mapping() else {
        issues.push(ParseIssue::new(
            "frontmatter must be a mapping of key: value pairs",
            node.range,
        ));
        return FrontmatterSplit {
            pairs: Vec::new(),
            body_start_line,
        };
    };

    let mut pairs = Vec::new();
    for entry in entries {
        let Some(key) = entry.key.scalar_to_string() else {
            issues.push(ParseIssue::new(
                "frontmatter keys must be plain strings",
                entry.key.range,
            ));
            continue;
        };

        if !entry.value.is_scalar() {
            issues.push(ParseIssue::new(
                format!("frontmatter value for `{key}` must be a scalar"),
                entry.value.range,
            ));
            continue;
        }

        // A null value is an intentionally empty field; keep the pair so
        // validation can anchor a diagnostic to it.
        let value = entry.value.scalar_to_string().unwrap_or_default();
        pairs.push(FrontmatterPair {
            key: Located::new(key, entry.key.range),
            value: Located::new(value, entry.value.range),
        });
    }

    FrontmatterSplit {
        pairs,
        body_start_line,
    }
}
