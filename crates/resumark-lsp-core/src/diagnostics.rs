//! Diagnostic extraction from CV documents.
//!
//! Parse issues and validation errors become error diagnostics;
//! unrecognized section headings become warnings anchored at the
//! heading's exact range. The editing session is never aborted — every
//! problem is an independent diagnostic.

use crate::document::Document;
use crate::types::{Diagnostic, DiagnosticSeverity};
use resumark_model::{OutputFormat, ParsedCV};
use resumark_parser::ParseResult;
use resumark_source_map::Range;
use resumark_validation::{FnLogger, ValidationError, validate_cv};

/// Get diagnostics for a document against a target format.
///
/// # Example
///
/// ```rust
/// use resumark_lsp_core::{Document, get_diagnostics};
/// use resumark_model::OutputFormat;
///
/// let doc = Document::new("cv.md", "# Experience\n\nwork\n");
/// let diagnostics = get_diagnostics(&doc, OutputFormat::Cv);
/// assert!(!diagnostics.is_empty()); // metadata is missing
/// ```
pub fn get_diagnostics(doc: &Document, format: OutputFormat) -> Vec<Diagnostic> {
    let result = resumark_parser::parse(doc.content());
    diagnostics_for_parse(&result, format)
}

/// Derive diagnostics from an existing parse, avoiding a second pass
/// when the caller already holds one.
pub fn diagnostics_for_parse(result: &ParseResult, format: OutputFormat) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = result
        .issues
        .iter()
        .map(|issue| Diagnostic::new(issue.range, DiagnosticSeverity::Error, &issue.message))
        .collect();

    // Warnings are derived straight from the retained unknown-heading
    // markers so each lands at its exact source range.
    let silent = FnLogger(|_: &str| {});
    if let Err(errors) = validate_cv(&result.cv, format, &silent) {
        for error in &errors {
            diagnostics.push(
                Diagnostic::new(
                    anchor_for(&result.cv, error),
                    DiagnosticSeverity::Error,
                    &error.message,
                )
                .with_code(error.field.clone()),
            );
        }
    }

    for unknown in &result.cv.unknown_sections {
        diagnostics.push(Diagnostic::new(
            unknown.range,
            DiagnosticSeverity::Warning,
            format!(
                "unknown section heading `{}` is not part of the CV vocabulary and will be ignored",
                unknown.value
            ),
        ));
    }

    diagnostics
}

/// Best anchor for a validation error: the offending frontmatter value
/// when the field is present but empty, otherwise the document start.
fn anchor_for(cv: &ParsedCV, error: &ValidationError) -> Range {
    cv.frontmatter_pair(&error.field)
        .map(|pair| pair.value.range)
        .unwrap_or_default()
}
