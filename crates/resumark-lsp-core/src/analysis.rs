//! Unified document analysis.
//!
//! [`analyze_document`] performs a single parse and derives symbols and
//! diagnostics together, keeping the parsed document around for hover
//! lookups. This is cheaper than calling the individual functions when
//! an editor needs several pieces of data for the same edit.

use crate::diagnostics::diagnostics_for_parse;
use crate::document::Document;
use crate::symbols::document_symbols;
use crate::types::{Diagnostic, Symbol};
use resumark_model::{OutputFormat, ParsedCV};

/// Everything an editor session needs for one version of a document.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    /// Document outline symbols.
    pub symbols: Vec<Symbol>,
    /// Errors and warnings.
    pub diagnostics: Vec<Diagnostic>,
    /// The parsed document, for hover lookups.
    pub cv: ParsedCV,
}

/// Analyze a document in a single parse.
///
/// # Example
///
/// ```rust
/// use resumark_lsp_core::{Document, analyze_document, hover};
/// use resumark_model::OutputFormat;
/// use resumark_source_map::Position;
///
/// let doc = Document::new("cv.md", "# Experience\n\nwork\n");
/// let analysis = analyze_document(&doc, OutputFormat::Cv);
///
/// assert_eq!(analysis.symbols.len(), 1);
/// assert!(hover(&analysis.cv, Position::new(0, 4)).is_some());
/// ```
pub fn analyze_document(doc: &Document, format: OutputFormat) -> DocumentAnalysis {
    let result = resumark_parser::parse(doc.content());
    let diagnostics = diagnostics_for_parse(&result, format);
    let symbols = document_symbols(&result.cv);

    DocumentAnalysis {
        symbols,
        diagnostics,
        cv: result.cv,
    }
}
