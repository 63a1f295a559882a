//! Transport-agnostic editor integration for resumark documents.
//!
//! These types are designed to be:
//! - Transport-agnostic (no LSP protocol dependencies)
//! - Easily serializable to JSON
//! - Easily convertible to `lsp-types` by a native language server
//!
//! [`analyze_document`] performs a single parse and derives everything
//! an editor session needs: diagnostics (parse issues and validation
//! errors as errors, unknown headings as warnings), a document symbol
//! outline, and the parsed document for hover lookups. A full re-parse
//! runs on every edit; parses of the same text are idempotent, so the
//! derived data is stable.

pub mod analysis;
pub mod diagnostics;
pub mod document;
pub mod hover;
pub mod symbols;
pub mod types;

pub use analysis::{DocumentAnalysis, analyze_document};
pub use diagnostics::get_diagnostics;
pub use document::{Document, DocumentStore};
pub use hover::{Hover, hover};
pub use symbols::document_symbols;
pub use types::{Diagnostic, DiagnosticSeverity, Symbol, SymbolKind};
