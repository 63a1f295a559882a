//! Validation of parsed CVs against a target output format.
//!
//! [`validate_cv`] runs the metadata and section checks independently
//! and accumulates every failure into one batch — a CV missing three
//! fields yields three errors in a single call, never just the first.
//! Unrecognized section headings are warnings delivered to an injected
//! [`Logger`]; they never appear in the error batch and never block
//! success.
//!
//! # Example
//!
//! ```rust
//! use resumark_model::OutputFormat;
//! use resumark_validation::{TracingLogger, validate_cv};
//!
//! let doc = "---\nname: Ada\nemail_address: ada@example.org\nphone_number: \"123\"\n---\n\n# Experience\n\nwork\n";
//! let parsed = resumark_parser::parse_with_lookup(doc, |_| None);
//! let validated = validate_cv(&parsed.cv, OutputFormat::Cv, &TracingLogger).unwrap();
//! assert_eq!(validated.format(), OutputFormat::Cv);
//! ```

pub mod error;
pub mod validator;

pub use error::ValidationError;
pub use validator::{FnLogger, Logger, TracingLogger, ValidatedCV, validate_cv};
