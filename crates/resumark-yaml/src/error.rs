//! Error types for YAML parsing with source ranges.

use resumark_source_map::Range;
use thiserror::Error;

/// Result type alias for resumark-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading embedded YAML.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// YAML syntax error reported by the scanner.
    #[error("YAML syntax error: {message}")]
    Syntax {
        message: String,
        range: Option<Range>,
    },

    /// The input contained no YAML document at all.
    #[error("no YAML document found")]
    EmptyDocument,
}

impl Error {
    /// The source range the error applies to, when known.
    pub fn range(&self) -> Option<Range> {
        match self {
            Error::Syntax { range, .. } => *range,
            Error::EmptyDocument => None,
        }
    }
}

impl From<yaml_rust2::ScanError> for Error {
    fn from(err: yaml_rust2::ScanError) -> Self {
        Error::Syntax {
            message: err.to_string(),
            range: None,
        }
    }
}
