//! Validation error records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One validation failure.
///
/// Descriptive, not exception-based: errors are batched by the
/// validator and reported together, each carrying enough structure for
/// precise user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Full human-readable message, including remediation hints.
    pub message: String,
    /// The metadata field or section the error applies to.
    pub field: String,
    /// What the validator expected to find.
    pub expected_type: String,
    /// What it actually found, when anything was found at all.
    pub actual_value: Option<String>,
}

impl ValidationError {
    pub fn new(
        message: impl Into<String>,
        field: impl Into<String>,
        expected_type: impl Into<String>,
        actual_value: Option<String>,
    ) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
            expected_type: expected_type.into(),
            actual_value,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_message() {
        let error = ValidationError::new(
            "Required field `name` is missing.",
            "name",
            "string",
            None,
        );
        assert_eq!(error.to_string(), "Required field `name` is missing.");
        assert_eq!(error.field, "name");
        assert_eq!(error.actual_value, None);
    }
}
