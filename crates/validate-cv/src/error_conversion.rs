//! Conversion from parser/validator records to diagnostic messages.

use resumark_model::OutputFormat;
use resumark_parser::ParseIssue;
use resumark_reporting::{DiagnosticMessage, DiagnosticMessageBuilder};
use resumark_validation::ValidationError;

/// Bundle all validation errors into one tidyverse-style message.
pub fn validation_errors_to_diagnostic(
    errors: &[ValidationError],
    format: OutputFormat,
) -> DiagnosticMessage {
    let mut builder = DiagnosticMessageBuilder::error("CV validation failed").problem(format!(
        "The document does not satisfy the requirements of format `{format}`"
    ));

    for error in errors {
        builder = builder.add_detail(error.message.clone());
    }

    builder
        .add_hint("Fix the fields and sections listed above and validate again?")
        .build()
}

/// Bundle all parse issues into one message, each anchored at its range.
pub fn parse_issues_to_diagnostic(issues: &[ParseIssue]) -> DiagnosticMessage {
    let mut builder = DiagnosticMessageBuilder::error("CV document has parse problems")
        .problem("Some constructs could not be decoded and were skipped");

    for issue in issues {
        builder = builder.add_detail_at(issue.message.clone(), issue.range);
    }

    builder.build()
}
