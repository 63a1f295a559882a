//! The batch validator.

use crate::error::ValidationError;
use resumark_model::{
    OutputFormat, ParsedCV, metadata_fields, required_sections_for_format, section_def,
};

/// Warning sink injected into the validator.
///
/// Warnings (unknown section headings) are advisory: they never join
/// the error batch and never block validation.
pub trait Logger {
    fn warn(&self, message: &str);
}

/// Adapter that turns any `Fn(&str)` closure into a [`Logger`], which
/// lets tests count warning invocations directly.
pub struct FnLogger<F: Fn(&str)>(pub F);

impl<F: Fn(&str)> Logger for FnLogger<F> {
    fn warn(&self, message: &str) {
        (self.0)(message)
    }
}

/// Default logger: forwards warnings to `tracing::warn!`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// A CV that passed validation for a specific format.
///
/// Only the validator constructs these; holding one proves the document
/// satisfied every requirement of `format` at validation time. The
/// inner document is a structural copy — the input `ParsedCV` is never
/// mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCV {
    cv: ParsedCV,
    format: OutputFormat,
}

impl ValidatedCV {
    /// The validated document.
    pub fn cv(&self) -> &ParsedCV {
        &self.cv
    }

    /// The format the document was validated for.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Unwrap into the inner document.
    pub fn into_inner(self) -> ParsedCV {
        self.cv
    }
}

/// Collects failures across all checks before deciding the outcome.
struct ValidationContext {
    errors: Vec<ValidationError>,
}

impl ValidationContext {
    fn new() -> Self {
        Self { errors: Vec::new() }
    }

    fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }
}

/// Validate a parsed CV against a target output format.
///
/// Metadata and section checks run independently; all failures from
/// both are accumulated and returned together. Returns a [`ValidatedCV`]
/// only when the error list is empty — there is no partial success.
pub fn validate_cv(
    parsed: &ParsedCV,
    format: OutputFormat,
    logger: &dyn Logger,
) -> Result<ValidatedCV, Vec<ValidationError>> {
    let mut ctx = ValidationContext::new();

    validate_metadata(parsed, &mut ctx);
    validate_sections(parsed, format, &mut ctx, logger);

    if ctx.errors.is_empty() {
        Ok(ValidatedCV {
            cv: parsed.clone(),
            format,
        })
    } else {
        Err(ctx.errors)
    }
}

fn validate_metadata(parsed: &ParsedCV, ctx: &mut ValidationContext) {
    for def in metadata_fields().iter().filter(|def| def.required) {
        if !parsed.metadata.is_missing(def.key) {
            continue;
        }

        let env_hint = def.env_vars.join(" or ");
        ctx.add_error(ValidationError::new(
            format!(
                "Required field `{key}` is missing. Add `{key}` to the frontmatter or set the {env_hint} environment variable.",
                key = def.key,
            ),
            def.key,
            "string",
            None,
        ));
    }
}

fn validate_sections(
    parsed: &ParsedCV,
    format: OutputFormat,
    ctx: &mut ValidationContext,
    logger: &dyn Logger,
) {
    for id in required_sections_for_format(format) {
        if parsed.has_section(id) {
            continue;
        }

        let tags = section_def(id)
            .map(|def| def.tags.join(", "))
            .unwrap_or_default();
        ctx.add_error(ValidationError::new(
            format!(
                "Required section `{id}` is missing for format `{format}`. Add a top-level heading using one of: {tags}.",
            ),
            id.as_str(),
            "section",
            None,
        ));
    }

    for unknown in &parsed.unknown_sections {
        logger.warn(&format!(
            "unknown section heading `{}` is not part of the CV vocabulary and will be ignored",
            unknown.value
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn parse(doc: &str) -> ParsedCV {
        resumark_parser::parse_with_lookup(doc, |_| None).cv
    }

    const VALID_CV: &str = "---\nname: Ada Lovelace\nemail_address: ada@example.org\nphone_number: \"+44 123\"\n---\n\n# Experience\n\nShipped the engine.\n";

    fn silent(_: &str) {}

    #[test]
    fn complete_cv_passes_for_cv_format() {
        let parsed = parse(VALID_CV);
        let validated = validate_cv(&parsed, OutputFormat::Cv, &FnLogger(silent)).unwrap();
        assert_eq!(validated.format(), OutputFormat::Cv);
        assert_eq!(validated.cv().sections.len(), 1);
    }

    #[test]
    fn empty_email_fails_with_email_error() {
        let doc = "---\nname: Ada\nemail_address: \"\"\nphone_number: \"123\"\n---\n\n# Experience\n\nwork\n";
        let parsed = parse(doc);
        let errors = validate_cv(&parsed, OutputFormat::Cv, &FnLogger(silent)).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.message.contains("email_address")),
            "{errors:?}"
        );
    }

    #[test]
    fn missing_sections_fail_referencing_experience() {
        let doc = "---\nname: Ada\nemail_address: a@b.c\nphone_number: \"123\"\n---\n\nno sections here\n";
        let parsed = parse(doc);
        let errors = validate_cv(&parsed, OutputFormat::Cv, &FnLogger(silent)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("experience"));
        assert_eq!(errors[0].expected_type, "section");
    }

    #[test]
    fn missing_metadata_errors_accumulate() {
        // name and phone_number both unresolved: exactly two metadata
        // errors, each naming both remediation paths.
        let doc = "---\nemail_address: a@b.c\n---\n\n# Experience\n\nwork\n";
        let parsed = parse(doc);
        let errors = validate_cv(&parsed, OutputFormat::Cv, &FnLogger(silent)).unwrap_err();

        assert_eq!(errors.len(), 2);
        let name_error = errors.iter().find(|e| e.field == "name").unwrap();
        assert!(name_error.message.contains("CV_NAME"));
        assert!(name_error.message.contains("frontmatter"));

        let phone_error = errors.iter().find(|e| e.field == "phone_number").unwrap();
        assert!(phone_error.message.contains("CV_PHONE"));
        assert!(phone_error.message.contains("frontmatter"));
    }

    #[test]
    fn metadata_and_section_errors_batch_together() {
        let parsed = parse("# Summary\n\nhello\n");
        let errors = validate_cv(&parsed, OutputFormat::Cv, &FnLogger(silent)).unwrap_err();
        // Three missing metadata fields plus the missing experience section.
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn unknown_heading_warns_exactly_once_and_is_not_an_error() {
        let doc = "---\nname: Ada\nemail_address: a@b.c\nphone_number: \"123\"\n---\n\n# Experience\n\nwork\n\n# Publications\n\npapers\n";
        let parsed = parse(doc);

        let warnings = RefCell::new(Vec::new());
        let logger = FnLogger(|message: &str| warnings.borrow_mut().push(message.to_string()));

        let result = validate_cv(&parsed, OutputFormat::Cv, &logger);
        assert!(result.is_ok());

        let warnings = warnings.into_inner();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Publications"));
    }

    #[test]
    fn rirekisho_requires_education() {
        let doc = "---\nname: Ada\nemail_address: a@b.c\nphone_number: \"123\"\n---\n\n# Experience\n\nwork\n";
        let parsed = parse(doc);
        let errors = validate_cv(&parsed, OutputFormat::Rirekisho, &FnLogger(silent)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "education");
        // Remediation names the acceptable heading tags.
        assert!(errors[0].message.contains("学歴"));
    }

    #[test]
    fn both_format_requires_the_union() {
        let doc = "---\nname: Ada\nemail_address: a@b.c\nphone_number: \"123\"\n---\n\n# Summary\n\nhi\n";
        let parsed = parse(doc);
        let errors = validate_cv(&parsed, OutputFormat::Both, &FnLogger(silent)).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"experience"));
        assert!(fields.contains(&"education"));
    }

    #[test]
    fn validation_does_not_mutate_the_input() {
        let parsed = parse(VALID_CV);
        let before = parsed.clone();
        let _ = validate_cv(&parsed, OutputFormat::Cv, &FnLogger(silent));
        assert_eq!(parsed, before);
    }
}
