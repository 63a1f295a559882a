//! validate-cv - CLI entry point.
//!
//! Thin consumer of the parsing and validation crates: reads one CV
//! document, parses it, validates it against a target output format,
//! and reports every problem found. Exits non-zero when any parse
//! issue or validation error exists; warnings never affect the exit
//! code.

mod error_conversion;

use anyhow::{Context, Result};
use clap::Parser;
use resumark_model::OutputFormat;
use resumark_validation::{TracingLogger, validate_cv};
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use error_conversion::{parse_issues_to_diagnostic, validation_errors_to_diagnostic};

/// Validate a CV markdown document against an output format
#[derive(Parser, Debug)]
#[command(name = "validate-cv")]
#[command(about = "Validate CV markdown documents", long_about = None)]
struct Args {
    /// Path to the CV document to validate
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Output format to validate against (cv, rirekisho, both)
    #[arg(long, default_value = "cv")]
    format: OutputFormat,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "validate_cv=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(2);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;

    let parsed = resumark_parser::parse(&content);
    let validation = validate_cv(&parsed.cv, args.format, &TracingLogger);

    if args.json {
        let errors = validation.as_ref().err().cloned().unwrap_or_default();
        let clean = parsed.issues.is_empty() && errors.is_empty();
        let report = serde_json::json!({
            "format": args.format.as_str(),
            "parse_issues": parsed.issues,
            "errors": errors,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);

        if clean {
            return Ok(());
        }
        process::exit(1);
    }

    if !parsed.issues.is_empty() {
        eprintln!("{}", parse_issues_to_diagnostic(&parsed.issues).to_text());
    }

    match validation {
        Ok(_) if parsed.issues.is_empty() => {
            println!("✓ Validation successful");
            println!("  Input: {}", args.input.display());
            println!("  Format: {}", args.format);
            Ok(())
        }
        Ok(_) => process::exit(1),
        Err(errors) => {
            eprintln!(
                "{}",
                validation_errors_to_diagnostic(&errors, args.format).to_text()
            );
            process::exit(1);
        }
    }
}
