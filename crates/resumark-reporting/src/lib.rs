//! Structured diagnostic messages for resumark tooling.
//!
//! Messages follow the tidyverse four-part structure:
//!
//! 1. **Title**: brief statement of what went wrong
//! 2. **Problem**: the "must" or "can't" statement
//! 3. **Details**: specific bulleted information (✖/ℹ/•)
//! 4. **Hints**: optional guidance for fixing (ends with ?)
//!
//! The builder API encodes this structure directly:
//!
//! ```rust
//! use resumark_reporting::DiagnosticMessageBuilder;
//!
//! let error = DiagnosticMessageBuilder::error("Missing required metadata")
//!     .problem("Every CV must carry contact information")
//!     .add_detail("`email_address` did not resolve")
//!     .add_hint("Add `email_address` to the frontmatter?")
//!     .build();
//!
//! let text = error.to_text();
//! assert!(text.contains("Error: Missing required metadata"));
//! ```

pub mod builder;
pub mod diagnostic;

pub use builder::DiagnosticMessageBuilder;
pub use diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent};
