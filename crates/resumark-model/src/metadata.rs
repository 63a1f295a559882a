//! Metadata fields and their resolved values.
//!
//! Each canonical metadata field can come from the document frontmatter
//! or, as a fallback, from one of a fixed list of environment variables.
//! The field table is static data, like the section registry.

use resumark_source_map::Range;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Definition of one metadata field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
    /// Canonical frontmatter key.
    pub key: &'static str,
    /// Whether validation requires this field to resolve.
    pub required: bool,
    /// Environment variables consulted, in order, when the frontmatter
    /// does not supply a non-empty value.
    pub env_vars: &'static [&'static str],
}

const METADATA_FIELDS: &[FieldDef] = &[
    FieldDef {
        key: "name",
        required: true,
        env_vars: &["CV_NAME"],
    },
    FieldDef {
        key: "email_address",
        required: true,
        env_vars: &["CV_EMAIL", "CV_EMAIL_ADDRESS"],
    },
    FieldDef {
        key: "phone_number",
        required: true,
        env_vars: &["CV_PHONE", "CV_PHONE_NUMBER"],
    },
    FieldDef {
        key: "home_address",
        required: false,
        env_vars: &["CV_ADDRESS"],
    },
    FieldDef {
        key: "linkedin",
        required: false,
        env_vars: &["CV_LINKEDIN"],
    },
    FieldDef {
        key: "github",
        required: false,
        env_vars: &["CV_GITHUB"],
    },
    FieldDef {
        key: "website",
        required: false,
        env_vars: &["CV_WEBSITE"],
    },
    FieldDef {
        key: "dob",
        required: false,
        env_vars: &["CV_DOB", "CV_BIRTH_DATE"],
    },
    FieldDef {
        key: "gender",
        required: false,
        env_vars: &["CV_GENDER"],
    },
    FieldDef {
        key: "name_furigana",
        required: false,
        env_vars: &["CV_NAME_FURIGANA"],
    },
    FieldDef {
        key: "address_furigana",
        required: false,
        env_vars: &["CV_ADDRESS_FURIGANA"],
    },
];

/// The full metadata field table.
pub fn metadata_fields() -> &'static [FieldDef] {
    METADATA_FIELDS
}

/// Definition for one canonical key, if recognized.
pub fn metadata_field(key: &str) -> Option<&'static FieldDef> {
    METADATA_FIELDS.iter().find(|def| def.key == key)
}

/// Where a resolved metadata value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataSource {
    /// The value appeared in the frontmatter at this range.
    Frontmatter(Range),
    /// The value came from the named environment variable.
    Environment(String),
}

/// A resolved metadata value with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataValue {
    pub value: String,
    pub source: MetadataSource,
}

/// Resolved metadata: canonical field name to value.
///
/// Only non-empty values are stored; a field that resolved to nothing is
/// simply absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    values: BTreeMap<String, MetadataValue>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved value. Empty or whitespace-only values are
    /// ignored so that "present but empty" and "absent" are equivalent
    /// for validation.
    pub fn insert(&mut self, key: impl Into<String>, value: MetadataValue) {
        if value.value.trim().is_empty() {
            return;
        }
        self.values.insert(key.into(), value);
    }

    /// The resolved value for a field, with provenance.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.values.get(key)
    }

    /// The resolved string for a field.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.value.as_str())
    }

    /// Whether a field failed to resolve to a non-empty value.
    pub fn is_missing(&self, key: &str) -> bool {
        self.value(key).is_none()
    }

    /// Iterate resolved fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
