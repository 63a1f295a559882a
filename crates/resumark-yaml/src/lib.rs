//! Span-tracking YAML reader.
//!
//! CV documents embed YAML in two places: the frontmatter block and the
//! interior of `resume:<kind>` fenced blocks. Both need every scalar and
//! collection annotated with the source range it was parsed from, so this
//! crate builds a [`YamlNode`] tree from `yaml-rust2`'s marked event
//! stream instead of using a plain deserializer.
//!
//! Embedded content does not start at line zero of the document, so
//! [`parse_with_origin`] shifts all reported lines by the line on which
//! the embedded content begins.
//!
//! # Example
//!
//! ```rust
//! use resumark_yaml::parse;
//!
//! let node = parse("name: Ada Lovelace").unwrap();
//! assert!(node.is_mapping());
//! assert_eq!(node.get("name").unwrap().as_str(), Some("Ada Lovelace"));
//! ```

pub mod error;
pub mod node;
pub mod parser;

pub use error::{Error, Result};
pub use node::{MappingEntry, YamlNode};
pub use parser::{parse, parse_with_origin};
