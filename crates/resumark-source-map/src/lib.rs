//! Source position tracking for resumark documents.
//!
//! Every value the parser extracts from a CV document keeps the exact
//! source span it came from, so that validation errors can point at the
//! offending text and editor tooling can map structured data back to
//! source ranges.
//!
//! The core types are:
//! - [`Position`]: a zero-based line/character coordinate
//! - [`Range`]: a start/end pair of positions
//! - [`Located<T>`]: a value paired with the range it was parsed from
//!
//! # Example
//!
//! ```rust
//! use resumark_source_map::{Located, Position, Range};
//!
//! let range = Range::from_coords(0, 7, 0, 12);
//! let title = Located::new("Hello".to_string(), range);
//!
//! assert_eq!(title.value, "Hello");
//! assert_eq!(title.range.start, Position::new(0, 7));
//! ```

pub mod located;
pub mod types;
pub mod utils;

pub use located::Located;
pub use types::{Position, Range};
pub use utils::{offset_to_position, position_to_offset, range_between};
