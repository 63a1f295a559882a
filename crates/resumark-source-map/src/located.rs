//! A value paired with the source span it was parsed from.

use crate::types::Range;
use serde::{Deserialize, Serialize};

/// A parsed value together with the exact source range it came from.
///
/// The pairing is purely descriptive: wrapping a value has no ownership
/// or lifetime implications. Any scalar, list item, or structured field
/// extracted by the parser may be wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Located<T> {
    /// The parsed value.
    pub value: T,
    /// The source span the value was parsed from.
    pub range: Range,
}

impl<T> Located<T> {
    /// Pair a value with its source range.
    pub fn new(value: T, range: Range) -> Self {
        Self { value, range }
    }

    /// Map the inner value, keeping the range.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Located<U> {
        Located {
            value: f(self.value),
            range: self.range,
        }
    }

    /// Borrow the inner value, keeping the range.
    pub fn as_ref(&self) -> Located<&T> {
        Located {
            value: &self.value,
            range: self.range,
        }
    }
}

impl Located<String> {
    /// View a located string as a located `&str`.
    pub fn as_str(&self) -> Located<&str> {
        Located {
            value: self.value.as_str(),
            range: self.range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Range;

    #[test]
    fn located_preserves_value_and_range() {
        let range = Range::from_coords(2, 0, 2, 5);
        let located = Located::new(42_i64, range);
        assert_eq!(located.value, 42);
        assert_eq!(located.range, range);
    }

    #[test]
    fn located_holds_optional_values() {
        let range = Range::from_coords(0, 0, 0, 0);
        let located: Located<Option<String>> = Located::new(None, range);
        assert_eq!(located.value, None);
        assert_eq!(located.range, range);
    }

    #[test]
    fn map_keeps_range() {
        let range = Range::from_coords(1, 2, 1, 8);
        let located = Located::new("2021-04".to_string(), range);
        let mapped = located.map(|s| s.len());
        assert_eq!(mapped.value, 7);
        assert_eq!(mapped.range, range);
    }
}
