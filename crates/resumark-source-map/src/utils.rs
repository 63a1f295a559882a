//! Conversion between byte offsets and line/character positions.

use crate::types::{Position, Range};

/// Convert a byte offset into a [`Position`].
///
/// The character component counts UTF-16 code units, matching editor
/// protocol semantics. Returns `None` if the offset is out of bounds.
pub fn offset_to_position(source: &str, offset: usize) -> Option<Position> {
    if offset > source.len() {
        return None;
    }

    let mut line = 0u32;
    let mut character = 0u32;
    let mut current_offset = 0;

    for ch in source.chars() {
        if current_offset >= offset {
            break;
        }

        if ch == '\n' {
            line += 1;
            character = 0;
        } else {
            character += ch.len_utf16() as u32;
        }

        current_offset += ch.len_utf8();
    }

    Some(Position::new(line, character))
}

/// Convert a [`Position`] into a byte offset.
///
/// Returns `None` if the position does not exist in the source.
pub fn position_to_offset(source: &str, pos: Position) -> Option<usize> {
    let mut line = 0u32;
    let mut character = 0u32;
    let mut offset = 0;

    for ch in source.chars() {
        if line == pos.line && character == pos.character {
            return Some(offset);
        }

        if ch == '\n' {
            line += 1;
            character = 0;
        } else {
            character += ch.len_utf16() as u32;
        }

        offset += ch.len_utf8();
    }

    // The end of the source is a valid position.
    if line == pos.line && character == pos.character {
        return Some(offset);
    }

    None
}

/// Create a [`Range`] spanning two byte offsets in `source`.
///
/// Returns `None` if either offset is out of bounds.
pub fn range_between(source: &str, start: usize, end: usize) -> Option<Range> {
    let start = offset_to_position(source, start)?;
    let end = offset_to_position(source, end)?;
    Some(Range::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_to_position_simple() {
        let source = "hello\nworld";

        let pos = offset_to_position(source, 0).unwrap();
        assert_eq!(pos, Position::new(0, 0));

        let pos = offset_to_position(source, 3).unwrap();
        assert_eq!(pos, Position::new(0, 3));

        // After newline (beginning of second line)
        let pos = offset_to_position(source, 6).unwrap();
        assert_eq!(pos, Position::new(1, 0));

        let pos = offset_to_position(source, 9).unwrap();
        assert_eq!(pos, Position::new(1, 3));
    }

    #[test]
    fn offset_to_position_out_of_bounds() {
        assert!(offset_to_position("hello", 100).is_none());
    }

    #[test]
    fn offset_to_position_end() {
        let pos = offset_to_position("hello", 5).unwrap();
        assert_eq!(pos, Position::new(0, 5));
    }

    #[test]
    fn offset_to_position_multibyte() {
        // "日" is 3 bytes in UTF-8 and 1 UTF-16 code unit.
        let source = "日本\nabc";
        let pos = offset_to_position(source, 6).unwrap();
        assert_eq!(pos, Position::new(0, 2));

        let pos = offset_to_position(source, 7).unwrap();
        assert_eq!(pos, Position::new(1, 0));
    }

    #[test]
    fn position_to_offset_simple() {
        let source = "hello\nworld";

        assert_eq!(position_to_offset(source, Position::new(0, 0)), Some(0));
        assert_eq!(position_to_offset(source, Position::new(0, 3)), Some(3));
        assert_eq!(position_to_offset(source, Position::new(1, 0)), Some(6));
        assert_eq!(position_to_offset(source, Position::new(1, 3)), Some(9));
    }

    #[test]
    fn position_to_offset_out_of_bounds() {
        let source = "hello\nworld";
        assert!(position_to_offset(source, Position::new(10, 0)).is_none());
        assert!(position_to_offset(source, Position::new(0, 100)).is_none());
    }

    #[test]
    fn roundtrip() {
        let source = "hello\nworld\ntest";

        for test_offset in [0, 3, 6, 10, 16] {
            let pos = offset_to_position(source, test_offset).unwrap();
            let back = position_to_offset(source, pos).unwrap();
            assert_eq!(test_offset, back);
        }
    }

    #[test]
    fn range_between_offsets() {
        let source = "line1\nline2";
        let range = range_between(source, 6, 11).unwrap();
        assert_eq!(range.start, Position::new(1, 0));
        assert_eq!(range.end, Position::new(1, 5));
    }
}
