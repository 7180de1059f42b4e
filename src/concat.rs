extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::width::{block_width, display_width};

/// Places two blocks of text side by side.
///
/// Each line of `left` is padded with trailing spaces to `left_width` columns and the matching
/// line of `right` is appended directly after it; no separator is inserted, so callers that want
/// a gap must include it in one of the blocks. If `left_width` is `None`, the width of the widest
/// line of `left` is used. When one block has fewer lines than the other, the missing lines of
/// `left` are blank lines of `left_width` spaces and the missing lines of `right` are empty.
///
/// A `left_width` narrower than a line of `left` is not an error: that line is left unpadded and
/// the right-hand block is shifted accordingly.
pub fn concat_blocks(left: &str, left_width: Option<usize>, right: &str) -> String {
    let left_width = left_width.unwrap_or_else(|| block_width(left));

    let left_lines: Vec<&str> = left.split('\n').collect();
    let right_lines: Vec<&str> = right.split('\n').collect();
    let height = usize::max(left_lines.len(), right_lines.len());

    let mut result = String::with_capacity(left.len() + right.len() + height * left_width);
    for i in 0..height {
        if i != 0 {
            result.push('\n');
        }
        let l = left_lines.get(i).copied().unwrap_or("");
        result.push_str(l);
        for _ in display_width(l)..left_width {
            result.push(' ');
        }
        result.push_str(right_lines.get(i).copied().unwrap_or(""));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_separator() {
        assert_eq!(concat_blocks("AB", Some(2), "CD"), "ABCD");
    }

    #[test]
    fn pads_short_left_lines() {
        assert_eq!(concat_blocks("A", Some(2), "CD"), "A CD");
        assert_eq!(concat_blocks("a\nbbb", None, "x\ny"), "a  x\nbbby");
    }

    #[test]
    fn synthesizes_missing_lines() {
        assert_eq!(concat_blocks("ab", Some(3), "1\n2\n3"), "ab 1\n   2\n   3");
        assert_eq!(concat_blocks("a\nb\nc", Some(2), "1"), "a 1\nb \nc ");
    }

    #[test]
    fn empty_blocks() {
        assert_eq!(concat_blocks("", None, ""), "");
        assert_eq!(concat_blocks("", Some(2), "x"), "  x");
    }

    #[test]
    fn undersized_width_misaligns_without_failing() {
        // The second line is wider than the stated width, so it is not padded and its right-hand
        // line starts one column late.
        assert_eq!(concat_blocks("ab\nabcd", Some(3), "X\nY"), "ab X\nabcdY");
    }
}
