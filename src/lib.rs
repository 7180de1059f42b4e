//! Paragraph filling, line justification, and table layout for fixed-width text.
//!
//! Text is filled greedily to a target column width, optionally justified by
//! spreading extra spaces over randomly chosen word gaps, and tables are laid out
//! by filling each cell and concatenating the resulting blocks side by side.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
use alloc::vec::Vec;

mod concat;
pub use concat::*;

mod error;
pub use error::*;

mod fill;
pub use fill::*;

mod first_fit;
pub use first_fit::*;

mod justify;
pub use justify::*;

mod table;
pub use table::*;

mod width;
pub use width::*;

/// A single line of a laid-out paragraph, represented by its break point.
#[derive(Debug, Default, Clone, Copy)]
pub struct Line {
    /// The index of the word at which to break this line. The line holds every word from the
    /// previous line's break point up to, but not including, this word.
    pub break_at: usize,
}

impl Line {
    /// Returns the words of this line, given the paragraph's words and the line's starting index.
    pub fn words<'a, 'w>(&self, words: &'a [&'w str], start: usize) -> &'a [&'w str] {
        &words[start..self.break_at]
    }
}

/// Represents a paragraph layout algorithm.
pub trait ParagraphLayout {
    /// Lays out a paragraph with the given line width that consists of a list of words and
    /// returns the laid-out lines. Implementations must return at least one line, and the last
    /// line must break at `words.len()`.
    fn layout_paragraph(&self, words: &[&str], line_width: usize) -> Vec<Line>;
}
