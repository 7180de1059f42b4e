extern crate alloc;
use alloc::vec::Vec;

use crate::width::display_width;
use crate::{Line, ParagraphLayout};

/// Runs the first-fit line-breaking algorithm to calculate the break points for a paragraph.
///
/// Words are packed greedily: a word joins the current line if the line, joined with single
/// spaces, still fits within the line width. A word that does not fit starts a new line. A word
/// wider than the line width is placed alone on its own line and overflows it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstFit;

impl FirstFit {
    /// Creates a new FirstFit layout.
    pub fn new() -> Self {
        FirstFit
    }
}

impl ParagraphLayout for FirstFit {
    fn layout_paragraph(&self, words: &[&str], line_width: usize) -> Vec<Line> {
        let l = FirstFitLayout {
            line_width,
            width: 0,
            count: 0,
            lines: Vec::new(),
        };
        l.layout_paragraph(words)
    }
}

struct FirstFitLayout {
    line_width: usize,

    /// Width of the current line's words joined by single spaces.
    width: usize,
    /// Number of words on the current line.
    count: usize,

    lines: Vec<Line>,
}

impl FirstFitLayout {
    fn break_at(&mut self, at: usize) {
        self.lines.push(Line { break_at: at });
        self.width = 0;
        self.count = 0;
    }

    fn layout_paragraph(mut self, words: &[&str]) -> Vec<Line> {
        for (b, word) in words.iter().enumerate() {
            let word_width = display_width(word);
            let candidate = if self.count == 0 {
                word_width
            } else {
                self.width + 1 + word_width
            };
            if candidate > self.line_width && self.count != 0 {
                self.break_at(b);
                self.width = word_width;
            } else {
                self.width = candidate;
            }
            self.count += 1;
        }
        self.break_at(words.len());

        self.lines
    }
}
