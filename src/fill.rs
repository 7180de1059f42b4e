extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::{justify_line, Error, FirstFit, ParagraphLayout, Result};

/// The default target line width.
pub const DEFAULT_WIDTH: usize = 80;

/// Fills paragraphs of text to a target width, optionally justifying them.
///
/// Paragraphs are separated by runs of two or more newlines. Within a paragraph, all whitespace
/// collapses to single spaces and the words are broken into lines by the configured
/// [`ParagraphLayout`]. Lines within a paragraph are joined with a single newline, and paragraphs
/// are always rejoined with exactly two newlines, however many separated them in the input.
///
/// When justification is enabled, every line of a paragraph except the last is stretched to the
/// target width with [`justify_line`].
#[derive(Debug, Clone)]
pub struct Filler<L = FirstFit> {
    width: usize,
    justify: bool,
    layout: L,
}

impl Filler {
    /// Creates a new Filler with a width of 80, no justification, and first-fit line breaking.
    pub fn new() -> Self {
        Filler {
            width: DEFAULT_WIDTH,
            justify: false,
            layout: FirstFit::new(),
        }
    }
}

impl Default for Filler {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ParagraphLayout> Filler<L> {
    /// Sets the target line width. Defaults to 80.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets whether non-final lines are stretched to the target width. Defaults to false.
    pub fn with_justify(mut self, justify: bool) -> Self {
        self.justify = justify;
        self
    }

    /// Sets the line-breaking algorithm used for each paragraph.
    pub fn with_layout<M: ParagraphLayout>(self, layout: M) -> Filler<M> {
        Filler {
            width: self.width,
            justify: self.justify,
            layout,
        }
    }

    /// Fills `text`, drawing justification gaps from `rng`.
    pub fn fill_with<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<String> {
        if self.width == 0 {
            return Err(Error::InvalidWidth { width: self.width });
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "fill_paragraphs",
            width = self.width,
            justify = self.justify,
            len = text.len()
        )
        .entered();

        let mut result = String::with_capacity(text.len());
        for (i, paragraph) in split_paragraphs(text).into_iter().enumerate() {
            if i != 0 {
                result.push_str("\n\n");
            }
            self.fill_paragraph(paragraph, rng, &mut result);
        }
        Ok(result)
    }

    /// Fills `text` using a generator seeded from the thread-local entropy source.
    #[cfg(feature = "std")]
    pub fn fill(&self, text: &str) -> Result<String> {
        self.fill_with(text, &mut rand::thread_rng())
    }

    fn fill_paragraph<R: Rng + ?Sized>(&self, paragraph: &str, rng: &mut R, out: &mut String) {
        let words: Vec<&str> = paragraph.split_whitespace().collect();
        let lines = self.layout.layout_paragraph(&words, self.width);

        let mut start = 0;
        for (i, line) in lines.iter().enumerate() {
            let line_words = line.words(&words, start);
            if i != 0 {
                out.push('\n');
            }
            if self.justify && i + 1 != lines.len() {
                out.push_str(&justify_line(line_words, self.width, rng));
            } else {
                out.push_str(&line_words.join(" "));
            }
            start = line.break_at;
        }
    }
}

/// Fills `text` to `width` with the default first-fit layout, justifying every non-final line of
/// each paragraph if `justify` is set.
#[cfg(feature = "std")]
pub fn fill(text: &str, width: usize, justify: bool) -> Result<String> {
    Filler::new()
        .with_width(width)
        .with_justify(justify)
        .fill(text)
}

/// Splits text on runs of two or more newlines. Leading and trailing separators produce empty
/// paragraphs.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut rest = text;
    while let Some(at) = rest.find("\n\n") {
        paragraphs.push(&rest[..at]);
        rest = rest[at..].trim_start_matches('\n');
    }
    paragraphs.push(rest);
    paragraphs
}
