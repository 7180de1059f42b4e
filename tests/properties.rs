//! Property-based tests for filling, justification, and table layout.

use plaintext_layout::{
    block_width, concat_blocks, display_width, justify_line, Error, Filler, TableFormatter,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategies
// ============================================================================

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

fn paragraph() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 1..40)
}

/// Paragraphs of words, with arbitrary whitespace inside paragraphs and separators of 2 to 10
/// newlines between them.
fn text() -> impl Strategy<Value = (Vec<Vec<String>>, String)> {
    prop::collection::vec(
        (paragraph(), prop::collection::vec(" |  |\t|\n", 40), 2usize..=10),
        1..5,
    )
    .prop_map(|paragraphs| {
        let mut text = String::new();
        for (i, (words, spaces, newlines)) in paragraphs.iter().enumerate() {
            if i != 0 {
                text.push_str(&"\n".repeat(*newlines));
            }
            for (j, word) in words.iter().enumerate() {
                if j != 0 {
                    text.push_str(&spaces[j]);
                }
                text.push_str(word);
            }
        }
        let words = paragraphs.into_iter().map(|(words, _, _)| words).collect();
        (words, text)
    })
}

fn fill(text: &str, width: usize, justify: bool, seed: u64) -> String {
    Filler::new()
        .with_width(width)
        .with_justify(justify)
        .fill_with(text, &mut StdRng::seed_from_u64(seed))
        .unwrap()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every unjustified line fits, unless it is a single overflowing word.
    #[test]
    fn filled_lines_fit((_, text) in text(), width in 1usize..60) {
        let filled = fill(&text, width, false, 0);
        for line in filled.lines() {
            prop_assert!(
                display_width(line) <= width || !line.contains(' '),
                "{:?} exceeds {}", line, width
            );
        }
    }

    /// Filling keeps every paragraph's words in order and separates paragraphs by exactly two
    /// newlines.
    #[test]
    fn paragraphs_and_words_are_preserved(
        (paragraphs, text) in text(),
        width in 1usize..60,
        justify in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let filled = fill(&text, width, justify, seed);
        let filled_paragraphs: Vec<&str> = filled.split("\n\n").collect();
        prop_assert_eq!(filled_paragraphs.len(), paragraphs.len());
        prop_assert!(!filled.contains("\n\n\n"));
        for (filled, words) in filled_paragraphs.iter().zip(&paragraphs) {
            let filled_words: Vec<&str> = filled.split_whitespace().collect();
            prop_assert_eq!(&filled_words, words);
        }
    }

    /// Refilling filled text at the same width changes nothing.
    #[test]
    fn refilling_is_idempotent((_, text) in text(), width in 1usize..60) {
        let once = fill(&text, width, false, 0);
        prop_assert_eq!(fill(&once, width, false, 0), once);
    }

    /// Justified lines reach the width, and the last line of each paragraph is left alone.
    #[test]
    fn justified_lines_reach_width(
        (_, text) in text(),
        width in 1usize..60,
        seed in any::<u64>(),
    ) {
        let justified = fill(&text, width, true, seed);
        let plain = fill(&text, width, false, seed);
        for (justified, plain) in justified.split("\n\n").zip(plain.split("\n\n")) {
            let justified: Vec<&str> = justified.split('\n').collect();
            let plain: Vec<&str> = plain.split('\n').collect();
            prop_assert_eq!(justified.len(), plain.len());
            let (last, rest) = justified.split_last().unwrap();
            for line in rest {
                prop_assert!(display_width(line) >= width, "{:?} is short of {}", line, width);
            }
            prop_assert_eq!(last, plain.last().unwrap());
        }
    }

    /// Justifying a line never changes its words and lands exactly on the width when stretching.
    #[test]
    fn justify_line_hits_width(
        words in paragraph(),
        extra in 0usize..30,
        seed in any::<u64>(),
    ) {
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        let natural = words.join(" ").len();
        let width = natural + extra;
        let line = justify_line(&words, width, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(display_width(&line), width);
        prop_assert_eq!(line.split_whitespace().collect::<Vec<_>>(), words);
    }

    /// Side-by-side blocks keep the taller block's height and place the right block at the
    /// left width.
    #[test]
    fn concat_aligns_right_block(
        left in prop::collection::vec("[a-z]{0,8}", 1..6),
        right in prop::collection::vec("[a-z]{1,8}", 1..6),
    ) {
        let left = left.join("\n");
        let right = right.join("\n");
        let width = block_width(&left);
        let joined = concat_blocks(&left, None, &right);
        let lines: Vec<&str> = joined.split('\n').collect();
        prop_assert_eq!(lines.len(), usize::max(left.split('\n').count(), right.split('\n').count()));
        for (line, r) in lines.iter().zip(right.split('\n')) {
            prop_assert_eq!(&line[width..], r);
        }
    }

    /// Every line of an unjustified table with single-line cells starts its columns at the same
    /// offsets.
    #[test]
    fn table_columns_line_up(
        rows in prop::collection::vec(prop::collection::vec("[a-z]{1,10}", 3), 1..8),
        col_spacing in 0usize..4,
    ) {
        let table = TableFormatter::new()
            .with_row_spacing(1)
            .with_col_spacing(col_spacing);
        let out = table.format_with(&rows, &mut StdRng::seed_from_u64(0)).unwrap();
        let lines: Vec<&str> = out.split('\n').collect();
        prop_assert_eq!(lines.len(), rows.len());

        let widths: Vec<usize> = (0..3)
            .map(|c| rows.iter().map(|r| r[c].len()).max().unwrap())
            .collect();
        for (line, row) in lines.iter().zip(&rows) {
            let mut at = 0;
            for (c, cell) in row.iter().enumerate() {
                prop_assert!(line[at..].starts_with(cell.as_str()));
                at += widths[c] + col_spacing;
            }
        }
    }
}

#[test]
fn zero_width_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        Filler::new().with_width(0).fill_with("a b", &mut rng),
        Err(Error::InvalidWidth { width: 0 })
    );
}

#[test]
fn empty_row_is_rejected() {
    let rows: Vec<Vec<&str>> = vec![vec!["a", "b"], vec![]];
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        TableFormatter::new().format_with(&rows, &mut rng),
        Err(Error::EmptyRow { row: 1 })
    );
}

#[test]
fn empty_inputs_format_to_empty_strings() {
    let rows: Vec<Vec<&str>> = Vec::new();
    assert_eq!(TableFormatter::new().format(&rows).unwrap(), "");
    assert_eq!(Filler::new().fill("").unwrap(), "");
    assert_eq!(plaintext_layout::fill("", 80, true).unwrap(), "");
}

#[test]
fn convenience_functions_match_builders() {
    let rows = vec![vec!["a", "bb"], vec!["ccc", "d"]];
    assert_eq!(
        plaintext_layout::format_table(&rows, 2, 1, 30, false).unwrap(),
        "a   bb\n\nccc d"
    );
    assert_eq!(
        plaintext_layout::fill("one two three", 7, false).unwrap(),
        "one two\nthree"
    );
}
