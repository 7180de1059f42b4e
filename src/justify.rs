extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::width::joined_width;

/// Stretches a line of words to `width` columns by inserting extra spaces between words.
///
/// Gaps are drawn without replacement from a shuffled pool containing the gap after every word
/// but the last; each draw widens that gap by one space. Once every gap has been widened the pool
/// is refilled and reshuffled, so extra space is spread as evenly as possible while its placement
/// stays random. A single word has no gaps, so the pool degenerates to the position after it and
/// the line is padded with trailing spaces.
///
/// Lines that are already at least `width` columns wide are returned joined by single spaces.
pub fn justify_line<R: Rng + ?Sized>(words: &[&str], width: usize, rng: &mut R) -> String {
    if words.is_empty() {
        return String::new();
    }

    let mut extra = alloc::vec![0usize; words.len()];
    let mut line_width = joined_width(words);
    let mut pool: Vec<usize> = Vec::new();
    while line_width < width {
        let Some(gap) = pool.pop() else {
            pool.extend(0..usize::max(1, words.len() - 1));
            pool.shuffle(rng);
            continue;
        };
        extra[gap] += 1;
        line_width += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        words = words.len(),
        inserted = extra.iter().sum::<usize>(),
        "justified line"
    );

    let mut line = String::with_capacity(line_width);
    for (i, (word, extra)) in words.iter().zip(extra).enumerate() {
        line.push_str(word);
        for _ in 0..extra {
            line.push(' ');
        }
        if i + 1 != words.len() {
            line.push(' ');
        }
    }
    line
}
