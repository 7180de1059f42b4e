use unicode_width::UnicodeWidthStr;

/// Returns the number of terminal columns occupied by a single line of text.
pub fn display_width(line: &str) -> usize {
    line.width()
}

/// Returns the width of a block of text: the display width of its widest line.
pub fn block_width(block: &str) -> usize {
    block.split('\n').map(display_width).max().unwrap_or(0)
}

/// Returns the length of a table cell's raw text: the display width of all its lines plus one
/// column for every newline.
pub fn cell_length(cell: &str) -> usize {
    cell.split('\n').map(display_width).sum::<usize>() + cell.matches('\n').count()
}

/// Returns the width of `words` joined by single spaces.
pub(crate) fn joined_width(words: &[&str]) -> usize {
    let gaps = words.len().saturating_sub(1);
    words.iter().map(|w| display_width(w)).sum::<usize>() + gaps
}
