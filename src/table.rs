extern crate alloc;
use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::{cell_length, concat_blocks, Error, Filler, Result};

/// The default number of newlines placed between table rows.
pub const DEFAULT_ROW_SPACING: usize = 2;
/// The default number of spaces placed between table columns.
pub const DEFAULT_COL_SPACING: usize = 3;
/// The default maximum column width.
pub const DEFAULT_COL_WIDTH: usize = 30;

/// Lays out rows of text cells as an aligned plain-text table.
///
/// Each column is as wide as its longest cell, capped at the maximum column width. When
/// justification is enabled, every cell is first filled and justified to the maximum column
/// width. Unjustified cells are laid out as given: a cell wider than its column is not wrapped
/// and pushes the rest of its row to the right.
///
/// Rows may have differing numbers of cells; a column's width only considers the rows that have
/// a cell at that index.
#[derive(Debug, Clone, Copy)]
pub struct TableFormatter {
    row_spacing: usize,
    col_spacing: usize,
    col_width: usize,
    justify: bool,
}

impl TableFormatter {
    /// Creates a new TableFormatter with default parameter values.
    pub fn new() -> Self {
        TableFormatter {
            row_spacing: DEFAULT_ROW_SPACING,
            col_spacing: DEFAULT_COL_SPACING,
            col_width: DEFAULT_COL_WIDTH,
            justify: false,
        }
    }

    /// Sets the number of newlines between rows. Defaults to 2, which leaves one blank line.
    pub fn with_row_spacing(mut self, row_spacing: usize) -> Self {
        self.row_spacing = row_spacing;
        self
    }

    /// Sets the number of spaces between columns. Defaults to 3.
    pub fn with_col_spacing(mut self, col_spacing: usize) -> Self {
        self.col_spacing = col_spacing;
        self
    }

    /// Sets the maximum column width, which is also the fill width for justified cells. Defaults
    /// to 30.
    pub fn with_col_width(mut self, col_width: usize) -> Self {
        self.col_width = col_width;
        self
    }

    /// Sets whether cells are filled and justified to the maximum column width. Defaults to false.
    pub fn with_justify(mut self, justify: bool) -> Self {
        self.justify = justify;
        self
    }

    /// Formats `rows`, drawing justification gaps from `rng`.
    pub fn format_with<T, S, R>(&self, rows: &[T], rng: &mut R) -> Result<String>
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if self.col_width == 0 {
            return Err(Error::InvalidWidth {
                width: self.col_width,
            });
        }
        if let Some(row) = rows.iter().position(|r| r.as_ref().is_empty()) {
            return Err(Error::EmptyRow { row });
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "format_table",
            rows = rows.len(),
            col_width = self.col_width,
            justify = self.justify
        )
        .entered();

        let widths = column_widths(rows, self.col_width);
        let cells = self.fill_cells(rows, rng)?;

        let spacer = " ".repeat(self.col_spacing);
        let separator = "\n".repeat(self.row_spacing);

        let mut result = String::new();
        for (i, row) in cells.iter().enumerate() {
            if i != 0 {
                result.push_str(&separator);
            }
            result.push_str(&self.render_row(row, &widths, &spacer));
        }
        let trimmed = result.trim_end_matches('\n').len();
        result.truncate(trimmed);
        Ok(result)
    }

    /// Formats `rows` using a generator seeded from the thread-local entropy source.
    #[cfg(feature = "std")]
    pub fn format<T, S>(&self, rows: &[T]) -> Result<String>
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.format_with(rows, &mut rand::thread_rng())
    }

    /// Produces the cell text to lay out, leaving the input rows untouched.
    fn fill_cells<'a, T, S, R>(&self, rows: &'a [T], rng: &mut R) -> Result<Vec<Vec<Cow<'a, str>>>>
    where
        T: AsRef<[S]>,
        S: AsRef<str> + 'a,
        R: Rng + ?Sized,
    {
        let filler = Filler::new().with_width(self.col_width).with_justify(true);
        rows.iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|cell| {
                        if self.justify {
                            filler.fill_with(cell.as_ref(), rng).map(Cow::Owned)
                        } else {
                            Ok(Cow::Borrowed(cell.as_ref()))
                        }
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect()
    }

    fn render_row(&self, row: &[Cow<'_, str>], widths: &[usize], spacer: &str) -> String {
        let mut rendered = String::from(row[0].as_ref());
        let mut width = widths[0];
        for (cell, col_width) in row.iter().zip(widths).skip(1) {
            rendered = concat_blocks(&rendered, Some(width), spacer);
            rendered = concat_blocks(&rendered, Some(width + self.col_spacing), cell);
            width += self.col_spacing + col_width;
        }
        rendered
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the width of every column: the longest cell at that index across all rows, capped at
/// `cap`. A cell's length is measured over its whole text with each newline counting as one
/// column (see [`cell_length`]). The result has one entry per column of the longest row.
pub fn column_widths<T, S>(rows: &[T], cap: usize) -> Vec<usize>
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        let row = row.as_ref();
        if row.len() > widths.len() {
            widths.resize(row.len(), 0);
        }
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = usize::max(*width, cell_length(cell.as_ref()));
        }
    }
    for width in &mut widths {
        *width = usize::min(*width, cap);
    }
    widths
}

/// Formats `rows` as a table with the given spacing and maximum column width, justifying cells
/// if `justify` is set.
#[cfg(feature = "std")]
pub fn format_table<T, S>(
    rows: &[T],
    row_spacing: usize,
    col_spacing: usize,
    col_width: usize,
    justify: bool,
) -> Result<String>
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    TableFormatter::new()
        .with_row_spacing(row_spacing)
        .with_col_spacing(col_spacing)
        .with_col_width(col_width)
        .with_justify(justify)
        .format(rows)
}
