use thiserror::Error;

/// Errors reported by the filling and table layout entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A line or column width of zero was requested.
    #[error("invalid width {width}: widths must be positive")]
    InvalidWidth { width: usize },

    /// A table row has no cells, so there is nothing to seed the row's block with.
    #[error("table row {row} has no cells")]
    EmptyRow { row: usize },
}

/// Result type for layout operations.
pub type Result<T> = core::result::Result<T, Error>;
