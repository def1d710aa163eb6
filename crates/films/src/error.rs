// ABOUTME: Error types for film table parsing and export.
// ABOUTME: Provides FilmError with MissingTable, InvalidRow, and output variants.

use thiserror::Error;

/// Errors that can occur while parsing or exporting the film table.
#[derive(Debug, Error)]
pub enum FilmError {
    /// The page has no table body to read rows from.
    #[error("no table body found in page")]
    MissingTable,

    /// A data row could not be read. `row` is the 1-based position of the `<tr>`.
    #[error("invalid row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("csv output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("json output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl FilmError {
    /// Creates an InvalidRow error.
    pub fn invalid_row(row: usize, reason: impl Into<String>) -> Self {
        FilmError::InvalidRow {
            row,
            reason: reason.into(),
        }
    }
}
