//! Errors
//!
//! Custom error types used throughout the `arbol` crate.
use thiserror::Error;

/// Errors that can occur while loading data or working with a tree.
#[derive(Debug, Error)]
pub enum ArbolError {
    /// A row's length disagrees with the attribute count.
    #[error("Row {row} has {found} values, expected {expected} (attributes plus class label).")]
    RowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of values the row actually has.
        found: usize,
        /// Number of values every row must have.
        expected: usize,
    },
    /// A value outside the binary domain.
    #[error("The value {value} at row {row}, column {column} is outside the binary domain {{0, 1}}.")]
    NonBinaryValue {
        /// The offending value.
        value: u8,
        /// Index of the offending row.
        row: usize,
        /// Index of the offending column.
        column: usize,
    },
    /// Fit was invoked on a dataset with no rows.
    #[error("Cannot fit a tree on an empty dataset.")]
    EmptyDataset,
    /// The gain scan produced no candidate despite a non-empty attribute set.
    #[error("No split candidate found among {0} remaining attributes.")]
    NoSplitCandidate(usize),
    /// A field in a data file is not an integer.
    #[error("Unable to parse the value {value:?} at row {row}, column {column} as an integer.")]
    ParseValue {
        /// The raw field text.
        value: String,
        /// Index of the offending data row.
        row: usize,
        /// Index of the offending column.
        column: usize,
    },
    /// Unable to write a model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// Unable to read a model or data file.
    #[error("Unable to read from file: {0}")]
    UnableToRead(String),
}
