//! Shell error types

use thiserror::Error;

/// Errors raised by the checked builder and dispatch entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Two options share the same value
    #[error("Duplicate option value: {0}")]
    DuplicateValue(String),

    /// An option has an empty label
    #[error("Option at index {0} has an empty label")]
    EmptyLabel(usize),

    /// An event named a row that is not in the rendered list
    #[error("Row {index} is outside the rendered list ({len} rows)")]
    RowOutOfRange {
        /// Requested row
        index: usize,
        /// Rows currently rendered
        len: usize,
    },

    /// A row event arrived while the dropdown is closed
    #[error("Dropdown is closed")]
    DropdownClosed,

    /// The clear control is not rendered
    #[error("Clear control is not available")]
    ClearUnavailable,
}

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, ShellError>;
