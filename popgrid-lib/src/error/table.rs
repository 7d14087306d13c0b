//! Table operation errors

/// Errors returned by explicit table state-setting operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// No column has the given sort key.
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    /// The column exists but cannot be sorted.
    #[error("Column '{0}' is not sortable")]
    NotSortable(String),

    /// Column index past the end of the column list.
    #[error("Column index {index} out of bounds ({count} columns)")]
    ColumnIndexOutOfBounds { index: usize, count: usize },

    /// Pagination was configured with a page size of zero.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,
}

impl TableError {
    /// Creates a new unknown column error.
    pub fn unknown_column(key: impl Into<String>) -> Self {
        Self::UnknownColumn(key.into())
    }

    /// Creates a new not-sortable error.
    pub fn not_sortable(key: impl Into<String>) -> Self {
        Self::NotSortable(key.into())
    }
}
