//! Pagination contract violations

/// A [`PaginationDescriptor`](crate::table::PaginationDescriptor) that breaks
/// its contract.
///
/// The windower never clamps or rejects a bad descriptor on its own; hosts
/// that want to catch caller mistakes early call `validate()` and get one of
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// Page size must be at least one row.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// Current page lies outside `1..=max(total_pages, 1)`.
    #[error("Page {page} is out of range (1..={max})")]
    PageOutOfRange { page: usize, max: usize },
}

impl PaginationError {
    /// Creates a new out-of-range error.
    pub fn out_of_range(page: usize, max: usize) -> Self {
        Self::PageOutOfRange { page, max }
    }
}
