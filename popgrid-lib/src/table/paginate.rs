//! Page slicing and page-selector tokens.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::error::PaginationError;

/// Up to this many pages, every page gets its own token.
const MAX_UNCOMPRESSED_PAGES: usize = 7;

/// Callback receiving a requested page number.
pub type PageChangeFn = Arc<dyn Fn(usize) + Send + Sync>;

/// Where a table is on its processed row list.
///
/// Pages are 1-based. The descriptor is plain data: nothing here clamps an
/// out-of-range page, a bad descriptor just yields an empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationDescriptor {
    /// Rows per page.
    pub page_size: usize,
    /// Current page, starting at 1.
    pub current_page: usize,
    /// Number of pages.
    pub total_pages: usize,
}

impl PaginationDescriptor {
    /// Creates a descriptor from explicit values.
    pub fn new(page_size: usize, current_page: usize, total_pages: usize) -> Self {
        Self {
            page_size,
            current_page,
            total_pages,
        }
    }

    /// Creates a descriptor for `row_count` rows, deriving the page count.
    pub fn for_rows(row_count: usize, page_size: usize, current_page: usize) -> Self {
        Self::new(page_size, current_page, total_pages(row_count, page_size))
    }

    /// Checks the descriptor contract.
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        let max = self.total_pages.max(1);
        if self.current_page < 1 || self.current_page > max {
            return Err(PaginationError::out_of_range(self.current_page, max));
        }
        Ok(())
    }

    /// Returns `true` if "previous" is enabled.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Returns `true` if "next" is enabled.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Index range of the current page within `len` rows.
    ///
    /// Clipped to `len`; empty for a zero page size or page zero.
    pub fn range(&self, len: usize) -> Range<usize> {
        if self.page_size == 0 || self.current_page == 0 {
            log::warn!("Invalid pagination descriptor {:?}, showing empty page", self);
            return 0..0;
        }
        let start = (self.current_page - 1).saturating_mul(self.page_size).min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    /// Page-selector tokens for this descriptor.
    pub fn tokens(&self) -> Vec<PageToken> {
        page_tokens(self.current_page, self.total_pages)
    }
}

/// Number of pages needed for `row_count` rows; zero for a zero page size.
pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        row_count.div_ceil(page_size)
    }
}

/// One control in a page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A 1-based page number.
    Page(usize),
    /// Elided run of pages. Never clickable.
    Ellipsis,
}

impl PageToken {
    /// Returns the page number, if this is not an ellipsis.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(page) => Some(*page),
            PageToken::Ellipsis => None,
        }
    }

    /// Returns `true` if this token marks `current_page`.
    pub fn is_current(&self, current_page: usize) -> bool {
        *self == PageToken::Page(current_page)
    }

    /// Returns `true` if selecting this token would change page.
    pub fn is_clickable(&self, current_page: usize) -> bool {
        matches!(self, PageToken::Page(page) if *page != current_page)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(page) => write!(f, "{page}"),
            PageToken::Ellipsis => f.write_str("..."),
        }
    }
}

/// Build the page-selector tokens for `current_page` of `total_pages`.
///
/// Seven pages or fewer are listed in full. Beyond that the first and last
/// pages are always shown, with the current page and its neighbours between
/// them and an ellipsis standing in for each elided run.
///
/// # Example
///
/// ```
/// use popgrid_lib::table::{PageToken::*, page_tokens};
///
/// assert_eq!(
///     page_tokens(10, 20),
///     vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
/// );
/// ```
pub fn page_tokens(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    if total_pages <= MAX_UNCOMPRESSED_PAGES {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let left = current_page.saturating_sub(1).max(2);
    let right = current_page.saturating_add(1).min(total_pages - 1);

    let mut tokens = Vec::with_capacity(MAX_UNCOMPRESSED_PAGES);
    tokens.push(PageToken::Page(1));
    if left > 2 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend((left..=right).map(PageToken::Page));
    if right < total_pages - 1 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.push(PageToken::Page(total_pages));
    tokens
}

/// Index range of `descriptor`'s page within `len` rows.
pub fn page_range(len: usize, descriptor: &PaginationDescriptor) -> Range<usize> {
    descriptor.range(len)
}

/// Slice `rows` to the current page and build its page tokens.
pub fn paginate<'a, T>(rows: &'a [T], descriptor: &PaginationDescriptor) -> (&'a [T], Vec<PageToken>) {
    (&rows[page_range(rows.len(), descriptor)], descriptor.tokens())
}

/// "Showing X to Y of Z results" footer data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    /// 1-based index of the first row on the page.
    pub first: usize,
    /// 1-based index of the last row on the page.
    pub last: usize,
    /// Total processed rows.
    pub total: usize,
}

impl PageSummary {
    /// Summary for `descriptor` over `total` rows, or `None` if the page is
    /// empty.
    pub fn for_page(descriptor: &PaginationDescriptor, total: usize) -> Option<Self> {
        let range = descriptor.range(total);
        if range.is_empty() {
            return None;
        }
        Some(Self {
            first: range.start + 1,
            last: range.end,
            total,
        })
    }
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} results",
            self.first, self.last, self.total
        )
    }
}

/// Who owns the current page.
#[derive(Clone)]
pub enum PaginationMode {
    /// The host owns the page: changes are reported through the callback and
    /// the host pushes the new page back with `Table::set_current_page`.
    Controlled(PageChangeFn),
    /// The table tracks the page itself, starting at `initial_page`.
    Uncontrolled { initial_page: usize },
}

impl PaginationMode {
    /// Host-owned pagination reporting through `on_page_change`.
    pub fn controlled<F>(on_page_change: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        PaginationMode::Controlled(Arc::new(on_page_change))
    }

    /// Table-owned pagination starting at page 1.
    pub fn uncontrolled() -> Self {
        PaginationMode::Uncontrolled { initial_page: 1 }
    }

    /// Returns `true` for host-owned pagination.
    pub fn is_controlled(&self) -> bool {
        matches!(self, PaginationMode::Controlled(_))
    }

    pub(crate) fn initial_page(&self) -> usize {
        match self {
            PaginationMode::Controlled(_) => 1,
            PaginationMode::Uncontrolled { initial_page } => *initial_page,
        }
    }
}

impl Default for PaginationMode {
    fn default() -> Self {
        Self::uncontrolled()
    }
}

impl fmt::Debug for PaginationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationMode::Controlled(_) => f.write_str("Controlled(..)"),
            PaginationMode::Uncontrolled { initial_page } => f
                .debug_struct("Uncontrolled")
                .field("initial_page", initial_page)
                .finish(),
        }
    }
}

/// Pagination setup passed when building a table.
#[derive(Debug, Clone)]
pub struct Pagination {
    /// Rows per page.
    pub page_size: usize,
    /// Who owns the current page.
    pub mode: PaginationMode,
}

impl Pagination {
    /// Uncontrolled pagination with `page_size` rows per page.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            mode: PaginationMode::uncontrolled(),
        }
    }

    /// Start an uncontrolled table at `page`.
    pub fn starting_at(mut self, page: usize) -> Self {
        self.mode = PaginationMode::Uncontrolled { initial_page: page };
        self
    }

    /// Hand page ownership to the host.
    pub fn controlled<F>(mut self, on_page_change: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.mode = PaginationMode::controlled(on_page_change);
        self
    }
}

/// Outcome of a page navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    /// Nothing happened: disabled control, current page, or no pagination.
    Unchanged,
    /// Uncontrolled table moved to this page.
    Moved(usize),
    /// Controlled table reported this page to the host.
    Requested(usize),
}
