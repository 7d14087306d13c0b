//! Render snapshot handed to the presentation layer.

use crate::model::Alignment;
use crate::model::Record;

use super::paginate::{PageSummary, PageToken};
use super::sort::SortIndicator;

/// Which of the three mutually exclusive bodies to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    /// Host reports loading; rows and pager are suppressed.
    Loading,
    /// No rows on the current page after sorting, filtering and paging.
    #[default]
    Empty,
    /// Normal grid.
    Populated,
}

/// Title bar and search box state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderChrome {
    pub hidden: bool,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub searchable: bool,
    pub search_placeholder: String,
    pub search_query: String,
    /// A download hook is installed.
    pub can_download: bool,
}

/// One column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub header: String,
    pub width: Option<u16>,
    pub align: Alignment,
    pub sortable: bool,
    pub filterable: bool,
    pub indicator: SortIndicator,
}

/// An action button shown on a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    /// Index into the table's action list.
    pub index: usize,
    pub label: String,
    pub icon: Option<String>,
    pub style: Option<String>,
}

/// A visible row with its rendered cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    /// Position within the processed (sorted and filtered) row list.
    pub position: usize,
    /// Copy of the row.
    pub record: Record,
    /// Rendered cell text, one per column.
    pub cells: Vec<String>,
    /// Actions shown for this row.
    pub actions: Vec<ActionButton>,
}

/// Page selector state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    pub current_page: usize,
    pub total_pages: usize,
    pub tokens: Vec<PageToken>,
    pub has_previous: bool,
    pub has_next: bool,
    pub summary: Option<PageSummary>,
}

/// Everything needed to draw a table once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
    pub state: RenderState,
    /// Loading or empty-state message, if one applies.
    pub message: Option<String>,
    pub header: HeaderChrome,
    pub columns: Vec<HeaderCell>,
    pub rows: Vec<ViewRow>,
    /// Whether to draw the trailing actions column.
    pub has_actions: bool,
    /// Present only for a populated, paginated table.
    pub pager: Option<PagerView>,
    /// Row count after sorting and filtering.
    pub processed_count: usize,
}

impl TableView {
    /// Returns `true` if the grid has rows to draw.
    pub fn is_populated(&self) -> bool {
        self.state == RenderState::Populated
    }
}
