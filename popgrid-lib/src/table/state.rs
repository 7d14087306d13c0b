//! Table state and the sort -> filter -> paginate pipeline.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use crate::config::TableConfig;
use crate::error::TableError;
use crate::model::{Column, Record, RowAction};

use super::memo::{CacheStats, ProcessCache, ProcessKey};
use super::paginate::{
    PageChange, PageSummary, PageToken, Pagination, PaginationDescriptor, PaginationMode,
    total_pages,
};
use super::search::filter_indices;
use super::sort::{SortDirection, SortState, sort_indices};
use super::view::{
    ActionButton, HeaderCell, HeaderChrome, PagerView, RenderState, TableView, ViewRow,
};

type SearchFn = Arc<dyn Fn(&str) + Send + Sync>;
type DownloadFn = Arc<dyn Fn() + Send + Sync>;
type RowClickFn = Arc<dyn Fn(&Record) + Send + Sync>;

/// Unique identifier for a Table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Pagination as the table tracks it.
struct PageState {
    page_size: usize,
    mode: PaginationMode,
    current_page: usize,
}

/// Host callbacks.
#[derive(Default)]
struct Hooks {
    on_search: Option<SearchFn>,
    on_download: Option<DownloadFn>,
    on_row_click: Option<RowClickFn>,
}

/// Internal state for the Table.
struct TableInner {
    /// Column definitions.
    columns: Vec<Column>,
    /// The rows in the table, in host order.
    rows: Vec<Record>,
    /// Bumped on every row replacement.
    rows_generation: u64,
    /// Per-row actions.
    actions: Vec<RowAction>,
    /// Presentation settings.
    config: TableConfig,
    /// Current sort.
    sort: SortState,
    /// Current search text.
    search_query: String,
    /// Host-reported loading flag.
    loading: bool,
    /// Pagination, if enabled.
    page: Option<PageState>,
    hooks: Hooks,
    cache: ProcessCache,
}

impl TableInner {
    fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            rows_generation: 0,
            actions: Vec::new(),
            config: TableConfig::default(),
            sort: SortState::unsorted(),
            search_query: String::new(),
            loading: false,
            page: None,
            hooks: Hooks::default(),
            cache: ProcessCache::default(),
        }
    }

    fn process_key(&self) -> ProcessKey {
        let local_search = self.hooks.on_search.is_none();
        ProcessKey {
            rows_generation: self.rows_generation,
            sort: self.sort.clone(),
            // A delegated query never reaches the local filter.
            query: if local_search {
                self.search_query.clone()
            } else {
                String::new()
            },
            mode: self.config.search_mode,
            local_search,
        }
    }

    /// Indices into `rows` after sorting and, unless delegated, filtering.
    fn processed(&mut self) -> Arc<[usize]> {
        let key = self.process_key();
        let rows = &self.rows;
        self.cache.get_or_compute(key.clone(), || {
            let mut indices = sort_indices(rows, &key.sort);
            if key.local_search {
                indices = filter_indices(rows, &indices, &key.query, key.mode);
            }
            log::debug!(
                "Table processed {} of {} rows (sort={:?}, query={:?})",
                indices.len(),
                rows.len(),
                key.sort,
                key.query
            );
            indices
        })
    }

    fn descriptor(&self, processed_count: usize) -> Option<PaginationDescriptor> {
        self.page.as_ref().map(|page| {
            PaginationDescriptor::for_rows(processed_count, page.page_size, page.current_page)
        })
    }

    /// Indices into `rows` shown on the current page. Empty while loading.
    fn visible_indices(&mut self) -> Vec<usize> {
        if self.loading {
            return Vec::new();
        }
        let processed = self.processed();
        let range = self
            .descriptor(processed.len())
            .map(|d| d.range(processed.len()))
            .unwrap_or(0..processed.len());
        processed[range].to_vec()
    }

    fn set_page_size_from_config(&mut self) {
        match self.config.page_size {
            Some(0) => log::warn!("Ignoring page size 0 from table config"),
            Some(page_size) => match &mut self.page {
                Some(page) => page.page_size = page_size,
                None => {
                    self.page = Some(PageState {
                        page_size,
                        mode: PaginationMode::uncontrolled(),
                        current_page: 1,
                    })
                }
            },
            None => {}
        }
    }

    fn is_uncontrolled(&self) -> bool {
        self.page.as_ref().is_some_and(|page| !page.mode.is_controlled())
    }
}

/// A sortable, searchable, paginated table over schemaless rows.
///
/// `Table` owns its rows and derives everything else from them:
/// - Sorting by a key column (header clicks cycle asc, desc, off)
/// - Case-insensitive search across all fields, unless the host delegates it
/// - Pagination with compressed page selectors, owned by the table or the host
/// - Row actions with per-row visibility
///
/// The sorted and filtered row list is memoized and only recomputed when the
/// rows, sort, query or search mode change.
///
/// Cloning a `Table` yields another handle to the same table.
///
/// # Example
///
/// ```
/// use popgrid_lib::model::{Column, Record};
/// use popgrid_lib::table::{Pagination, RenderState, Table};
///
/// let rows = (1..=25i64)
///     .map(|i| Record::new().set("label", format!("Row {i}")).set("value", i))
///     .collect();
/// let table = Table::with_rows(
///     vec![Column::new("Label", "label"), Column::new("Value", "value").sortable()],
///     rows,
/// )
/// .with_pagination(Pagination::new(10))
/// .unwrap();
///
/// table.click_header(1);
/// table.click_header(1);
/// let view = table.view();
/// assert_eq!(view.state, RenderState::Populated);
/// assert_eq!(view.rows[0].cells, vec!["Row 25", "25"]);
/// assert_eq!(view.pager.unwrap().total_pages, 3);
/// ```
pub struct Table {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    inner: Arc<RwLock<TableInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl Table {
    /// Create a new table with column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self::from_inner(TableInner::new(columns))
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<Record>) -> Self {
        let mut inner = TableInner::new(columns);
        inner.rows = rows;
        Self::from_inner(inner)
    }

    fn from_inner(inner: TableInner) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Apply presentation settings.
    ///
    /// A `page_size` in the config enables uncontrolled pagination unless
    /// pagination is already set up, in which case only the size changes.
    pub fn with_config(self, config: TableConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Enable pagination.
    pub fn with_pagination(self, pagination: Pagination) -> Result<Self, TableError> {
        self.set_pagination(Some(pagination))?;
        Ok(self)
    }

    /// Set the per-row actions.
    pub fn with_actions(self, actions: Vec<RowAction>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.actions = actions;
        }
        self
    }

    /// Delegate search to the host.
    ///
    /// With a delegate installed the table stops filtering locally and
    /// assumes the rows it is given already reflect the query.
    pub fn on_search<F>(self, on_search: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.hooks.on_search = Some(Arc::new(on_search));
        }
        self
    }

    /// Install a download hook.
    pub fn on_download<F>(self, on_download: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.hooks.on_download = Some(Arc::new(on_download));
        }
        self
    }

    /// Install a row click hook.
    pub fn on_row_click<F>(self, on_row_click: F) -> Self
    where
        F: Fn(&Record) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.hooks.on_row_click = Some(Arc::new(on_row_click));
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    fn write(&self) -> Option<RwLockWriteGuard<'_, TableInner>> {
        self.inner.write().ok()
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Get the presentation settings.
    pub fn config(&self) -> TableConfig {
        self.inner
            .read()
            .map(|g| g.config.clone())
            .unwrap_or_default()
    }

    /// Replace the presentation settings.
    pub fn set_config(&self, config: TableConfig) {
        if let Some(mut guard) = self.write() {
            guard.config = config;
            guard.set_page_size_from_config();
            self.mark_dirty();
        }
    }

    /// Enable, replace or (with `None`) disable pagination.
    pub fn set_pagination(&self, pagination: Option<Pagination>) -> Result<(), TableError> {
        if let Some(pagination) = &pagination
            && pagination.page_size == 0
        {
            return Err(TableError::ZeroPageSize);
        }
        if let Some(mut guard) = self.write() {
            guard.page = pagination.map(|p| PageState {
                page_size: p.page_size,
                current_page: p.mode.initial_page(),
                mode: p.mode,
            });
            self.mark_dirty();
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Column access
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Set the column definitions.
    ///
    /// Clears the sort if no remaining column sorts by the current key.
    pub fn set_columns(&self, columns: Vec<Column>) {
        if let Some(mut guard) = self.write() {
            let stale = guard
                .sort
                .column()
                .is_some_and(|current| !columns.iter().any(|c| c.sort_key() == Some(current)));
            if stale {
                guard.sort = SortState::unsorted();
            }
            guard.columns = columns;
            self.mark_dirty();
        }
    }

    /// Get a single column definition.
    pub fn column(&self, index: usize) -> Result<Column, TableError> {
        let guard = self.inner.read().map_err(|_| TableError::ColumnIndexOutOfBounds {
            index,
            count: 0,
        })?;
        guard
            .columns
            .get(index)
            .cloned()
            .ok_or(TableError::ColumnIndexOutOfBounds {
                index,
                count: guard.columns.len(),
            })
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.inner.read().map(|g| g.columns.len()).unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Get the number of rows, before filtering.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table has no rows, before filtering.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all rows in host order.
    pub fn rows(&self) -> Vec<Record> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Replace all rows.
    ///
    /// An uncontrolled table whose row count shrank moves back to its last
    /// page.
    pub fn set_rows(&self, rows: Vec<Record>) {
        if let Some(mut guard) = self.write() {
            guard.rows = rows;
            guard.rows_generation += 1;
            if guard.is_uncontrolled() {
                let count = guard.processed().len();
                if let Some(page) = &mut guard.page {
                    let last = total_pages(count, page.page_size).max(1);
                    if page.current_page > last {
                        page.current_page = last;
                    }
                }
            }
            self.mark_dirty();
        }
    }

    /// Clear all rows.
    pub fn clear(&self) {
        self.set_rows(Vec::new());
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort state.
    pub fn sort(&self) -> SortState {
        self.inner
            .read()
            .map(|g| g.sort.clone())
            .unwrap_or_default()
    }

    /// Sort by the column keyed `key`.
    pub fn set_sort(&self, key: &str, direction: SortDirection) -> Result<(), TableError> {
        let Some(mut guard) = self.write() else {
            return Ok(());
        };
        if !guard.columns.iter().any(|c| c.sort_key() == Some(key)) {
            return Err(if guard.columns.iter().any(|c| c.key() == Some(key)) {
                TableError::not_sortable(key)
            } else {
                TableError::unknown_column(key)
            });
        }
        guard.sort = SortState::new(key, direction);
        self.mark_dirty();
        Ok(())
    }

    /// Clear the sort.
    pub fn clear_sort(&self) {
        if let Some(mut guard) = self.write() {
            guard.sort = SortState::unsorted();
            self.mark_dirty();
        }
    }

    /// Handle a click on the header of column `index`.
    ///
    /// Cycles the sort for sortable columns and returns the new state; a
    /// click on any other header is ignored.
    pub fn click_header(&self, index: usize) -> Option<SortState> {
        let mut guard = self.write()?;
        let key = guard.columns.get(index)?.sort_key()?.to_string();
        let next = guard.sort.toggle(&key);
        log::debug!("Table {}: sort {:?} -> {:?}", self.id, guard.sort, next);
        guard.sort = next.clone();
        self.mark_dirty();
        Some(next)
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Get the current search text.
    pub fn search_query(&self) -> String {
        self.inner
            .read()
            .map(|g| g.search_query.clone())
            .unwrap_or_default()
    }

    /// Returns `true` if the host filters rows itself.
    pub fn has_search_delegate(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.hooks.on_search.is_some())
            .unwrap_or(false)
    }

    /// Update the search text.
    ///
    /// Reports the query to the search delegate, if any. An uncontrolled
    /// table returns to page 1 when the query changes.
    pub fn set_search(&self, query: &str) {
        let delegate = {
            let Some(mut guard) = self.write() else {
                return;
            };
            if guard.search_query != query {
                guard.search_query = query.to_string();
                if guard.is_uncontrolled()
                    && let Some(page) = &mut guard.page
                {
                    page.current_page = 1;
                }
                self.mark_dirty();
            }
            guard.hooks.on_search.clone()
        };
        if let Some(on_search) = delegate {
            on_search(query);
        }
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Get the loading flag.
    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    /// Set the loading flag.
    pub fn set_loading(&self, loading: bool) {
        if let Some(mut guard) = self.write()
            && guard.loading != loading
        {
            guard.loading = loading;
            self.mark_dirty();
        }
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Get the current page, if paginated.
    pub fn current_page(&self) -> Option<usize> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.page.as_ref().map(|p| p.current_page))
    }

    /// Set the current page directly.
    ///
    /// This is how a controlled host pushes its page back into the table.
    /// The page is stored as given; an out-of-range page shows an empty page.
    pub fn set_current_page(&self, page: usize) {
        if let Some(mut guard) = self.write()
            && let Some(state) = &mut guard.page
        {
            state.current_page = page;
            self.mark_dirty();
        }
    }

    /// Current pagination descriptor, derived from the processed row count.
    pub fn pagination(&self) -> Option<PaginationDescriptor> {
        let mut guard = self.write()?;
        let count = guard.processed().len();
        guard.descriptor(count)
    }

    /// Navigate to the page chosen by `target`, applying the disabled-control
    /// rules.
    fn navigate<F>(&self, target: F) -> PageChange
    where
        F: FnOnce(&PaginationDescriptor) -> Option<usize>,
    {
        let callback = {
            let Some(mut guard) = self.write() else {
                return PageChange::Unchanged;
            };
            let count = guard.processed().len();
            let Some(descriptor) = guard.descriptor(count) else {
                return PageChange::Unchanged;
            };
            let Some(page) = target(&descriptor) else {
                return PageChange::Unchanged;
            };
            if page == descriptor.current_page || page < 1 || page > descriptor.total_pages {
                return PageChange::Unchanged;
            }
            let Some(state) = &mut guard.page else {
                return PageChange::Unchanged;
            };
            match &state.mode {
                PaginationMode::Controlled(on_page_change) => (Arc::clone(on_page_change), page),
                PaginationMode::Uncontrolled { .. } => {
                    state.current_page = page;
                    self.mark_dirty();
                    return PageChange::Moved(page);
                }
            }
        };
        let (on_page_change, page) = callback;
        on_page_change(page);
        PageChange::Requested(page)
    }

    /// Go to `page`.
    pub fn go_to_page(&self, page: usize) -> PageChange {
        self.navigate(|_| Some(page))
    }

    /// Handle a click on a page-selector token.
    pub fn select_token(&self, token: PageToken) -> PageChange {
        self.navigate(|_| token.page())
    }

    /// Go to the next page. Disabled on the last page.
    pub fn next_page(&self) -> PageChange {
        self.navigate(|d| d.has_next().then(|| d.current_page + 1))
    }

    /// Go to the previous page. Disabled on the first page.
    pub fn previous_page(&self) -> PageChange {
        self.navigate(|d| d.has_previous().then(|| d.current_page - 1))
    }

    // -------------------------------------------------------------------------
    // Row interaction
    // -------------------------------------------------------------------------

    /// Handle a click on the visible row at `row` (0-based within the page).
    ///
    /// Returns `true` if a row click hook ran.
    pub fn click_row(&self, row: usize) -> bool {
        let target = {
            let Some(mut guard) = self.write() else {
                return false;
            };
            let Some(on_row_click) = guard.hooks.on_row_click.clone() else {
                return false;
            };
            let visible = guard.visible_indices();
            let Some(&index) = visible.get(row) else {
                return false;
            };
            (on_row_click, guard.rows[index].clone())
        };
        let (on_row_click, record) = target;
        on_row_click(&record);
        true
    }

    /// Run action `action` on the visible row at `row`.
    ///
    /// Only the action runs; the row click hook is never triggered. Returns
    /// `false` if the row does not exist or the action is hidden for it.
    pub fn invoke_action(&self, row: usize, action: usize) -> bool {
        let target = {
            let Some(mut guard) = self.write() else {
                return false;
            };
            let visible = guard.visible_indices();
            let Some(&index) = visible.get(row) else {
                return false;
            };
            let Some(found) = guard.actions.get(action).cloned() else {
                return false;
            };
            (found, guard.rows[index].clone())
        };
        let (action, record) = target;
        if !action.is_visible(&record) {
            return false;
        }
        action.invoke(&record);
        true
    }

    /// Run the download hook. Returns `true` if one is installed.
    pub fn download(&self) -> bool {
        let hook = self
            .inner
            .read()
            .ok()
            .and_then(|g| g.hooks.on_download.clone());
        match hook {
            Some(on_download) => {
                on_download();
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Derived output
    // -------------------------------------------------------------------------

    /// Rows shown on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<Record> {
        self.write()
            .map(|mut g| {
                let visible = g.visible_indices();
                visible.iter().map(|&i| g.rows[i].clone()).collect()
            })
            .unwrap_or_default()
    }

    /// Build a render snapshot of the table.
    ///
    /// Cell renderers and action conditions run after the table lock is
    /// released, so they may read from the table.
    pub fn view(&self) -> TableView {
        let snapshot = {
            let Some(mut guard) = self.write() else {
                return TableView::default();
            };
            let processed = guard.processed();
            let processed_count = processed.len();
            let descriptor = guard.descriptor(processed_count);
            let g = &*guard;
            let range = if g.loading {
                0..0
            } else {
                descriptor
                    .map(|d| d.range(processed_count))
                    .unwrap_or(0..processed_count)
            };
            ViewSnapshot {
                loading: g.loading,
                processed_count,
                descriptor,
                offset: range.start,
                records: processed[range].iter().map(|&i| g.rows[i].clone()).collect(),
                columns: g.columns.clone(),
                actions: g.actions.clone(),
                sort: g.sort.clone(),
                config: g.config.clone(),
                search_query: g.search_query.clone(),
                can_download: g.hooks.on_download.is_some(),
            }
        };
        snapshot.into_view()
    }

    // -------------------------------------------------------------------------
    // Cache and dirty tracking
    // -------------------------------------------------------------------------

    /// Hit/miss counters of the processed-row cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.inner
            .read()
            .map(|g| g.cache.stats())
            .unwrap_or_default()
    }

    /// Drop the memoized processed rows, forcing the next read to recompute.
    pub fn invalidate_cache(&self) {
        if let Some(mut guard) = self.write() {
            guard.cache.invalidate();
        }
    }

    /// Check if the table has changed.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

/// Table state copied out under the lock for building a [`TableView`].
struct ViewSnapshot {
    loading: bool,
    processed_count: usize,
    descriptor: Option<PaginationDescriptor>,
    /// Position of the first visible row in the processed list.
    offset: usize,
    /// Visible rows in display order.
    records: Vec<Record>,
    columns: Vec<Column>,
    actions: Vec<RowAction>,
    sort: SortState,
    config: TableConfig,
    search_query: String,
    can_download: bool,
}

impl ViewSnapshot {
    fn into_view(self) -> TableView {
        let state = if self.loading {
            RenderState::Loading
        } else if self.records.is_empty() {
            RenderState::Empty
        } else {
            RenderState::Populated
        };

        let message = match state {
            RenderState::Loading => Some(self.config.loading_message.clone()),
            RenderState::Empty => Some(self.config.empty_message.clone()),
            RenderState::Populated => None,
        };

        let columns = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                header: column.header.clone(),
                width: column.width,
                align: column.align,
                sortable: column.sort_key().is_some(),
                filterable: column.filterable,
                indicator: column
                    .sort_key()
                    .map(|key| self.sort.indicator_for(key))
                    .unwrap_or_default(),
            })
            .collect();

        let rows = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| ViewRow {
                position: self.offset + i,
                record: record.clone(),
                cells: self.columns.iter().map(|c| c.render(record)).collect(),
                actions: self
                    .actions
                    .iter()
                    .enumerate()
                    .filter(|(_, action)| action.is_visible(record))
                    .map(|(index, action)| ActionButton {
                        index,
                        label: action.label.clone(),
                        icon: action.icon.clone(),
                        style: action.style.clone(),
                    })
                    .collect(),
            })
            .collect();

        let pager = match (state, self.descriptor) {
            (RenderState::Populated, Some(d)) => Some(PagerView {
                current_page: d.current_page,
                total_pages: d.total_pages,
                tokens: d.tokens(),
                has_previous: d.has_previous(),
                has_next: d.has_next(),
                summary: PageSummary::for_page(&d, self.processed_count),
            }),
            _ => None,
        };

        TableView {
            state,
            message,
            header: HeaderChrome {
                hidden: self.config.hide_header,
                title: self.config.title,
                subtitle: self.config.subtitle,
                searchable: self.config.searchable,
                search_placeholder: self.config.search_placeholder,
                search_query: self.search_query,
                can_download: self.can_download,
            },
            columns,
            rows,
            has_actions: !self.actions.is_empty(),
            pager,
            processed_count: self.processed_count,
        }
    }
}

impl Clone for Table {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("id", &self.id)
            .field("rows", &self.len())
            .field("sort", &self.sort())
            .field("dirty", &self.is_dirty())
            .finish()
    }
}
