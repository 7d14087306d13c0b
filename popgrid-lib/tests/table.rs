use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use popgrid_lib::config::TableConfig;
use popgrid_lib::error::TableError;
use popgrid_lib::model::{Alignment, Column, Record, RowAction, Value};
use popgrid_lib::table::{
    PageChange, PageToken, Pagination, RenderState, SortDirection, SortIndicator, SortState, Table,
};

fn columns() -> Vec<Column> {
    vec![
        Column::new("Label", "label").sortable(),
        Column::new("Value", "value").sortable().align(Alignment::Right),
        Column::derived("Double", |row| {
            let value = row.get_i64("value").ok().flatten().unwrap_or(0);
            (value * 2).to_string()
        }),
    ]
}

fn rows(count: i64) -> Vec<Record> {
    (1..=count)
        .map(|i| Record::new().set("label", format!("Row {i}")).set("value", i))
        .collect()
}

fn labels(table: &Table) -> Vec<String> {
    table
        .visible_rows()
        .iter()
        .map(|r| r.get_str("label").unwrap().unwrap_or_default().to_string())
        .collect()
}

// =============================================================================
// Render state
// =============================================================================

#[test]
fn test_empty_table_shows_empty_message() {
    let view = Table::new(columns()).view();
    assert_eq!(view.state, RenderState::Empty);
    assert_eq!(view.message.as_deref(), Some("No data available"));
    assert!(view.rows.is_empty());
    assert!(view.pager.is_none());
}

#[test]
fn test_loading_wins_over_empty_and_rows() {
    let table = Table::new(columns());
    table.set_loading(true);
    let view = table.view();
    assert_eq!(view.state, RenderState::Loading);
    assert_eq!(view.message.as_deref(), Some("Loading data..."));

    table.set_rows(rows(3));
    let view = table.view();
    assert_eq!(view.state, RenderState::Loading);
    assert!(view.rows.is_empty());
    assert!(table.visible_rows().is_empty());

    table.set_loading(false);
    assert_eq!(table.view().state, RenderState::Populated);
}

#[test]
fn test_custom_messages() {
    let table = Table::new(columns()).with_config(
        TableConfig::default()
            .with_empty_message("Nothing here")
            .with_loading_message("Hold on"),
    );
    assert_eq!(table.view().message.as_deref(), Some("Nothing here"));
    table.set_loading(true);
    assert_eq!(table.view().message.as_deref(), Some("Hold on"));
}

#[test]
fn test_populated_cells() {
    let table = Table::with_rows(columns(), rows(2));
    let view = table.view();
    assert!(view.is_populated());
    assert_eq!(view.message, None);
    assert_eq!(view.rows[1].cells, vec!["Row 2", "2", "4"]);
    assert_eq!(view.columns[1].align, Alignment::Right);
    assert!(view.columns[0].sortable);
    assert!(!view.columns[2].sortable);
}

#[test]
fn test_missing_field_renders_blank() {
    let table = Table::with_rows(columns(), vec![Record::new().set("label", "only")]);
    assert_eq!(table.view().rows[0].cells, vec!["only", "", "0"]);
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn test_header_click_cycles_sort() {
    let table = Table::with_rows(columns(), rows(3));

    assert_eq!(table.click_header(1), Some(SortState::asc("value")));
    assert_eq!(labels(&table), vec!["Row 1", "Row 2", "Row 3"]);
    assert_eq!(table.view().columns[1].indicator, SortIndicator::Asc);

    assert_eq!(table.click_header(1), Some(SortState::desc("value")));
    assert_eq!(labels(&table), vec!["Row 3", "Row 2", "Row 1"]);
    assert_eq!(table.view().columns[1].indicator, SortIndicator::Desc);

    assert_eq!(table.click_header(1), Some(SortState::unsorted()));
    assert_eq!(labels(&table), vec!["Row 1", "Row 2", "Row 3"]);
    assert_eq!(table.view().columns[1].indicator, SortIndicator::None);
}

#[test]
fn test_click_on_unsortable_header_is_ignored() {
    let table = Table::with_rows(columns(), rows(3));
    assert_eq!(table.click_header(2), None);
    assert_eq!(table.click_header(9), None);
    assert!(!table.sort().is_sorted());
}

#[test]
fn test_set_sort_errors() {
    let table = Table::with_rows(columns(), rows(3));
    assert_eq!(
        table.set_sort("nope", SortDirection::Asc),
        Err(TableError::unknown_column("nope"))
    );
    let unsortable = Table::new(vec![Column::new("Label", "label")]);
    assert_eq!(
        unsortable.set_sort("label", SortDirection::Asc),
        Err(TableError::not_sortable("label"))
    );
    assert_eq!(table.set_sort("value", SortDirection::Desc), Ok(()));
    assert_eq!(labels(&table)[0], "Row 3");
}

#[test]
fn test_set_sort_finds_sortable_column_sharing_a_key() {
    let table = Table::with_rows(
        vec![
            Column::new("Raw", "value"),
            Column::new("Value", "value").sortable(),
        ],
        rows(3),
    );
    assert_eq!(table.set_sort("value", SortDirection::Desc), Ok(()));
    assert_eq!(table.sort(), SortState::desc("value"));
    assert_eq!(table.view().columns[1].indicator, SortIndicator::Desc);
}

#[test]
fn test_removing_sorted_column_clears_sort() {
    let table = Table::with_rows(columns(), rows(3));
    table.click_header(1);
    table.set_columns(vec![Column::new("Label", "label").sortable()]);
    assert!(!table.sort().is_sorted());
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_search_filters_locally() {
    let table = Table::with_rows(columns(), rows(25));
    table.set_search("row 1");
    // Row 1 and Row 10..=Row 19
    assert_eq!(table.view().processed_count, 11);
    table.set_search("");
    assert_eq!(table.view().processed_count, 25);
}

#[test]
fn test_search_without_matches_is_empty() {
    let table = Table::with_rows(columns(), rows(5));
    table.set_search("zzz");
    let view = table.view();
    assert_eq!(view.state, RenderState::Empty);
    assert!(view.pager.is_none());
}

#[test]
fn test_search_delegate_skips_local_filter() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let table = Table::with_rows(columns(), rows(5)).on_search(move |q| {
        sink.lock().unwrap().push(q.to_string());
    });
    assert!(table.has_search_delegate());

    table.set_search("zzz");
    assert_eq!(table.view().processed_count, 5);
    assert_eq!(*seen.lock().unwrap(), vec!["zzz".to_string()]);
    assert_eq!(table.search_query(), "zzz");
}

#[test]
fn test_search_delegate_can_reenter_table() {
    let table = Table::with_rows(columns(), rows(5));
    let handle = table.clone();
    let table = table.on_search(move |q| {
        let kept = rows(5)
            .into_iter()
            .filter(|r| r.get_str("label").ok().flatten().is_some_and(|l| l.ends_with(q)))
            .collect();
        handle.set_rows(kept);
    });
    table.set_search("3");
    assert_eq!(labels(&table), vec!["Row 3"]);
}

// =============================================================================
// Pipeline order
// =============================================================================

#[test]
fn test_pages_count_filtered_rows() {
    let table = Table::with_rows(columns(), rows(25))
        .with_pagination(Pagination::new(5))
        .unwrap();
    assert_eq!(table.pagination().unwrap().total_pages, 5);

    table.set_search("row 1");
    let descriptor = table.pagination().unwrap();
    assert_eq!(descriptor.total_pages, 3);
    assert_eq!(descriptor.current_page, 1);
}

#[test]
fn test_sort_applies_before_pagination() {
    let table = Table::with_rows(columns(), rows(25))
        .with_pagination(Pagination::new(10))
        .unwrap();
    table.set_sort("value", SortDirection::Desc).unwrap();
    assert_eq!(labels(&table)[0], "Row 25");
    assert_eq!(table.go_to_page(3), PageChange::Moved(3));
    assert_eq!(labels(&table), vec!["Row 5", "Row 4", "Row 3", "Row 2", "Row 1"]);
}

// =============================================================================
// Pagination
// =============================================================================

#[test]
fn test_uncontrolled_navigation() {
    let table = Table::with_rows(columns(), rows(25))
        .with_pagination(Pagination::new(10))
        .unwrap();

    assert_eq!(table.previous_page(), PageChange::Unchanged);
    assert_eq!(table.next_page(), PageChange::Moved(2));
    assert_eq!(table.next_page(), PageChange::Moved(3));
    assert_eq!(table.next_page(), PageChange::Unchanged);
    assert_eq!(table.go_to_page(3), PageChange::Unchanged);
    assert_eq!(table.go_to_page(0), PageChange::Unchanged);
    assert_eq!(table.go_to_page(4), PageChange::Unchanged);
    assert_eq!(table.select_token(PageToken::Ellipsis), PageChange::Unchanged);
    assert_eq!(table.select_token(PageToken::Page(1)), PageChange::Moved(1));
    assert_eq!(table.current_page(), Some(1));
}

#[test]
fn test_pager_view() {
    let table = Table::with_rows(columns(), rows(200))
        .with_pagination(Pagination::new(10).starting_at(10))
        .unwrap();
    let pager = table.view().pager.unwrap();
    assert_eq!(pager.current_page, 10);
    assert_eq!(pager.total_pages, 20);
    assert_eq!(pager.tokens.len(), 7);
    assert!(pager.has_previous && pager.has_next);
    assert_eq!(
        pager.summary.unwrap().to_string(),
        "Showing 91 to 100 of 200 results"
    );
}

#[test]
fn test_view_row_positions() {
    let table = Table::with_rows(columns(), rows(25))
        .with_pagination(Pagination::new(10).starting_at(2))
        .unwrap();
    let positions: Vec<usize> = table.view().rows.iter().map(|r| r.position).collect();
    assert_eq!(positions, (10..20).collect::<Vec<_>>());
}

#[test]
fn test_controlled_pagination_reports_to_host() {
    let requested = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&requested);
    let table = Table::with_rows(columns(), rows(25))
        .with_pagination(Pagination::new(10).controlled(move |page| {
            sink.lock().unwrap().push(page);
        }))
        .unwrap();

    assert_eq!(table.next_page(), PageChange::Requested(2));
    // The host has not pushed the page back yet.
    assert_eq!(table.current_page(), Some(1));
    assert_eq!(*requested.lock().unwrap(), vec![2]);

    table.set_current_page(2);
    assert_eq!(labels(&table)[0], "Row 11");
    assert_eq!(table.previous_page(), PageChange::Requested(1));
    assert_eq!(table.previous_page(), PageChange::Requested(1));
    assert_eq!(*requested.lock().unwrap(), vec![2, 1, 1]);
}

#[test]
fn test_controlled_page_is_not_clamped() {
    let table = Table::with_rows(columns(), rows(25))
        .with_pagination(Pagination::new(10).controlled(|_| {}))
        .unwrap();
    table.set_current_page(7);
    assert_eq!(table.current_page(), Some(7));
    assert_eq!(table.view().state, RenderState::Empty);
}

#[test]
fn test_uncontrolled_search_resets_page() {
    let table = Table::with_rows(columns(), rows(25))
        .with_pagination(Pagination::new(5))
        .unwrap();
    table.go_to_page(4);
    table.set_search("row");
    assert_eq!(table.current_page(), Some(1));
}

#[test]
fn test_uncontrolled_shrinking_rows_clamps_page() {
    let table = Table::with_rows(columns(), rows(25))
        .with_pagination(Pagination::new(10))
        .unwrap();
    table.go_to_page(3);
    table.set_rows(rows(12));
    assert_eq!(table.current_page(), Some(2));
    table.clear();
    assert_eq!(table.current_page(), Some(1));
}

#[test]
fn test_zero_page_size_is_rejected() {
    let result = Table::new(columns()).with_pagination(Pagination::new(0));
    assert_eq!(result.unwrap_err(), TableError::ZeroPageSize);
}

#[test]
fn test_config_page_size_enables_pagination() {
    let table = Table::with_rows(columns(), rows(25))
        .with_config(TableConfig::default().with_page_size(10));
    assert_eq!(table.pagination().unwrap().total_pages, 3);

    let unpaged = Table::with_rows(columns(), rows(25))
        .with_config(TableConfig::default().with_page_size(0));
    assert!(unpaged.pagination().is_none());
    assert_eq!(unpaged.visible_rows().len(), 25);
}

#[test]
fn test_no_pagination_shows_everything() {
    let table = Table::with_rows(columns(), rows(25));
    assert_eq!(table.next_page(), PageChange::Unchanged);
    assert_eq!(table.view().rows.len(), 25);
    assert!(table.view().pager.is_none());
}

// =============================================================================
// Row actions and hooks
// =============================================================================

fn positive_only() -> Vec<RowAction> {
    vec![
        RowAction::new("Inspect", |_| {}).icon("eye"),
        RowAction::new("Remove", |_| {}).show_when(|row| {
            row.get_i64("value").ok().flatten().is_some_and(|v| v > 0)
        }),
    ]
}

#[test]
fn test_action_visibility_per_row() {
    let data = vec![
        Record::new().set("label", "zero").set("value", 0i64),
        Record::new().set("label", "one").set("value", 1i64),
    ];
    let table = Table::with_rows(columns(), data).with_actions(positive_only());
    let view = table.view();
    assert!(view.has_actions);
    let shown: Vec<Vec<&str>> = view
        .rows
        .iter()
        .map(|r| r.actions.iter().map(|a| a.label.as_str()).collect())
        .collect();
    assert_eq!(shown, vec![vec!["Inspect"], vec!["Inspect", "Remove"]]);
    assert_eq!(view.rows[1].actions[1].index, 1);
    assert_eq!(view.rows[0].actions[0].icon.as_deref(), Some("eye"));
}

#[test]
fn test_no_actions_means_no_column() {
    assert!(!Table::with_rows(columns(), rows(1)).view().has_actions);
}

#[test]
fn test_action_does_not_trigger_row_click() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let actions = Arc::new(AtomicUsize::new(0));
    let click_sink = Arc::clone(&clicks);
    let action_sink = Arc::clone(&actions);

    let table = Table::with_rows(columns(), rows(3))
        .with_actions(vec![RowAction::new("Count", move |_| {
            action_sink.fetch_add(1, Ordering::SeqCst);
        })])
        .on_row_click(move |_| {
            click_sink.fetch_add(1, Ordering::SeqCst);
        });

    assert!(table.invoke_action(0, 0));
    assert_eq!(actions.load(Ordering::SeqCst), 1);
    assert_eq!(clicks.load(Ordering::SeqCst), 0);

    assert!(table.click_row(1));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
    assert_eq!(actions.load(Ordering::SeqCst), 1);
}

#[test]
fn test_hidden_action_cannot_be_invoked() {
    let data = vec![Record::new().set("label", "zero").set("value", 0i64)];
    let table = Table::with_rows(columns(), data).with_actions(positive_only());
    assert!(table.invoke_action(0, 0));
    assert!(!table.invoke_action(0, 1));
    assert!(!table.invoke_action(5, 0));
}

#[test]
fn test_row_click_receives_visible_row() {
    let clicked = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&clicked);
    let table = Table::with_rows(columns(), rows(25))
        .with_pagination(Pagination::new(10).starting_at(2))
        .unwrap()
        .on_row_click(move |row| {
            *sink.lock().unwrap() = row.get("label").cloned();
        });
    assert!(table.click_row(0));
    assert_eq!(*clicked.lock().unwrap(), Some(Value::from("Row 11")));
    assert!(!table.click_row(10));
}

#[test]
fn test_download_hook() {
    let table = Table::new(columns());
    assert!(!table.download());
    assert!(!table.view().header.can_download);

    let count = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&count);
    let table = table.on_download(move || {
        sink.fetch_add(1, Ordering::SeqCst);
    });
    assert!(table.view().header.can_download);
    assert!(table.download());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_header_chrome_from_config() {
    let table = Table::new(columns()).with_config(
        TableConfig::default()
            .with_title("Population")
            .with_subtitle("US Census")
            .searchable(true),
    );
    table.set_search("ohio");
    let header = table.view().header;
    assert_eq!(header.title.as_deref(), Some("Population"));
    assert_eq!(header.subtitle.as_deref(), Some("US Census"));
    assert!(header.searchable);
    assert!(!header.hidden);
    assert_eq!(header.search_placeholder, "Search...");
    assert_eq!(header.search_query, "ohio");
}

// =============================================================================
// Memoization and dirty tracking
// =============================================================================

#[test]
fn test_repeated_views_hit_cache() {
    let table = Table::with_rows(columns(), rows(10));
    table.view();
    table.view();
    table.visible_rows();
    let stats = table.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 2);
}

#[test]
fn test_state_changes_recompute() {
    let table = Table::with_rows(columns(), rows(10))
        .with_pagination(Pagination::new(5))
        .unwrap();
    table.view();
    // Paging reuses the processed rows.
    table.next_page();
    table.view();
    assert_eq!(table.cache_stats().misses, 1);

    table.click_header(1);
    table.view();
    assert_eq!(table.cache_stats().misses, 2);

    table.set_rows(rows(4));
    table.view();
    assert_eq!(table.cache_stats().misses, 3);

    table.invalidate_cache();
    table.view();
    assert_eq!(table.cache_stats().misses, 4);
}

#[test]
fn test_dirty_flag() {
    let table = Table::new(columns());
    assert!(!table.is_dirty());
    table.set_rows(rows(2));
    assert!(table.is_dirty());
    table.clear_dirty();
    assert!(!table.is_dirty());

    table.set_loading(false);
    assert!(!table.is_dirty());
    table.set_loading(true);
    assert!(table.is_dirty());
}

#[test]
fn test_clones_share_state() {
    let table = Table::new(columns());
    let other = table.clone();
    other.set_rows(rows(3));
    assert_eq!(table.len(), 3);
    assert_eq!(table.id(), other.id());
    assert!(table.id_string().starts_with("__table_"));
    assert_ne!(table.id(), Table::new(columns()).id());
}

#[test]
fn test_column_lookup() {
    let table = Table::new(columns());
    assert_eq!(table.column(0).unwrap().header, "Label");
    assert_eq!(
        table.column(5).unwrap_err(),
        TableError::ColumnIndexOutOfBounds { index: 5, count: 3 }
    );
}

#[test]
fn test_delegated_search_does_not_recompute() {
    let table = Table::with_rows(columns(), rows(10)).on_search(|_| {});
    table.view();
    table.set_search("r");
    table.view();
    table.set_search("ro");
    table.view();
    assert_eq!(table.cache_stats().misses, 1);
}

#[test]
fn test_renderers_and_conditions_may_read_the_table() {
    let slot: Arc<OnceLock<Table>> = Arc::new(OnceLock::new());
    let cell_slot = Arc::clone(&slot);
    let action_slot = Arc::clone(&slot);

    let table = Table::with_rows(
        vec![Column::derived("Rows", move |_| {
            cell_slot.get().map(|t| t.len()).unwrap_or(0).to_string()
        })],
        rows(2),
    )
    .with_actions(vec![RowAction::new("Open", |_| {}).show_when(move |_| {
        action_slot.get().is_some_and(|t| !t.is_loading())
    })]);
    slot.set(table.clone()).ok();

    let view = table.view();
    assert_eq!(view.rows[0].cells, vec!["2"]);
    assert_eq!(view.rows[0].actions.len(), 1);
    assert!(table.invoke_action(0, 0));
}
