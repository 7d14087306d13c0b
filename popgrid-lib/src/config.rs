//! Table presentation configuration

use serde::Deserialize;
use serde::Serialize;

use crate::error::Result;
use crate::table::SearchMode;

/// Presentation settings for a table.
///
/// Everything here is plain data, so a config can be loaded from JSON; any
/// field left out of the file keeps its default.
///
/// # Example
///
/// ```
/// use popgrid_lib::config::TableConfig;
///
/// let config = TableConfig::default()
///     .with_title("Data Table")
///     .with_page_size(10)
///     .searchable(true);
///
/// let loaded = TableConfig::from_json_str(r#"{ "title": "Data Table", "page_size": 10, "searchable": true }"#).unwrap();
/// assert_eq!(config, loaded);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Title shown above the grid.
    pub title: Option<String>,

    /// Subtitle shown under the title.
    pub subtitle: Option<String>,

    /// Message shown when the processed row list is empty.
    ///
    /// Default: "No data available"
    pub empty_message: String,

    /// Message shown while the host reports loading.
    ///
    /// Default: "Loading data..."
    pub loading_message: String,

    /// Whether the search box is shown.
    ///
    /// Default: false
    pub searchable: bool,

    /// Placeholder text for the search box.
    ///
    /// Default: "Search..."
    pub search_placeholder: String,

    /// How the local search matches rows.
    pub search_mode: SearchMode,

    /// Hide the title/search/download header entirely.
    pub hide_header: bool,

    /// Rows per page. `None` shows every row on one page.
    pub page_size: Option<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            empty_message: "No data available".to_string(),
            loading_message: "Loading data...".to_string(),
            searchable: false,
            search_placeholder: "Search...".to_string(),
            search_mode: SearchMode::Substring,
            hide_header: false,
            page_size: None,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from JSON, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Sets the empty-state message.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the loading message.
    pub fn with_loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = message.into();
        self
    }

    /// Shows or hides the search box.
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Sets the search placeholder.
    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Sets the search mode.
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Hides the header.
    pub fn hide_header(mut self, hide: bool) -> Self {
        self.hide_header = hide;
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }
}
