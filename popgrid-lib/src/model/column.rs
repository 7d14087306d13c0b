//! Column definitions for table display.

use std::fmt;
use std::sync::Arc;

use super::Record;

/// Function producing a display string from a row.
pub type CellFn = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// How a column reads its value from a row.
///
/// `Key` is a direct field lookup and is the only variant that can be sorted
/// on, since the raw value at the key is what gets compared. `Derive` computes
/// a display value and is never compared.
#[derive(Clone)]
pub enum Accessor {
    /// Direct field lookup.
    Key(String),
    /// Computed display value.
    Derive(CellFn),
}

impl Accessor {
    /// Returns the field key for `Key` accessors.
    pub fn key(&self) -> Option<&str> {
        match self {
            Accessor::Key(key) => Some(key),
            Accessor::Derive(_) => None,
        }
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Accessor::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

/// Column configuration.
///
/// Columns define the structure of the table: header text, how the cell
/// value is read, display hints, and whether the column takes part in
/// sorting.
///
/// # Examples
///
/// ```
/// use popgrid_lib::model::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("Label", "label").sortable(),
///     Column::new("Year", "year").sortable().width(6),
///     Column::new("Value", "value").sortable().align(Alignment::Right),
/// ];
/// assert_eq!(columns[0].sort_key(), Some("label"));
/// ```
#[derive(Clone)]
pub struct Column {
    /// Column header text
    pub header: String,
    /// How the cell value is read
    pub accessor: Accessor,
    /// Display width hint in character cells
    pub width: Option<u16>,
    /// Horizontal alignment
    pub align: Alignment,
    /// Whether this column is sortable
    pub sortable: bool,
    /// Whether the host offers filtering on this column
    pub filterable: bool,
    cell: Option<CellFn>,
}

impl Column {
    /// Create a column that reads the field `key`.
    pub fn new(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self::with_accessor(header, Accessor::Key(key.into()))
    }

    /// Create a column whose value is computed from the whole row.
    ///
    /// Derived columns render through `derive` and cannot be sorted.
    pub fn derived<F>(header: impl Into<String>, derive: F) -> Self
    where
        F: Fn(&Record) -> String + Send + Sync + 'static,
    {
        Self::with_accessor(header, Accessor::Derive(Arc::new(derive)))
    }

    fn with_accessor(header: impl Into<String>, accessor: Accessor) -> Self {
        Self {
            header: header.into(),
            accessor,
            width: None,
            align: Alignment::Left,
            sortable: false,
            filterable: false,
            cell: None,
        }
    }

    /// Set the display width hint.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    ///
    /// Only takes effect for key columns; a derived column has nothing
    /// comparable to sort by.
    pub fn sortable(mut self) -> Self {
        if matches!(self.accessor, Accessor::Derive(_)) {
            log::warn!("Column '{}' has a derived accessor and cannot be sortable", self.header);
        }
        self.sortable = true;
        self
    }

    /// Mark the column as filterable.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Set a custom cell renderer.
    ///
    /// The renderer takes priority over the accessor when the cell is drawn.
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&Record) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Returns the field key, if this is a key column.
    pub fn key(&self) -> Option<&str> {
        self.accessor.key()
    }

    /// Returns the key this column sorts by, if it can be sorted.
    pub fn sort_key(&self) -> Option<&str> {
        if self.sortable { self.accessor.key() } else { None }
    }

    /// Render the display string for this column's cell in `row`.
    ///
    /// A missing field renders as the empty string.
    pub fn render(&self, row: &Record) -> String {
        if let Some(cell) = &self.cell {
            return cell(row);
        }
        match &self.accessor {
            Accessor::Derive(derive) => derive(row),
            Accessor::Key(key) => row.get(key).map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("cell", &self.cell.as_ref().map(|_| ".."))
            .finish()
    }
}
