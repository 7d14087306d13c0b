//! Column sorting.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Record;
use crate::model::Value;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// Sort indicator shown next to a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortIndicator {
    /// Column is not the sort column.
    #[default]
    None,
    Asc,
    Desc,
}

/// Which column the table is sorted by, and in which direction.
///
/// A sort column always comes with a direction and vice versa; the unsorted
/// state has neither.
///
/// # Example
///
/// ```
/// use popgrid_lib::table::{SortDirection, SortState};
///
/// let state = SortState::default().toggle("value");
/// assert_eq!(state.column(), Some("value"));
/// assert_eq!(state.direction(), Some(SortDirection::Asc));
///
/// let state = state.toggle("value").toggle("value");
/// assert!(!state.is_sorted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SortState {
    sorted: Option<(String, SortDirection)>,
}

impl SortState {
    /// The unsorted state.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Sort by `column` in `direction`.
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            sorted: Some((column.into(), direction)),
        }
    }

    /// Sort ascending by `column`.
    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Asc)
    }

    /// Sort descending by `column`.
    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Desc)
    }

    /// Returns the sort column key, if sorted.
    pub fn column(&self) -> Option<&str> {
        self.sorted.as_ref().map(|(column, _)| column.as_str())
    }

    /// Returns the sort direction, if sorted.
    pub fn direction(&self) -> Option<SortDirection> {
        self.sorted.as_ref().map(|(_, direction)| *direction)
    }

    /// Returns `true` unless this is the unsorted state.
    pub fn is_sorted(&self) -> bool {
        self.sorted.is_some()
    }

    /// Advance the header-click cycle for `column`.
    ///
    /// The same column cycles `none -> asc -> desc -> none`; any other column
    /// starts over at `asc`.
    pub fn toggle(&self, column: &str) -> Self {
        match &self.sorted {
            Some((current, SortDirection::Asc)) if current == column => {
                Self::desc(column)
            }
            Some((current, SortDirection::Desc)) if current == column => Self::unsorted(),
            _ => Self::asc(column),
        }
    }

    /// Header indicator for the column keyed `column`.
    pub fn indicator_for(&self, column: &str) -> SortIndicator {
        match &self.sorted {
            Some((current, SortDirection::Asc)) if current == column => SortIndicator::Asc,
            Some((current, SortDirection::Desc)) if current == column => SortIndicator::Desc,
            _ => SortIndicator::None,
        }
    }
}

/// Rank used to order values of different kinds against each other.
fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Int(_) | Value::Float(_) => 1,
        Value::String(_) => 2,
        Value::List(_) => 3,
        Value::Record(_) => 4,
        Value::Null => 5,
    }
}

/// Exact comparison of an integer against a float.
fn compare_int_float(int: i64, float: f64) -> Ordering {
    match (int as f64).total_cmp(&float) {
        // The float is integral here, so the i128 cast is exact.
        Ordering::Equal if float.is_finite() => i128::from(int).cmp(&(float as i128)),
        other => other,
    }
}

/// Total order over non-null values used for sorting.
///
/// Same-kind values compare naturally, integers and floats compare by
/// numeric value, and mismatched kinds fall back to a fixed kind rank. Lists
/// compare equal to each other, as do nested records.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
        (Value::Int(x), Value::Float(y)) => compare_int_float(*x, *y),
        (Value::Float(x), Value::Int(y)) => compare_int_float(*y, *x).reverse(),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Compare two rows on `column`. Missing and null keys sort last in either
/// direction.
fn compare_rows(a: &Record, b: &Record, column: &str, direction: SortDirection) -> Ordering {
    let a = a.get(column).filter(|v| !v.is_null());
    let b = b.get(column).filter(|v| !v.is_null());
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => compare_values(a, b),
            SortDirection::Desc => compare_values(b, a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort of row indices into `rows`.
///
/// Leaves `indices` untouched when `state` is unsorted.
pub fn sort_candidates(rows: &[Record], indices: &mut [usize], state: &SortState) {
    if let Some((column, direction)) = &state.sorted {
        indices.sort_by(|&a, &b| compare_rows(&rows[a], &rows[b], column, *direction));
    }
}

/// Returns the permutation of `0..rows.len()` that orders `rows` by `state`.
pub fn sort_indices(rows: &[Record], state: &SortState) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    sort_candidates(rows, &mut indices, state);
    indices
}

/// Returns `rows` ordered by `state`.
///
/// The sort is stable: rows with equal keys keep their input order in both
/// directions.
pub fn sort<'a>(rows: &'a [Record], state: &SortState) -> Vec<&'a Record> {
    sort_indices(rows, state).into_iter().map(|i| &rows[i]).collect()
}
