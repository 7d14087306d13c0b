//! Population API responses shaped into table rows.
//!
//! The API answers with `{"data": [...]}` where each entry carries an
//! `ID Nation` (or `Geography`), a `Year` and a `Population`. Entries become
//! rows `{id, label, year, value}` for the table.

use std::cmp::Ordering;

use anyhow::Context;
use anyhow::Result;
use popgrid_lib::model::{Alignment, Column, Record, Value};
use serde::Deserialize;

/// Geography that disables geography filtering.
pub const ALL_GEOGRAPHIES: &str = "Nation";

/// Year selector meaning "most recent year in the data".
pub const LATEST_YEAR: &str = "latest";

const GEOGRAPHY_FIELDS: [&str; 3] = ["Nation", "State", "Geography"];

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    data: Vec<Record>,
}

/// Parse an API response body into its raw entries.
pub fn parse(json: &str) -> Result<Vec<Record>> {
    let response: Response =
        serde_json::from_str(json).context("Failed to parse population response")?;
    log::debug!("Parsed {} population entries", response.data.len());
    Ok(response.data)
}

/// Keep entries for `geography`. [`ALL_GEOGRAPHIES`] keeps everything.
pub fn filter_geography(entries: Vec<Record>, geography: &str) -> Vec<Record> {
    if geography == ALL_GEOGRAPHIES {
        return entries;
    }
    entries
        .into_iter()
        .filter(|entry| {
            GEOGRAPHY_FIELDS
                .iter()
                .filter_map(|field| entry.get(field))
                .any(|value| value.to_string() == geography)
        })
        .collect()
}

fn year_of(entry: &Record) -> Option<String> {
    entry
        .get("Year")
        .filter(|v| !v.is_null())
        .map(|v| v.to_string())
}

/// Numeric years compare numerically, anything else as text.
fn compare_years(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Resolve a year selector against the data.
///
/// [`LATEST_YEAR`] becomes the most recent year present, or `None` if no
/// entry has a year. Any other selector is returned as is.
pub fn resolve_year(entries: &[Record], year: &str) -> Option<String> {
    if year != LATEST_YEAR {
        return Some(year.to_string());
    }
    entries
        .iter()
        .filter_map(year_of)
        .max_by(|a, b| compare_years(a, b))
}

/// Keep entries whose year matches `year` after resolving it.
pub fn filter_year(entries: Vec<Record>, year: &str) -> Vec<Record> {
    let Some(year) = resolve_year(&entries, year) else {
        return entries;
    };
    log::debug!("Showing year {year}");
    entries
        .into_iter()
        .filter(|entry| year_of(entry).as_deref() == Some(year.as_str()))
        .collect()
}

/// Shape raw entries into table rows, numbering them in input order.
pub fn to_rows(entries: &[Record]) -> Vec<Record> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let label = entry
                .get("ID Nation")
                .filter(|v| !v.is_null())
                .or_else(|| entry.get("Geography"))
                .cloned()
                .unwrap_or_default();
            Record::new()
                .set("id", index)
                .set("label", label)
                .set("year", entry.get("Year").cloned().unwrap_or_default())
                .set("value", entry.get("Population").cloned().unwrap_or_default())
        })
        .collect()
}

/// Group the digits of an integer in threes.
fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Column layout for population rows.
pub fn columns() -> Vec<Column> {
    vec![
        Column::new("Label", "label").sortable(),
        Column::new("Year", "year").sortable(),
        Column::new("Value", "value")
            .sortable()
            .align(Alignment::Right)
            .cell(|row| match row.get("value") {
                Some(Value::Int(v)) => group_digits(*v),
                Some(other) => other.to_string(),
                None => String::new(),
            }),
    ]
}
