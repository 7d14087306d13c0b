//! Tabular data engine
//!
//! Sorts, searches and paginates schemaless rows for display, and derives
//! everything a presentation layer needs to draw them: header indicators,
//! page selectors, row actions and the loading/empty/populated state.

pub mod config;
pub mod error;
pub mod model;
pub mod table;

pub use config::TableConfig;
pub use error::{Error, Result};
pub use model::{Column, Record, RowAction, Value};
pub use table::{Table, TableView};
