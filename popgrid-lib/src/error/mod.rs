//! Error types

mod field;
mod pagination;
mod table;

pub use field::*;
pub use pagination::*;
pub use table::*;

/// Top-level error for fallible library operations.
///
/// Rendering never produces one of these: the table degrades to a best-effort
/// view instead. They surface only from explicit state-setting calls, typed
/// record access, and JSON loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Record field access failed.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A pagination descriptor broke its contract.
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    /// A table operation was rejected.
    #[error(transparent)]
    Table(#[from] TableError),

    /// JSON input could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
