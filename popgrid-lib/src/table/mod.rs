//! Sorting, searching, pagination and the `Table` that composes them.

mod memo;
mod paginate;
mod search;
mod sort;
mod state;
mod view;

pub use memo::CacheStats;
pub use paginate::*;
pub use search::*;
pub use sort::*;
pub use state::*;
pub use view::*;
