//! Memoized sort + filter results.

use std::sync::Arc;

use super::search::SearchMode;
use super::sort::SortState;

/// Inputs that determine the processed row list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ProcessKey {
    /// Bumped whenever the rows are replaced.
    pub rows_generation: u64,
    pub sort: SortState,
    pub query: String,
    pub mode: SearchMode,
    /// False when an external search delegate owns filtering.
    pub local_search: bool,
}

/// Cache hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that ran the sort and filter.
    pub misses: u64,
}

/// Single-entry cache of the processed index list.
///
/// Only the latest inputs are worth keeping: any state change makes the
/// previous list stale.
#[derive(Debug, Default)]
pub(crate) struct ProcessCache {
    entry: Option<(ProcessKey, Arc<[usize]>)>,
    stats: CacheStats,
}

impl ProcessCache {
    /// Return the cached list for `key`, computing and storing it on a miss.
    pub fn get_or_compute<F>(&mut self, key: ProcessKey, compute: F) -> Arc<[usize]>
    where
        F: FnOnce() -> Vec<usize>,
    {
        if let Some((cached_key, indices)) = &self.entry
            && *cached_key == key
        {
            self.stats.hits += 1;
            return Arc::clone(indices);
        }
        self.stats.misses += 1;
        let indices: Arc<[usize]> = compute().into();
        self.entry = Some((key, Arc::clone(&indices)));
        indices
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
