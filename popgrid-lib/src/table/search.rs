//! Client-side row search.
//!
//! Substring search lowercases both sides; fuzzy search goes through
//! nucleo-matcher.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::Deserialize;
use serde::Serialize;

use crate::model::Record;

/// How a query is matched against cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Case-insensitive fuzzy match (characters in order, gaps allowed).
    Fuzzy,
}

/// Compiled form of a non-empty query.
enum Needle {
    /// Lowercased query text.
    Substring(String),
    Fuzzy {
        atom: Atom,
        matcher: Matcher,
        buf: Vec<char>,
    },
}

/// A compiled query that can be tested against many rows.
///
/// The needle is taken literally: whitespace is part of the text to find,
/// not a separator between terms. Substring mode compares lowercased text
/// exactly, so accents, combining marks and leading spaces all count.
pub struct RowMatcher {
    needle: Option<Needle>,
}

impl RowMatcher {
    /// Compile `query` for `mode`. The empty query matches every row.
    pub fn new(query: &str, mode: SearchMode) -> Self {
        let needle = (!query.is_empty()).then(|| match mode {
            SearchMode::Substring => Needle::Substring(query.to_lowercase()),
            SearchMode::Fuzzy => Needle::Fuzzy {
                atom: Atom::new(
                    query,
                    CaseMatching::Ignore,
                    Normalization::Never,
                    AtomKind::Fuzzy,
                    false,
                ),
                matcher: Matcher::new(Config::DEFAULT),
                buf: Vec::new(),
            },
        });
        Self { needle }
    }

    /// Returns `true` if this matcher accepts every row.
    pub fn matches_all(&self) -> bool {
        self.needle.is_none()
    }

    /// Test a single piece of text.
    pub fn matches_text(&mut self, text: &str) -> bool {
        match &mut self.needle {
            None => true,
            Some(Needle::Substring(needle)) => text.to_lowercase().contains(needle.as_str()),
            Some(Needle::Fuzzy { atom, matcher, buf }) => {
                atom.score(Utf32Str::new(text, buf), matcher).is_some()
            }
        }
    }

    /// Returns `true` if any field of `row` matches.
    ///
    /// Every non-null scalar is stringified and tested on its own, including
    /// scalars nested inside lists and records. Null and absent values never
    /// match a non-empty query.
    pub fn matches(&mut self, row: &Record) -> bool {
        if self.matches_all() {
            return true;
        }
        let mut found = false;
        for value in row.values() {
            value.for_each_leaf(&mut |leaf| {
                if !found {
                    found = self.matches_text(&leaf.to_string());
                }
            });
            if found {
                break;
            }
        }
        found
    }
}

/// Keep the candidate indices whose rows match `query`, in candidate order.
pub fn filter_indices(rows: &[Record], candidates: &[usize], query: &str, mode: SearchMode) -> Vec<usize> {
    let mut matcher = RowMatcher::new(query, mode);
    if matcher.matches_all() {
        return candidates.to_vec();
    }
    candidates
        .iter()
        .copied()
        .filter(|&index| matcher.matches(&rows[index]))
        .collect()
}

/// Returns the rows matching `query` as a case-insensitive substring, in
/// input order.
///
/// # Example
///
/// ```
/// use popgrid_lib::model::Record;
/// use popgrid_lib::table::filter;
///
/// let rows = vec![
///     Record::new().set("name", "State A").set("value", 120i64),
///     Record::new().set("name", "State B").set("value", 5i64),
/// ];
/// let found = filter(&rows, "12");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].get_str("name").unwrap(), Some("State A"));
/// ```
pub fn filter<'a>(rows: &'a [Record], query: &str) -> Vec<&'a Record> {
    let mut matcher = RowMatcher::new(query, SearchMode::Substring);
    rows.iter().filter(|row| matcher.matches(row)).collect()
}
