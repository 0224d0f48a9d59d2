#![warn(missing_docs)]

//! Fuzzy scoring and in-place ranking for launcher workflows.
//!
//! `fuzzysorter` scores candidate strings against a query with a
//! Sublime-Text-style heuristic ("of" matches "OmniFocus", "got" matches
//! "Game of Thrones") and reorders a caller's collection best match first.
//! Diacritics are folded out of candidates when the query is plain ASCII.
//!
//! [`match_with`] scores a single string; [`Sorter`] and [`sort`] rank any
//! collection implementing [`Sortable`].

/// Scoring of a single candidate against a query.
pub mod ranking;

/// The capability collections implement to be fuzzy-sorted.
pub mod sortable;

/// Collection ranking built on the scorer.
pub mod sort;

/// Bonuses, penalties and reversible option values.
pub mod options;

// Re-export primary public API types and functions at the crate root.
pub use options::{SortOption, SortOptions};
pub use ranking::{MatchResult, SEPARATORS, fold_diacritics, match_with};
pub use sort::{Sorter, compare_scores, match_str, sort, sort_strings};
pub use sortable::{AsMatchStr, Sortable};
