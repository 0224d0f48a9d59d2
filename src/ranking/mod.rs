//! Fuzzy scoring of a single candidate string against a query.
//!
//! The heuristic follows Sublime Text's fuzzy search: every query character
//! must appear in the candidate, in order, and the score rewards matches that
//! are adjacent, follow a separator or sit on a camelCase boundary, while
//! penalising leading and unmatched characters.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::options::SortOptions;

/// Characters treated as word boundaries. A match directly after one of them
/// earns [`SortOptions::separator_bonus`].
pub const SEPARATORS: [char; 5] = [' ', '_', '.', '-', '/'];

/// The outcome of scoring one candidate against a query.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Whether every character of the query appears in the candidate, in
    /// order (case-insensitively).
    pub matched: bool,
    /// The query the candidate was scored against.
    pub query: String,
    /// How well the candidate matched. Higher is better. Only meaningful
    /// relative to other results for the same query and options.
    pub score: f64,
    /// The text that was actually scored: the candidate's keywords, with
    /// diacritics folded out if folding applied.
    pub sort_key: String,
}

/// Returns whether `c` is one of the [`SEPARATORS`].
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Fold diacritics out of `s`.
///
/// Applies NFD decomposition, drops non-spacing marks (general category `Mn`)
/// and recomposes whatever is left with NFC, so "fün" becomes "fun" while
/// scripts without marks keep their composed form. Spacing and enclosing
/// marks, such as Devanagari vowel signs, are kept. Returns
/// [`Cow::Borrowed`] when nothing changed.
///
/// # Examples
///
/// ```
/// use fuzzysorter::ranking::fold_diacritics;
///
/// assert_eq!(fold_diacritics("f\u{00fc}n"), "fun");
/// assert!(matches!(fold_diacritics("fun"), std::borrow::Cow::Borrowed(_)));
/// ```
pub fn fold_diacritics(s: &str) -> Cow<'_, str> {
    // ASCII never carries combining marks.
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let folded: String = s.nfd().filter(|c| !is_nonspacing_mark(*c)).nfc().collect();

    if folded == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(folded)
    }
}

fn is_nonspacing_mark(c: char) -> bool {
    c.general_category() == GeneralCategory::NonspacingMark
}

/// Single-character lowercase mapping. The only multi-character expansion,
/// `'İ'` to `"i\u{307}"`, collapses to its leading `'i'`.
fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Single-character uppercase mapping. Characters whose uppercase form
/// expands, like `'ß'`, map to themselves.
fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Case-insensitive equality of two characters under the single-character
/// mappings.
fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || to_lower(a) == to_lower(b)
}

/// Whether `c` has distinct lowercase and uppercase forms.
fn is_cased(c: char) -> bool {
    to_lower(c) != to_upper(c)
}

fn is_lower(c: char) -> bool {
    to_lower(c) == c && is_cased(c)
}

fn is_upper(c: char) -> bool {
    to_upper(c) == c && is_cased(c)
}

/// A query decoded once so it can be scored against many candidates.
#[derive(Debug, Clone)]
pub(crate) struct PreparedQuery {
    text: String,
    chars: Vec<char>,
    /// Whether candidates get their diacritics folded before scoring.
    fold: bool,
}

impl PreparedQuery {
    /// Folding only applies to plain-ASCII queries, so a query containing
    /// "ü" only matches candidates containing "ü".
    pub(crate) fn new(query: &str, opts: &SortOptions) -> Self {
        Self {
            text: query.to_owned(),
            chars: query.chars().collect(),
            fold: opts.strip_diacritics && query.is_ascii(),
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }
}

/// Score `candidate` against an already prepared query.
pub(crate) fn match_prepared(
    candidate: &str,
    query: &PreparedQuery,
    opts: &SortOptions,
) -> MatchResult {
    let sort_key = if query.fold {
        fold_diacritics(candidate)
    } else {
        Cow::Borrowed(candidate)
    };

    let (matched, score) = score_walk(&sort_key, &query.chars, opts);

    MatchResult {
        matched,
        query: query.text.clone(),
        score,
        sort_key: sort_key.into_owned(),
    }
}

/// Penalty for a first match at `pos`, clamped to the configured floor.
fn leading_penalty(pos: usize, opts: &SortOptions) -> f64 {
    let penalty = pos as f64 * opts.leading_letter_penalty;
    if penalty <= opts.max_leading_letter_penalty {
        opts.max_leading_letter_penalty
    } else {
        penalty
    }
}

/// The scoring walk. Returns `(matched, score)`.
///
/// The walk keeps one "best letter": the highest-bonus candidate position
/// seen for the most recently matched query character. A later occurrence of
/// the same letter may replace it if it earns an equal or higher bonus; the
/// bonus is only committed once the walk moves on to the next query character
/// or reaches the end of the candidate.
fn score_walk(candidate: &str, query: &[char], opts: &SortOptions) -> (bool, f64) {
    // An empty query matches everything and leaves ordering to the caller's
    // own comparator.
    if query.is_empty() {
        return (true, 0.0);
    }

    let mut score = 0.0;
    let mut query_idx = 0;

    let mut best_letter: Option<char> = None;
    let mut best_letter_score = 0.0;

    let mut prev_matched = false;
    let mut prev_lower = false;
    // The start of the candidate counts as a word boundary.
    let mut prev_separator = true;

    for (pos, c) in candidate.chars().enumerate() {
        let query_char = query.get(query_idx).copied();

        let next_match = query_char.is_some_and(|q| eq_ignore_case(q, c));
        let rematch = best_letter.is_some_and(|b| eq_ignore_case(b, c));
        let advanced = next_match && best_letter.is_some();
        let query_repeat = match (best_letter, query_char) {
            (Some(b), Some(q)) => eq_ignore_case(b, q),
            _ => false,
        };

        if advanced || query_repeat {
            score += best_letter_score;
            best_letter = None;
            best_letter_score = 0.0;
        }

        if next_match || rematch {
            let mut new_score = 0.0;

            if query_idx == 0 {
                score += leading_penalty(pos, opts);
            }
            if prev_matched {
                new_score += opts.adjacency_bonus;
            }
            if prev_separator {
                new_score += opts.separator_bonus;
            }
            if prev_lower && is_upper(c) {
                new_score += opts.camel_bonus;
            }

            if next_match {
                query_idx += 1;
            }

            if new_score >= best_letter_score {
                if best_letter.is_some() {
                    score += opts.unmatched_letter_penalty;
                }
                best_letter = Some(c);
                best_letter_score = new_score;
            }

            prev_matched = true;
        } else {
            score += opts.unmatched_letter_penalty;
            prev_matched = false;
        }

        prev_lower = is_lower(c);
        prev_separator = is_separator(c);
    }

    if best_letter.is_some() {
        score += best_letter_score;
    }

    (query_idx == query.len(), score)
}

/// Score `candidate` against `query` with the given options.
///
/// This is the cheap single-string path; no [`Sorter`](crate::Sorter) is
/// built.
///
/// # Arguments
///
/// * `candidate` - The text to score
/// * `query` - The characters that must appear in `candidate`, in order
/// * `opts` - Bonuses, penalties and diacritic folding
///
/// # Returns
///
/// A [`MatchResult`] with the match status, the score and the text that was
/// actually scored.
///
/// # Examples
///
/// ```
/// use fuzzysorter::{SortOptions, match_with};
///
/// let opts = SortOptions::default();
/// let result = match_with("Game of Thrones", "got", &opts);
/// assert!(result.matched);
///
/// let result = match_with("Game of Phones", "got", &opts);
/// assert!(!result.matched);
/// ```
pub fn match_with(candidate: &str, query: &str, opts: &SortOptions) -> MatchResult {
    let query = PreparedQuery::new(query, opts);
    match_prepared(candidate, &query, opts)
}
