//! Ranking a whole collection in place.
//!
//! [`Sorter`] scores every element of a [`Sortable`] collection and reorders
//! the collection, best match first. Results are kept index-aligned with the
//! collection: after a sort, element `k` and result `k` describe the same
//! candidate.

use std::cmp::Ordering;

use crate::options::{SortOption, SortOptions};
use crate::ranking::{MatchResult, PreparedQuery, match_prepared, match_with};
use crate::sortable::{AsMatchStr, Sortable};

/// Two-level comparator for scored candidates.
///
/// 1. **Higher score wins** (descending).
/// 2. **Native order** -- identical scores fall back to `tiebreak`, usually
///    the collection's own [`Sortable::less`].
///
/// A NaN score (possible with pathological options) ranks below every other
/// score, and two NaNs tie, so the comparator stays a total order.
///
/// # Arguments
///
/// * `a` - Score of the first candidate
/// * `b` - Score of the second candidate
/// * `tiebreak` - Called only when the scores are equal
///
/// # Returns
///
/// [`Ordering::Less`] when `a` should come first, suitable for
/// [`slice::sort_by`].
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use fuzzysorter::compare_scores;
///
/// assert_eq!(compare_scores(10.0, 5.0, || Ordering::Greater), Ordering::Less);
/// assert_eq!(compare_scores(5.0, 5.0, || Ordering::Greater), Ordering::Greater);
/// assert_eq!(compare_scores(f64::NAN, -1e9, || Ordering::Less), Ordering::Greater);
/// ```
pub fn compare_scores(a: f64, b: f64, tiebreak: impl FnOnce() -> Ordering) -> Ordering {
    let (a, b) = (rank_score(a), rank_score(b));
    b.partial_cmp(&a)
        .unwrap_or(Ordering::Equal)
        .then_with(tiebreak)
}

/// Map NaN to negative infinity so every score is comparable.
fn rank_score(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

/// Turn a less-than predicate into an [`Ordering`].
fn ordering_from_less(less: impl Fn(usize, usize) -> bool, i: usize, j: usize) -> Ordering {
    if less(i, j) {
        Ordering::Less
    } else if less(j, i) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Fuzzy-sorts [`Sortable`] collections against a query.
///
/// A `Sorter` carries its [`SortOptions`] and the results of the last
/// [`sort`](Sorter::sort). Reuse one across queries to keep a configuration;
/// each sort replaces the previous results.
///
/// # Examples
///
/// ```
/// use fuzzysorter::{SortOption, Sorter};
///
/// let mut hosts = vec!["www.example.com", "two.example.com", "www.two.co.uk"];
/// let mut sorter = Sorter::new([SortOption::CamelBonus(0.0)]);
///
/// let results = sorter.sort(&mut hosts, "two");
/// assert_eq!(hosts[0], "two.example.com");
/// assert!(results[0].matched);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sorter {
    options: SortOptions,
    results: Vec<MatchResult>,
}

impl Sorter {
    /// Create a sorter with the default options, then apply `opts` in order.
    pub fn new(opts: impl IntoIterator<Item = SortOption>) -> Self {
        let mut sorter = Self::default();
        sorter.configure(opts);
        sorter
    }

    /// Create a sorter with the given options.
    pub fn with_options(options: SortOptions) -> Self {
        Self {
            options,
            results: Vec::new(),
        }
    }

    /// The options used for scoring.
    pub fn options(&self) -> &SortOptions {
        &self.options
    }

    /// Mutable access to the options. Changes do not affect results already
    /// produced.
    pub fn options_mut(&mut self) -> &mut SortOptions {
        &mut self.options
    }

    /// Apply `opts` in order and return the option that reverts the last one,
    /// or `None` if `opts` was empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzysorter::{SortOption, Sorter};
    ///
    /// let mut sorter = Sorter::default();
    /// let undo = sorter.configure([SortOption::StripDiacritics(false)]);
    /// assert!(!sorter.options().strip_diacritics);
    ///
    /// sorter.configure(undo);
    /// assert!(sorter.options().strip_diacritics);
    /// ```
    pub fn configure(&mut self, opts: impl IntoIterator<Item = SortOption>) -> Option<SortOption> {
        opts.into_iter()
            .fold(None, |_, opt| Some(opt.apply(&mut self.options)))
    }

    /// The results of the last sort, index-aligned with the collection as it
    /// was left by that sort.
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    /// Score a single candidate with this sorter's options.
    pub fn match_str(&self, candidate: &str, query: &str) -> MatchResult {
        match_with(candidate, query, &self.options)
    }

    /// Score every element of `data` against `query` and reorder `data` in
    /// place, best match first.
    ///
    /// Non-matching elements are not removed; check
    /// [`MatchResult::matched`] or use [`filter`](Sorter::filter). Equal
    /// scores keep the collection's native order.
    ///
    /// # Arguments
    ///
    /// * `data` - The collection to reorder
    /// * `query` - The query every element is scored against
    ///
    /// # Returns
    ///
    /// One [`MatchResult`] per element, index-aligned with `data` after the
    /// sort. The same slice stays available through
    /// [`results`](Sorter::results).
    pub fn sort<C>(&mut self, data: &mut C, query: &str) -> &[MatchResult]
    where
        C: Sortable + ?Sized,
    {
        let query = PreparedQuery::new(query, &self.options);
        let n = data.len();

        self.results.clear();
        self.results.reserve(n);
        for i in 0..n {
            let result = match_prepared(&data.keywords(i), &query, &self.options);
            tracing::trace!(
                index = i,
                score = result.score,
                matched = result.matched,
                key = %result.sort_key,
                "scored candidate"
            );
            self.results.push(result);
        }

        // Stable sort of original indices, then move elements into place.
        let mut order: Vec<usize> = (0..n).collect();
        {
            let results = &self.results;
            let data = &*data;
            order.sort_by(|&i, &j| {
                compare_scores(results[i].score, results[j].score, || {
                    ordering_from_less(|a, b| data.less(a, b), i, j)
                })
            });
        }
        apply_order(data, &mut self.results, &order);

        tracing::debug!(
            query = query.as_str(),
            candidates = n,
            matches = self.results.iter().filter(|r| r.matched).count(),
            "fuzzy sort complete"
        );

        &self.results
    }

    /// Sort `items` against `query`, then drop every item that didn't match.
    ///
    /// # Arguments
    ///
    /// * `items` - The items to rank and filter
    /// * `query` - The query every item is scored against
    ///
    /// # Returns
    ///
    /// The results of the surviving items, index-aligned with `items`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzysorter::Sorter;
    ///
    /// let mut items = vec!["Router", "Wolf // ruTorrent", "Readme"];
    /// let results = Sorter::default().filter(&mut items, "ruto");
    /// assert_eq!(items, ["Wolf // ruTorrent"]);
    /// assert_eq!(results.len(), 1);
    /// ```
    pub fn filter<T>(&mut self, items: &mut Vec<T>, query: &str) -> Vec<MatchResult>
    where
        T: AsMatchStr,
    {
        self.sort(items, query);

        let mut keep = self.results.iter().map(|r| r.matched);
        items.retain(|_| keep.next().unwrap_or(false));
        self.results.retain(|r| r.matched);

        self.results.clone()
    }
}

/// Move `data` and `results` so that position `k` holds what was at
/// `order[k]`, using swaps on both so they never fall out of step.
fn apply_order<C>(data: &mut C, results: &mut [MatchResult], order: &[usize])
where
    C: Sortable + ?Sized,
{
    // `at[k]`: original index currently at position k.
    // `pos[o]`: current position of original index o.
    let mut at: Vec<usize> = (0..order.len()).collect();
    let mut pos = at.clone();

    for (k, &wanted) in order.iter().enumerate() {
        let from = pos[wanted];
        if from == k {
            continue;
        }
        data.swap(k, from);
        results.swap(k, from);

        let displaced = at[k];
        at[k] = wanted;
        at[from] = displaced;
        pos[wanted] = k;
        pos[displaced] = from;
    }
}

/// Fuzzy-sort `data` against `query` with the default options.
///
/// # Examples
///
/// ```
/// use fuzzysorter::sort;
///
/// let mut shows = ["go and throw", "baby got back", "game of thrones"];
/// let results = sort(&mut shows[..], "got");
/// assert_eq!(shows, ["game of thrones", "go and throw", "baby got back"]);
/// assert!(results.iter().all(|r| r.matched));
/// ```
pub fn sort<C>(data: &mut C, query: &str) -> Vec<MatchResult>
where
    C: Sortable + ?Sized,
{
    let mut sorter = Sorter::default();
    sorter.sort(data, query);
    sorter.results
}

/// Fuzzy-sort a slice of strings against `query` with the default options.
pub fn sort_strings<S: AsMatchStr>(data: &mut [S], query: &str) -> Vec<MatchResult> {
    sort(data, query)
}

/// Score `candidate` against `query`, applying `opts` over the defaults.
///
/// Builds a fresh [`Sorter`] on every call, which makes it expensive in a
/// loop. Prefer [`Sorter::match_str`] or [`match_with`] there.
///
/// # Examples
///
/// ```
/// use fuzzysorter::{SortOption, match_str};
///
/// assert!(match_str("f\u{00fc}n", "fun", []).matched);
/// assert!(!match_str("f\u{00fc}n", "fun", [SortOption::StripDiacritics(false)]).matched);
/// ```
pub fn match_str(
    candidate: &str,
    query: &str,
    opts: impl IntoIterator<Item = SortOption>,
) -> MatchResult {
    let mut data = [candidate];
    let mut sorter = Sorter::new(opts);
    sorter.sort(&mut data[..], query);
    sorter.results.swap_remove(0)
}
