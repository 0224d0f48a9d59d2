//! Configuration options for the fuzzy scoring algorithm.
//!
//! [`SortOptions`] holds the bonuses and penalties applied while scoring a
//! candidate. [`SortOption`] changes a single field and hands back the option
//! that restores the previous value, so a caller can tweak the scorer for one
//! query and revert afterwards.

/// Default bonus for a match directly after another match.
pub const DEFAULT_ADJACENCY_BONUS: f64 = 5.0;
/// Default bonus for a match directly after a separator.
pub const DEFAULT_SEPARATOR_BONUS: f64 = 10.0;
/// Default bonus for an uppercase match preceded by a lowercase letter.
pub const DEFAULT_CAMEL_BONUS: f64 = 10.0;
/// Default penalty for every character before the first match.
pub const DEFAULT_LEADING_LETTER_PENALTY: f64 = -3.0;
/// Default floor of the leading-letter penalty.
pub const DEFAULT_MAX_LEADING_LETTER_PENALTY: f64 = -9.0;
/// Default penalty for every character that doesn't match.
pub const DEFAULT_UNMATCHED_LETTER_PENALTY: f64 = -1.0;
/// Default for diacritic folding of ASCII queries.
pub const DEFAULT_STRIP_DIACRITICS: bool = true;

/// Bonuses and penalties used when scoring a candidate against a query.
///
/// Scores are only comparable between candidates scored with the same
/// options and the same query.
///
/// # Examples
///
/// ```
/// use fuzzysorter::SortOptions;
///
/// let opts = SortOptions::default();
/// assert_eq!(opts.adjacency_bonus, 5.0);
/// assert!(opts.strip_diacritics);
///
/// let opts = SortOptions { strip_diacritics: false, ..Default::default() };
/// assert!(!opts.strip_diacritics);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortOptions {
    /// Bonus for adjacent matches.
    pub adjacency_bonus: f64,
    /// Bonus if the match is after a separator.
    pub separator_bonus: f64,
    /// Bonus if the match is uppercase and the previous character is lowercase.
    pub camel_bonus: f64,
    /// Penalty applied for every character before the first match.
    pub leading_letter_penalty: f64,
    /// Floor for the leading-letter penalty. The penalty never goes below it.
    pub max_leading_letter_penalty: f64,
    /// Penalty for every character that doesn't match.
    pub unmatched_letter_penalty: f64,
    /// Fold diacritics out of candidates when the query is plain ASCII, so
    /// that "fun" matches "fün".
    pub strip_diacritics: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            adjacency_bonus: DEFAULT_ADJACENCY_BONUS,
            separator_bonus: DEFAULT_SEPARATOR_BONUS,
            camel_bonus: DEFAULT_CAMEL_BONUS,
            leading_letter_penalty: DEFAULT_LEADING_LETTER_PENALTY,
            max_leading_letter_penalty: DEFAULT_MAX_LEADING_LETTER_PENALTY,
            unmatched_letter_penalty: DEFAULT_UNMATCHED_LETTER_PENALTY,
            strip_diacritics: DEFAULT_STRIP_DIACRITICS,
        }
    }
}

/// A reversible change to one field of [`SortOptions`].
///
/// Applying an option returns another option which, applied in turn,
/// restores the value the field held before.
///
/// # Examples
///
/// ```
/// use fuzzysorter::{SortOption, SortOptions};
///
/// let mut opts = SortOptions::default();
/// let undo = SortOption::CamelBonus(0.0).apply(&mut opts);
/// assert_eq!(opts.camel_bonus, 0.0);
///
/// undo.apply(&mut opts);
/// assert_eq!(opts.camel_bonus, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortOption {
    /// Sets [`SortOptions::adjacency_bonus`].
    AdjacencyBonus(f64),
    /// Sets [`SortOptions::separator_bonus`].
    SeparatorBonus(f64),
    /// Sets [`SortOptions::camel_bonus`].
    CamelBonus(f64),
    /// Sets [`SortOptions::leading_letter_penalty`].
    LeadingLetterPenalty(f64),
    /// Sets [`SortOptions::max_leading_letter_penalty`].
    MaxLeadingLetterPenalty(f64),
    /// Sets [`SortOptions::unmatched_letter_penalty`].
    UnmatchedLetterPenalty(f64),
    /// Sets [`SortOptions::strip_diacritics`].
    StripDiacritics(bool),
}

impl SortOption {
    /// Apply this option to `opts` and return the option that undoes it.
    pub fn apply(self, opts: &mut SortOptions) -> SortOption {
        match self {
            SortOption::AdjacencyBonus(v) => {
                SortOption::AdjacencyBonus(std::mem::replace(&mut opts.adjacency_bonus, v))
            }
            SortOption::SeparatorBonus(v) => {
                SortOption::SeparatorBonus(std::mem::replace(&mut opts.separator_bonus, v))
            }
            SortOption::CamelBonus(v) => {
                SortOption::CamelBonus(std::mem::replace(&mut opts.camel_bonus, v))
            }
            SortOption::LeadingLetterPenalty(v) => SortOption::LeadingLetterPenalty(
                std::mem::replace(&mut opts.leading_letter_penalty, v),
            ),
            SortOption::MaxLeadingLetterPenalty(v) => SortOption::MaxLeadingLetterPenalty(
                std::mem::replace(&mut opts.max_leading_letter_penalty, v),
            ),
            SortOption::UnmatchedLetterPenalty(v) => SortOption::UnmatchedLetterPenalty(
                std::mem::replace(&mut opts.unmatched_letter_penalty, v),
            ),
            SortOption::StripDiacritics(v) => {
                SortOption::StripDiacritics(std::mem::replace(&mut opts.strip_diacritics, v))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_match_constants() {
        let opts = SortOptions::default();
        assert_eq!(opts.adjacency_bonus, 5.0);
        assert_eq!(opts.separator_bonus, 10.0);
        assert_eq!(opts.camel_bonus, 10.0);
        assert_eq!(opts.leading_letter_penalty, -3.0);
        assert_eq!(opts.max_leading_letter_penalty, -9.0);
        assert_eq!(opts.unmatched_letter_penalty, -1.0);
        assert!(opts.strip_diacritics);
    }

    /// Every field starts at zero/false so a restored value is unmistakable.
    fn zeroed() -> SortOptions {
        SortOptions {
            adjacency_bonus: 0.0,
            separator_bonus: 0.0,
            camel_bonus: 0.0,
            leading_letter_penalty: 0.0,
            max_leading_letter_penalty: 0.0,
            unmatched_letter_penalty: 0.0,
            strip_diacritics: false,
        }
    }

    #[rstest]
    #[case::adjacency(SortOption::AdjacencyBonus(1.1), SortOption::AdjacencyBonus(0.0))]
    #[case::separator(SortOption::SeparatorBonus(1.2), SortOption::SeparatorBonus(0.0))]
    #[case::camel(SortOption::CamelBonus(1.3), SortOption::CamelBonus(0.0))]
    #[case::leading(
        SortOption::LeadingLetterPenalty(-1.4),
        SortOption::LeadingLetterPenalty(0.0)
    )]
    #[case::max_leading(
        SortOption::MaxLeadingLetterPenalty(-15.0),
        SortOption::MaxLeadingLetterPenalty(0.0)
    )]
    #[case::unmatched(
        SortOption::UnmatchedLetterPenalty(-1.6),
        SortOption::UnmatchedLetterPenalty(0.0)
    )]
    #[case::strip(SortOption::StripDiacritics(true), SortOption::StripDiacritics(false))]
    fn apply_returns_previous_value(#[case] opt: SortOption, #[case] expected_undo: SortOption) {
        let mut opts = zeroed();
        let undo = opt.apply(&mut opts);
        assert_eq!(undo, expected_undo);
        assert_ne!(opts, zeroed());

        // Re-applying the new value is a no-op that still reports it.
        assert_eq!(opt.apply(&mut opts), opt);

        undo.apply(&mut opts);
        assert_eq!(opts, zeroed());
    }

    #[test]
    fn apply_only_touches_its_own_field() {
        let mut opts = SortOptions::default();
        SortOption::SeparatorBonus(42.0).apply(&mut opts);
        assert_eq!(
            opts,
            SortOptions {
                separator_bonus: 42.0,
                ..Default::default()
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_config_with_defaults() {
        let opts: SortOptions =
            serde_json::from_str(r#"{"camel_bonus": 2.5, "strip_diacritics": false}"#)
                .expect("deserialize");
        assert_eq!(opts.camel_bonus, 2.5);
        assert!(!opts.strip_diacritics);
        assert_eq!(opts.adjacency_bonus, DEFAULT_ADJACENCY_BONUS);
    }
}
