//! The capability a collection needs to be fuzzy-sorted in place.
//!
//! [`Sortable`] bundles the usual length/swap/less-than triad with a
//! [`keywords`](Sortable::keywords) accessor returning the text compared to
//! the query. Slices and vectors of string-like items implement it through
//! [`AsMatchStr`].

use std::borrow::Cow;

/// A collection that can be fuzzy-sorted in place.
///
/// [`less`](Sortable::less) is only consulted to break ties between
/// candidates with identical scores.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use fuzzysorter::{Sortable, sort};
///
/// struct Contact {
///     first: String,
///     last: String,
/// }
///
/// struct Contacts(Vec<Contact>);
///
/// impl Sortable for Contacts {
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.0.swap(i, j);
///     }
///
///     fn less(&self, i: usize, j: usize) -> bool {
///         self.0[i].first < self.0[j].first
///     }
///
///     fn keywords(&self, i: usize) -> Cow<'_, str> {
///         Cow::Owned(format!("{} {}", self.0[i].first, self.0[i].last))
///     }
/// }
///
/// let mut contacts = Contacts(vec![
///     Contact { first: "Meggan".into(), last: "Siering".into() },
///     Contact { first: "Mischa".into(), last: "Witting".into() },
/// ]);
/// let results = sort(&mut contacts, "mw");
/// assert_eq!(contacts.0[0].first, "Mischa");
/// assert!(results[0].matched);
/// ```
pub trait Sortable {
    /// Number of elements in the collection.
    fn len(&self) -> usize;

    /// Whether the collection has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swap the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Whether the element at `i` sorts before the element at `j` in the
    /// collection's native order.
    fn less(&self, i: usize, j: usize) -> bool;

    /// The text of element `i` that is compared to the query.
    fn keywords(&self, i: usize) -> Cow<'_, str>;
}

/// Trait for string-like items that can be matched without a wrapper.
///
/// Any slice or `Vec` of `AsMatchStr` items is [`Sortable`], with byte-wise
/// string order as its native order.
///
/// # Examples
///
/// ```
/// use fuzzysorter::AsMatchStr;
///
/// let owned = String::from("hello");
/// assert_eq!(owned.as_match_str(), "hello");
///
/// let borrowed: &str = "world";
/// assert_eq!(borrowed.as_match_str(), "world");
/// ```
pub trait AsMatchStr {
    /// Returns the text of this item used for matching.
    fn as_match_str(&self) -> &str;
}

impl AsMatchStr for String {
    fn as_match_str(&self) -> &str {
        self.as_str()
    }
}

impl AsMatchStr for str {
    fn as_match_str(&self) -> &str {
        self
    }
}

impl AsMatchStr for &str {
    fn as_match_str(&self) -> &str {
        self
    }
}

impl AsMatchStr for Cow<'_, str> {
    fn as_match_str(&self) -> &str {
        self.as_ref()
    }
}

impl<T: AsMatchStr> Sortable for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i].as_match_str() < self[j].as_match_str()
    }

    fn keywords(&self, i: usize) -> Cow<'_, str> {
        Cow::Borrowed(self[i].as_match_str())
    }
}

impl<T: AsMatchStr> Sortable for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }

    fn less(&self, i: usize, j: usize) -> bool {
        Sortable::less(self.as_slice(), i, j)
    }

    fn keywords(&self, i: usize) -> Cow<'_, str> {
        Sortable::keywords(self.as_slice(), i)
    }
}
