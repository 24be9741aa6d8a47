//! Client-side list filtering shared by every screen.
//!
//! DESIGN
//! ======
//! One pure function ([`filter_records`]) parametrized by a predicate; the
//! search + status combination every list uses is [`ListQuery`]. Records
//! opt in through [`Listable`]. Filtering preserves input order and is cheap
//! enough to recompute on every keystroke.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// A closed set of status values that can be selected in a filter.
pub trait StatusKey: Copy + PartialEq + 'static {
    /// Selectable values in display order.
    const ALL: &'static [Self];

    /// Stable wire/select key (e.g. `"pending"`).
    fn key(self) -> &'static str;

    /// Display label.
    fn label(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.key() == key)
    }
}

/// Status selection: everything, or one literal status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter<S> {
    #[default]
    All,
    Only(S),
}

impl<S: StatusKey> StatusFilter<S> {
    pub const ALL_KEY: &'static str = "all";

    /// Parse a select value; unknown keys fall back to [`StatusFilter::All`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        S::from_key(key).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::All => Self::ALL_KEY,
            Self::Only(status) => status.key(),
        }
    }

    #[must_use]
    pub fn allows(self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// A record that can be searched and filtered by status.
pub trait Listable {
    type Status: StatusKey;

    fn status(&self) -> Self::Status;

    /// Text fields the search box matches against.
    fn haystack(&self) -> Vec<&str>;
}

/// Search text + status selection for one list.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery<S> {
    pub search: String,
    pub status: StatusFilter<S>,
}

impl<S> Default for ListQuery<S> {
    fn default() -> Self {
        Self { search: String::new(), status: StatusFilter::All }
    }
}

impl<S: StatusKey> ListQuery<S> {
    #[must_use]
    pub fn with_status(status: StatusFilter<S>) -> Self {
        Self { search: String::new(), status }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.status != StatusFilter::All
    }

    pub fn matches<T: Listable<Status = S>>(&self, item: &T) -> bool {
        if !self.status.allows(item.status()) {
            return false;
        }
        let needle = self.search.trim();
        needle.is_empty() || item.haystack().iter().any(|field| contains_ci(field, needle))
    }
}

/// Keep the items accepted by `predicate`, in their original order.
pub fn filter_records<T, P>(items: &[T], predicate: P) -> Vec<&T>
where
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).collect()
}

/// Apply a search + status query to `items`.
pub fn apply_query<'a, T: Listable>(items: &'a [T], query: &ListQuery<T::Status>) -> Vec<&'a T> {
    filter_records(items, |item| query.matches(item))
}

/// Case-insensitive substring test.
#[must_use]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
