//! Query engine for list endpoints.
//!
//! A list query runs in three steps over the store's ordered snapshot:
//! filter, sort, then page. `total` is counted between sorting and paging.

use std::cmp::Ordering;

use common::{Page, Paging};

/// Entities that can be filtered and ordered by a list query.
pub trait Queryable {
    /// Optional per-field filters; the default matches everything.
    type Filter: Default + Send + Sync;

    /// Enumerated sort keys; the default is the documented default ordering.
    type Sort: Copy + Default + Send + Sync;

    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Orders two entities by `sort`, falling back to the display field.
    fn compare(&self, other: &Self, sort: Self::Sort) -> Ordering;
}

/// A full list request: filters, sort key and paging.
#[derive(Debug, Clone)]
pub struct ListQuery<F, S> {
    pub filter: F,
    pub sort: S,
    pub paging: Paging,
}

impl<F: Default, S: Default> ListQuery<F, S> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: Default, S: Default> Default for ListQuery<F, S> {
    fn default() -> Self {
        Self {
            filter: F::default(),
            sort: S::default(),
            paging: Paging::default(),
        }
    }
}

impl<F, S> ListQuery<F, S> {
    pub fn filter(mut self, filter: F) -> Self {
        self.filter = filter;
        self
    }

    pub fn sort(mut self, sort: S) -> Self {
        self.sort = sort;
        self
    }

    pub fn paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }
}

/// Runs `query` over `entities`, which must be in store order.
pub fn run<E: Queryable>(entities: Vec<E>, query: &ListQuery<E::Filter, E::Sort>) -> Page<E> {
    let mut matched: Vec<E> = entities
        .into_iter()
        .filter(|e| e.matches(&query.filter))
        .collect();

    // Stable, so entities equal under the sort key keep store order.
    matched.sort_by(|a, b| a.compare(b, query.sort));

    query.paging.apply(matched)
}

/// Case-insensitive substring filter on a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter(String);

impl TextFilter {
    /// Builds a filter from a raw query parameter.
    ///
    /// Returns `None` for absent or blank input, which filters nothing.
    pub fn new(raw: Option<&str>) -> Option<Self> {
        let needle = raw?.trim();
        if needle.is_empty() {
            return None;
        }
        Some(Self(needle.to_lowercase()))
    }

    pub fn matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.0)
    }
}

/// Applies an optional text filter; absent filters accept everything.
pub fn text_matches(filter: &Option<TextFilter>, field: &str) -> bool {
    filter.as_ref().is_none_or(|f| f.matches(field))
}

/// Applies an optional exact-match filter.
pub fn exact_matches<T: PartialEq>(filter: &Option<T>, field: &T) -> bool {
    filter.as_ref().is_none_or(|f| f == field)
}

/// Orders text case-insensitively, breaking ties on the raw bytes so the
/// result is total.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
