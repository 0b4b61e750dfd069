//! Offset/limit paging for list endpoints.

use serde::Serialize;

/// Page size used when none is given or the requested one is out of range.
pub const DEFAULT_TAKE: usize = 10;

/// Largest page size a caller may request.
pub const MAX_TAKE: usize = 100;

/// Normalized `skip`/`take` pair.
///
/// Out-of-range input is never an error: a negative `skip` becomes `0` and a
/// `take` that is not in `1..=MAX_TAKE` becomes [`DEFAULT_TAKE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    skip: usize,
    take: usize,
}

impl Paging {
    /// Builds paging from raw, possibly missing or out-of-range, values.
    pub fn new(skip: Option<i64>, take: Option<i64>) -> Self {
        let skip = skip
            .filter(|s| *s > 0)
            .and_then(|s| usize::try_from(s).ok())
            .unwrap_or(0);
        let take = take
            .and_then(|t| usize::try_from(t).ok())
            .filter(|t| (1..=MAX_TAKE).contains(t))
            .unwrap_or(DEFAULT_TAKE);
        Self { skip, take }
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn take(&self) -> usize {
        self.take
    }

    /// Cuts the page out of an already filtered and sorted sequence.
    pub fn apply<T>(&self, items: Vec<T>) -> Page<T> {
        let total = items.len();
        let items = items.into_iter().skip(self.skip).take(self.take).collect();
        Page {
            total,
            skip: self.skip,
            take: self.take,
            items,
        }
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Result envelope of a list query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Number of matches before paging.
    pub total: usize,
    pub skip: usize,
    pub take: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Converts every item, keeping the envelope.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total: self.total,
            skip: self.skip,
            take: self.take,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
