//! List query engine: pure filter and ordering over record collections.
//!
//! Every function here is total and stateless. The presentation layer calls
//! back in with fresh query/filter values on each change; nothing is cached
//! and nothing mutates its input.

use crate::notice::Notice;

/// Single-select category constraint: one enum value, or the "all" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: PartialEq> CategoryFilter<C> {
    /// True when `category` passes the constraint.
    pub fn admits(&self, category: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// Seam between the query engine and the record shapes it filters.
pub trait Queryable {
    type Category: PartialEq;

    fn category(&self) -> &Self::Category;

    /// Free-text search fields, matched case-insensitively as substrings.
    fn search_fields(&self) -> [&str; 2];
}

/// Filter `records` down to the subsequence matching `query` and `category`.
///
/// A record matches when the category filter admits its category AND the
/// query is empty or appears case-insensitively in any search field. Input
/// order is preserved and the input is never mutated.
pub fn filter<R>(records: &[R], query: &str, category: &CategoryFilter<R::Category>) -> Vec<R>
where
    R: Queryable + Clone,
{
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| category.admits(record.category()))
        .filter(|record| {
            needle.is_empty()
                || record
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Order notices pinned-first, then most recent first.
///
/// Operates on a copy. The sort is stable: notices with equal pin state and
/// date keep their relative input order.
pub fn sort_notices(notices: &[Notice]) -> Vec<Notice> {
    let mut sorted = notices.to_vec();
    sorted.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then_with(|| b.date.cmp(&a.date))
    });
    sorted
}
