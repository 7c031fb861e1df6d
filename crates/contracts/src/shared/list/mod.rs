//! Building blocks for client-side lists: search, multi-column sort,
//! pagination and row selection.
//!
//! The pieces know nothing about each other; a list controller composes them
//! and owns the state.

pub mod paginator;
pub mod selection;
pub mod sort;

pub use paginator::{PageItem, Paginator};
pub use selection::SelectionTracker;
pub use sort::{compare_by_plan, sort_by_plan, SortCriterion, SortDirection, Sortable};

/// Types that can be matched against a free-text search query
pub trait Searchable {
    /// Returns true if the (already lowercased) needle occurs in any searchable field
    fn matches_search(&self, needle_lower: &str) -> bool;
}

/// Keeps only items matching the search term.
///
/// Matching is a case-insensitive substring test. An empty term keeps everything.
pub fn filter_by_search<T: Searchable>(items: Vec<T>, term: &str) -> Vec<T> {
    if term.is_empty() {
        return items;
    }
    let needle = term.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_search(&needle))
        .collect()
}

/// Case-insensitive substring test used by `Searchable` implementations
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str);

    impl Searchable for Row {
        fn matches_search(&self, needle_lower: &str) -> bool {
            contains_ignore_case(self.0, needle_lower)
        }
    }

    #[test]
    fn test_empty_search_keeps_all() {
        let rows = vec![Row("a"), Row("b")];
        assert_eq!(filter_by_search(rows, "").len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = vec![Row("Dell Laptop"), Row("Honda Civic")];
        let found = filter_by_search(rows, "DELL");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "Dell Laptop");
    }
}
