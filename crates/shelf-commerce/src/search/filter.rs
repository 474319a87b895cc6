//! Catalog filter.

use crate::catalog::Book;
use serde::{Deserialize, Serialize};

/// Category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";

/// A title search combined with a category selection.
///
/// The visible books are derived on demand and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Free-text title search.
    pub search: String,
    /// Selected category, or [`ALL_CATEGORIES`].
    pub category: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl CatalogFilter {
    /// Create a filter.
    pub fn new(search: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
        }
    }

    /// Filter on title only.
    pub fn search(search: impl Into<String>) -> Self {
        Self::new(search, ALL_CATEGORIES)
    }

    /// Filter on category only.
    pub fn category(category: impl Into<String>) -> Self {
        Self::new("", category)
    }

    /// Check whether a single book passes the filter.
    pub fn matches(&self, book: &Book) -> bool {
        let needle = self.search.trim().to_lowercase();
        matches_title(book, &needle) && self.matches_category(book)
    }

    /// Books passing the filter, in catalog order.
    pub fn apply<'a>(&self, books: impl IntoIterator<Item = &'a Book>) -> Vec<&'a Book> {
        let needle = self.search.trim().to_lowercase();
        books
            .into_iter()
            .filter(|book| matches_title(book, &needle) && self.matches_category(book))
            .collect()
    }

    fn matches_category(&self, book: &Book) -> bool {
        self.category == ALL_CATEGORIES || book.category == self.category
    }
}

fn matches_title(book: &Book, needle: &str) -> bool {
    needle.is_empty() || book.title.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::BookId;

    fn books() -> Vec<Book> {
        [
            (1, "Clean Code", "Programming"),
            (2, "AWS Certified Solutions Architect", "Cloud"),
            (3, "The Pragmatic Programmer", "Programming"),
            (4, "Designing Data Intensive Applications", "Architecture"),
        ]
        .into_iter()
        .map(|(id, title, category)| {
            Book::builder(BookId::new(id), title)
                .category(category)
                .build()
        })
        .collect()
    }

    fn ids(found: &[&Book]) -> Vec<i64> {
        found.iter().map(|b| b.id.get()).collect()
    }

    #[test]
    fn test_default_filter_shows_everything() {
        let books = books();
        assert_eq!(ids(&CatalogFilter::default().apply(&books)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let books = books();
        let found = CatalogFilter::search("  PRAGMATIC ").apply(&books);
        assert_eq!(ids(&found), vec![3]);

        let found = CatalogFilter::search("code").apply(&books);
        assert_eq!(ids(&found), vec![1]);
    }

    #[test]
    fn test_search_does_not_match_other_fields() {
        let books = books();
        assert!(CatalogFilter::search("cloud").apply(&books).is_empty());
    }

    #[test]
    fn test_category_preserves_catalog_order() {
        let books = books();
        let found = CatalogFilter::category("Programming").apply(&books);
        assert_eq!(ids(&found), vec![1, 3]);
    }

    #[test]
    fn test_search_and_category_combine() {
        let books = books();
        assert_eq!(ids(&CatalogFilter::new("a", "Cloud").apply(&books)), vec![2]);
        assert!(CatalogFilter::new("clean", "Cloud").apply(&books).is_empty());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let books = books();
        assert!(CatalogFilter::category("all").apply(&books).is_empty());
    }

    #[test]
    fn test_matches_single_book() {
        let books = books();
        let filter = CatalogFilter::new("DATA", "Architecture");
        assert!(filter.matches(&books[3]));
        assert!(!filter.matches(&books[0]));
    }
}
