//! Category options for the catalog filter.

use crate::catalog::Book;
use crate::search::ALL_CATEGORIES;
use std::collections::HashSet;

/// Category choices for a catalog: the `"All"` sentinel followed by each
/// distinct category in the order it first appears.
pub fn category_options<'a>(books: impl IntoIterator<Item = &'a Book>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for book in books {
        if seen.insert(book.category.as_str()) {
            options.push(book.category.clone());
        }
    }
    options
}
