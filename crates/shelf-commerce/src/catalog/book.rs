//! Book and catalog types.

use crate::ids::BookId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A book in the catalog.
///
/// Books are immutable once loaded into a [`Catalog`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Identifier, unique within the source that produced it.
    pub id: BookId,
    /// Title.
    pub title: String,
    /// Author (or subtitle, for third-party books).
    pub author: String,
    /// Category name.
    pub category: String,
    /// Unit price.
    pub price: Money,
    /// Short description.
    pub description: String,
    /// Cover image URL.
    pub image_url: String,
    /// Units in stock.
    pub stock: i64,
}

impl Book {
    /// Start building a book with the given id and title.
    pub fn builder(id: BookId, title: impl Into<String>) -> BookBuilder {
        BookBuilder {
            book: Book {
                id,
                title: title.into(),
                author: String::new(),
                category: String::new(),
                price: Money::zero(Currency::INR),
                description: String::new(),
                image_url: String::new(),
                stock: 0,
            },
        }
    }
}

/// Builder for [`Book`].
#[derive(Debug, Clone)]
pub struct BookBuilder {
    book: Book,
}

impl BookBuilder {
    /// Set the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.book.author = author.into();
        self
    }

    /// Set the category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.book.category = category.into();
        self
    }

    /// Set the unit price.
    pub fn price(mut self, price: Money) -> Self {
        self.book.price = price;
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.book.description = description.into();
        self
    }

    /// Set the cover image URL.
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.book.image_url = image_url.into();
        self
    }

    /// Set the stock level.
    pub fn stock(mut self, stock: i64) -> Self {
        self.book.stock = stock;
        self
    }

    /// Finish building.
    pub fn build(self) -> Book {
        self.book
    }
}

/// The aggregated, read-only list of books.
///
/// Order is significant: it is the order books are displayed and filtered in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create a catalog from books in display order.
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Append another list of books after this catalog's books.
    pub fn concat(mut self, other: impl IntoIterator<Item = Book>) -> Self {
        self.books.extend(other);
        self
    }

    /// All books in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Iterate over books in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// First book with the given id.
    ///
    /// Ids can collide across sources; the earlier source wins.
    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Largest id present, if any.
    pub fn max_id(&self) -> Option<BookId> {
        self.books.iter().map(|b| b.id).max()
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self::new(books)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
