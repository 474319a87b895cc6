//! Wire format of the `/books` endpoint.
//!
//! Prices travel as decimal major units and field names are snake_case
//! (`image_url`). Both backends produce this shape and the storefront
//! converts it into [`Book`] at the boundary.

use crate::catalog::Book;
use crate::error::CommerceError;
use crate::ids::BookId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Deserializer, Serialize};

/// Response envelope of `GET /books`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BooksPayload {
    /// The books.
    #[serde(default)]
    pub books: Vec<BookRecord>,
}

impl BooksPayload {
    /// Build a payload from domain books.
    pub fn from_books<'a>(books: impl IntoIterator<Item = &'a Book>) -> Self {
        Self {
            books: books.into_iter().map(BookRecord::from).collect(),
        }
    }
}

/// A single book as served over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub category: String,
    /// Price in major units (e.g. rupees). Accepts a JSON number or a
    /// numeric string.
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl BookRecord {
    /// Convert into a domain book priced in `currency`.
    ///
    /// Missing text fields become empty strings and a missing stock becomes
    /// zero.
    pub fn into_book(self, currency: Currency) -> Result<Book, CommerceError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CommerceError::InvalidPrice {
                book_id: self.id,
                price: self.price,
            });
        }

        Ok(Book::builder(BookId::new(self.id), self.title)
            .author(self.author)
            .category(self.category)
            .price(Money::from_decimal(self.price, currency))
            .description(self.description.unwrap_or_default())
            .image_url(self.image_url.unwrap_or_default())
            .stock(self.stock.unwrap_or(0))
            .build())
    }
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.get(),
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
            price: book.price.to_decimal(),
            description: Some(book.description.clone()),
            image_url: Some(book.image_url.clone()),
            stock: Some(book.stock),
        }
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults_missing_fields() {
        let json = r#"{"id":2,"title":"AWS","author":"AWS Team","category":"Cloud","price":44.99}"#;
        let record: BookRecord = serde_json::from_str(json).unwrap();
        let book = record.into_book(Currency::INR).unwrap();

        assert_eq!(book.id, BookId::new(2));
        assert_eq!(book.price.minor_units, 4499);
        assert_eq!(book.description, "");
        assert_eq!(book.image_url, "");
        assert_eq!(book.stock, 0);
    }

    #[test]
    fn test_record_without_author_or_category_is_accepted() {
        let json = r#"{"id":3,"title":"No author","price":10}"#;
        let record: BookRecord = serde_json::from_str(json).unwrap();
        let book = record.into_book(Currency::INR).unwrap();

        assert_eq!(book.author, "");
        assert_eq!(book.category, "");
        assert_eq!(book.price.minor_units, 1000);
    }

    #[test]
    fn test_record_accepts_string_price() {
        let json = r#"{"id":1,"title":"T","author":"A","category":"C","price":"37.99","image_url":"u","stock":25}"#;
        let record: BookRecord = serde_json::from_str(json).unwrap();
        let book = record.into_book(Currency::INR).unwrap();
        assert_eq!(book.price.minor_units, 3799);
        assert_eq!(book.image_url, "u");
        assert_eq!(book.stock, 25);
    }

    #[test]
    fn test_record_rejects_negative_price() {
        let record = BookRecord {
            id: 5,
            title: "T".into(),
            author: "A".into(),
            category: "C".into(),
            price: -1.0,
            description: None,
            image_url: None,
            stock: None,
        };
        assert!(matches!(
            record.into_book(Currency::INR),
            Err(CommerceError::InvalidPrice { book_id: 5, .. })
        ));
    }

    #[test]
    fn test_payload_from_books_uses_major_units() {
        let book = Book::builder(BookId::new(1), "Clean Code")
            .price(Money::new(3799, Currency::INR))
            .image_url("img")
            .build();
        let payload = BooksPayload::from_books([&book]);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["books"][0]["price"], 37.99);
        assert_eq!(json["books"][0]["image_url"], "img");
    }

    #[test]
    fn test_payload_missing_books_is_empty() {
        let payload: BooksPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.books.is_empty());
    }
}
