//! Newtype IDs for type-safe identifiers.
//!
//! Book ids are integers assigned by whichever source produced the book, so
//! they are unique within a source but may collide across sources.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Create a new ID.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The id `offset` places after this one, or `None` on overflow.
    pub const fn checked_offset(self, offset: i64) -> Option<Self> {
        match self.0.checked_add(offset) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_serializes_as_integer() {
        let json = serde_json::to_string(&BookId::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: BookId = serde_json::from_str("42").unwrap();
        assert_eq!(back, BookId::new(42));
    }

    #[test]
    fn test_book_id_parse_and_offset() {
        let id: BookId = " 1000 ".parse().unwrap();
        assert_eq!(id.checked_offset(3), Some(BookId::new(1003)));
        assert!("abc".parse::<BookId>().is_err());
    }

    #[test]
    fn test_offset_overflow_is_none() {
        assert_eq!(BookId::new(i64::MAX).checked_offset(1), None);
        assert_eq!(BookId::new(i64::MIN).checked_offset(-1), None);
    }
}
