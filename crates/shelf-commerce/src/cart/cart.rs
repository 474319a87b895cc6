//! Cart and cart line types.

use crate::catalog::Book;
use crate::ids::BookId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Holds at most one line per book id. Lines keep the order in which their
/// book was first added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `book`.
    ///
    /// Increments the existing line for `book.id`, or starts a new line with
    /// quantity 1. Returns the line's new quantity.
    pub fn add(&mut self, book: &Book) -> i64 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.book.id == book.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine {
            book: book.clone(),
            quantity: 1,
        });
        1
    }

    /// Remove one unit of the book with `book_id`.
    ///
    /// A line at quantity 1 is deleted. Unknown ids are ignored. Returns the
    /// remaining quantity for that book.
    pub fn remove(&mut self, book_id: BookId) -> i64 {
        let Some(pos) = self.lines.iter().position(|l| l.book.id == book_id) else {
            return 0;
        };

        if self.lines[pos].quantity > 1 {
            self.lines[pos].quantity -= 1;
            self.lines[pos].quantity
        } else {
            self.lines.remove(pos);
            0
        }
    }

    /// Sum of price times quantity over every line.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .fold(Money::zero(Currency::default()), |acc, subtotal| {
                acc.saturating_add(subtotal)
            })
    }

    /// Total number of units (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for a book, if present.
    pub fn line(&self, book_id: BookId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.book.id == book_id)
    }

    /// Quantity held for a book (zero when absent).
    pub fn quantity(&self, book_id: BookId) -> i64 {
        self.line(book_id).map_or(0, |l| l.quantity)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// A book and how many units of it are in the cart. Quantity is always at
/// least 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The book, as it was when first added.
    pub book: Book,
    /// Units in the cart.
    pub quantity: i64,
}

impl CartLine {
    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.book.price.saturating_mul(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, price: i64) -> Book {
        Book::builder(BookId::new(id), format!("Book {id}"))
            .price(Money::new(price, Currency::INR))
            .build()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert_eq!(cart.total().currency, Currency::INR);
    }

    #[test]
    fn test_add_same_book_twice_makes_one_line() {
        let mut cart = Cart::new();
        let clean_code = book(1, 3799);

        assert_eq!(cart.add(&clean_code), 1);
        assert_eq!(cart.add(&clean_code), 2);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity(BookId::new(1)), 2);
        assert_eq!(cart.total().minor_units, 7598);
    }

    #[test]
    fn test_total_is_sum_of_price_times_quantity() {
        let mut cart = Cart::new();
        let a = book(1, 1000);
        let b = book(2, 2550);
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert_eq!(cart.total().minor_units, 2 * 1000 + 2550);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_total_counts_every_line() {
        let mut cart = Cart::new();
        let books = [book(1, 500), book(2, 3799), book(3, 1)];
        for b in &books {
            cart.add(b);
        }
        cart.add(&books[1]);

        let expected: i64 = cart
            .lines()
            .iter()
            .map(|l| l.book.price.minor_units * l.quantity)
            .sum();
        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.total().minor_units, expected);
        assert_eq!(cart.total().minor_units, 500 + 2 * 3799 + 1);
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let mut cart = Cart::new();
        cart.add(&book(1, i64::MAX));
        cart.add(&book(2, 1));

        assert_eq!(cart.total().minor_units, i64::MAX);
    }

    #[test]
    fn test_remove_decrements_then_deletes() {
        let mut cart = Cart::new();
        let a = book(1, 500);
        cart.add(&a);
        cart.add(&a);

        assert_eq!(cart.remove(BookId::new(1)), 1);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.remove(BookId::new(1)), 0);
        assert!(cart.is_empty());
        assert!(cart.line(BookId::new(1)).is_none());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut cart = Cart::new();
        cart.add(&book(1, 500));
        let before = cart.clone();

        assert_eq!(cart.remove(BookId::new(99)), 0);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_then_remove_restores_prior_state() {
        let mut cart = Cart::new();
        cart.add(&book(1, 500));
        cart.add(&book(2, 700));
        let before = cart.clone();

        cart.add(&book(3, 900));
        cart.remove(BookId::new(3));

        assert_eq!(cart, before);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&book(3, 1));
        cart.add(&book(1, 1));
        cart.add(&book(3, 1));

        let order: Vec<i64> = cart.lines().iter().map(|l| l.book.id.get()).collect();
        assert_eq!(order, vec![3, 1]);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&book(1, 100));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }
}
