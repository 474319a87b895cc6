//! Built-in fallback list.

use shelf_commerce::{Book, BookId, Currency, Money};

/// Books shown when the store's own backend cannot be reached.
pub fn builtin_books() -> Vec<Book> {
    vec![Book::builder(BookId::new(1), "Clean Code")
        .author("Robert C Martin")
        .category("Programming")
        .price(Money::new(3799, Currency::INR))
        .description("Practical handbook on writing clean, maintainable and readable code.")
        .image_url(
            "https://images-na.ssl-images-amazon.com/images/I/41xShlnTZTL._SX377_BO1,204,203,200_.jpg",
        )
        .stock(25)
        .build()]
}
