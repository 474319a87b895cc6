//! The backend's fixed book inventory.

use shelf_commerce::{Book, BookId, Catalog, Currency, Money};

/// Books served by both the HTTP route and the Lambda handler.
pub fn inventory() -> Catalog {
    let rows = [
        (
            1,
            "Clean Code",
            "Robert C Martin",
            "Programming",
            3799,
            "Clean coding practices and principles.",
            "https://images-na.ssl-images-amazon.com/images/I/41xShlnTZTL._SX377_BO1,204,203,200_.jpg",
            25,
        ),
        (
            2,
            "AWS Certified Solutions Architect",
            "AWS Team",
            "Cloud",
            4499,
            "Guide for AWS Solutions Architect certification.",
            "https://images-na.ssl-images-amazon.com/images/I/41Z1QzC0Q-L._SX379_BO1,204,203,200_.jpg",
            15,
        ),
        (
            3,
            "The Pragmatic Programmer",
            "Andrew Hunt",
            "Programming",
            3299,
            "Pragmatic software development practices.",
            "https://images-na.ssl-images-amazon.com/images/I/51A0OZ6pKGL._SX379_BO1,204,203,200_.jpg",
            18,
        ),
        (
            4,
            "Designing Data Intensive Applications",
            "Martin Kleppmann",
            "Architecture",
            5599,
            "Scalable and reliable data systems.",
            "https://images-na.ssl-images-amazon.com/images/I/51e6p7pQG-L._SX379_BO1,204,203,200_.jpg",
            10,
        ),
    ];

    rows.into_iter()
        .map(|(id, title, author, category, price, description, image_url, stock)| {
            Book::builder(BookId::new(id), title)
                .author(author)
                .category(category)
                .price(Money::new(price, Currency::INR))
                .description(description)
                .image_url(image_url)
                .stock(stock)
                .build()
        })
        .collect::<Vec<_>>()
        .into()
}
