//! Browse command.

use anyhow::Result;
use serde::Serialize;
use shelf_auth::{AuthForm, AuthMode, User};
use shelf_commerce::{Book, BookId, CartLine};
use shelf_storefront::Storefront;

use super::BrowseArgs;
use crate::context::Context;

/// What `browse --json` prints.
#[derive(Debug, Serialize)]
struct BrowseView<'a> {
    search: &'a str,
    category: &'a str,
    books: Vec<&'a Book>,
    selected: Option<&'a Book>,
    cart: &'a [CartLine],
    cart_total: String,
    user: Option<&'a User>,
    messages: Vec<String>,
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let aggregator = ctx.config.storefront.aggregator();
    let (mut storefront, report) = Storefront::load(&aggregator).await;
    ctx.output.debug(&format!(
        "Loaded {} books from {} and {} external",
        report.primary_count, report.primary, report.external_count
    ));

    let messages = apply(&mut storefront, &args);

    if ctx.output.is_json() {
        let filter = storefront.filter();
        ctx.output.json(&BrowseView {
            search: &filter.search,
            category: &filter.category,
            books: storefront.visible_books(),
            selected: storefront.selected_book(),
            cart: storefront.cart().lines(),
            cart_total: storefront.cart_total().display(),
            user: storefront.current_user(),
            messages,
        });
        return Ok(());
    }

    for message in &messages {
        ctx.output.warn(message);
    }
    render(&storefront, ctx);
    Ok(())
}

/// Apply the requested actions in order: filter, details, cart, sign-in.
///
/// Returns the messages a user should see for actions that had no effect.
fn apply(storefront: &mut Storefront, args: &BrowseArgs) -> Vec<String> {
    let mut messages = Vec::new();

    if let Some(search) = &args.search {
        storefront.set_search(search.clone());
    }
    if let Some(category) = &args.category {
        storefront.set_category(category.clone());
    }

    if let Some(id) = args.details {
        if storefront.select_book(BookId::new(id)).is_none() {
            messages.push(format!("No book with id {id}"));
        }
    }

    for &id in &args.add {
        if !storefront.add_to_cart(BookId::new(id)) {
            messages.push(format!("No book with id {id}"));
        }
    }
    for &id in &args.remove {
        storefront.remove_from_cart(BookId::new(id));
    }

    if let Some((mode, form)) = auth_request(args) {
        storefront.open_auth(mode);
        if let Err(e) = storefront.submit_auth(mode, &form) {
            messages.push(e.to_string());
        }
    }

    messages
}

fn auth_request(args: &BrowseArgs) -> Option<(AuthMode, AuthForm)> {
    let password = args.password.clone().unwrap_or_default();
    if let Some(email) = &args.login {
        return Some((AuthMode::Login, AuthForm::login(email.clone(), password)));
    }
    args.register.as_ref().map(|name| {
        let email = args.email.clone().unwrap_or_default();
        (
            AuthMode::Register,
            AuthForm::register(name.clone(), email, password),
        )
    })
}

fn render(storefront: &Storefront, ctx: &Context) {
    let out = &ctx.output;
    let filter = storefront.filter();
    let books = storefront.visible_books();

    out.header(&format!(
        "Books ({} of {}, category: {})",
        books.len(),
        storefront.catalog().len(),
        filter.category
    ));
    if books.is_empty() {
        out.info("No books match");
    } else {
        let widths = [6, 36, 22, 14, 10];
        out.table_row(&["ID", "TITLE", "AUTHOR", "CATEGORY", "PRICE"], &widths);
        for book in books {
            let id = book.id.to_string();
            let price = book.price.display();
            out.table_row(
                &[
                    id.as_str(),
                    book.title.as_str(),
                    book.author.as_str(),
                    book.category.as_str(),
                    price.as_str(),
                ],
                &widths,
            );
        }
    }

    if let Some(book) = storefront.selected_book() {
        out.header(&book.title);
        out.kv("author", &book.author);
        out.kv("category", &book.category);
        out.kv("price", &book.price.display());
        out.kv("stock", &book.stock.to_string());
        if !book.description.is_empty() {
            out.kv("description", &book.description);
        }
    }

    let cart = storefront.cart();
    out.header(&format!("Cart ({} items)", cart.item_count()));
    for line in cart.lines() {
        out.list_item(&format!(
            "{} x{} = {}",
            line.book.title,
            line.quantity,
            line.subtotal().display()
        ));
    }
    out.kv("total", &storefront.cart_total().display());

    match storefront.current_user() {
        Some(user) => out.success(&user.greeting()),
        None => out.debug("Not signed in"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_commerce::{Catalog, Currency, Money};

    fn storefront() -> Storefront {
        let book = |id: i64, title: &str, category: &str, price: i64| {
            Book::builder(BookId::new(id), title)
                .category(category)
                .price(Money::new(price, Currency::INR))
                .build()
        };
        Storefront::new(Catalog::new(vec![
            book(1, "Clean Code", "Programming", 3799),
            book(2, "Atomic Habits", "Self-Help", 4499),
        ]))
    }

    fn args() -> BrowseArgs {
        BrowseArgs {
            search: None,
            category: None,
            add: Vec::new(),
            remove: Vec::new(),
            details: None,
            login: None,
            register: None,
            email: None,
            password: None,
        }
    }

    #[test]
    fn test_add_twice_then_remove() {
        let mut store = storefront();
        let messages = apply(
            &mut store,
            &BrowseArgs {
                add: vec![1, 1, 2],
                remove: vec![2],
                ..args()
            },
        );

        assert!(messages.is_empty());
        assert_eq!(store.cart().quantity(BookId::new(1)), 2);
        assert_eq!(store.cart().quantity(BookId::new(2)), 0);
        assert_eq!(store.cart_total().minor_units, 7598);
    }

    #[test]
    fn test_unknown_ids_reported() {
        let mut store = storefront();
        let messages = apply(
            &mut store,
            &BrowseArgs {
                add: vec![99],
                details: Some(42),
                ..args()
            },
        );

        assert_eq!(messages.len(), 2);
        assert!(store.cart().is_empty());
        assert!(store.selected_book().is_none());
    }

    #[test]
    fn test_filter_applied() {
        let mut store = storefront();
        apply(
            &mut store,
            &BrowseArgs {
                search: Some("  ATOMIC ".to_string()),
                ..args()
            },
        );

        let titles: Vec<_> = store.visible_books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Atomic Habits"]);
    }

    #[test]
    fn test_login_sets_user() {
        let mut store = storefront();
        let messages = apply(
            &mut store,
            &BrowseArgs {
                login: Some("a@b.com".to_string()),
                password: Some("x".to_string()),
                ..args()
            },
        );

        assert!(messages.is_empty());
        assert_eq!(store.current_user(), Some(&User::new("a", "a@b.com")));
        assert_eq!(store.auth_mode(), None);
    }

    #[test]
    fn test_login_without_password_is_rejected() {
        let mut store = storefront();
        let messages = apply(
            &mut store,
            &BrowseArgs {
                login: Some("a@b.com".to_string()),
                ..args()
            },
        );

        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Please fill all required fields"));
        assert!(store.current_user().is_none());
        assert_eq!(store.auth_mode(), Some(AuthMode::Login));
    }

    #[test]
    fn test_register_uses_name() {
        let mut store = storefront();
        apply(
            &mut store,
            &BrowseArgs {
                register: Some("Asha".to_string()),
                email: Some("asha@example.com".to_string()),
                password: Some("pw".to_string()),
                ..args()
            },
        );

        assert_eq!(
            store.current_user(),
            Some(&User::new("Asha", "asha@example.com"))
        );
    }
}
