//! Storefront application state.

use crate::aggregate::{AggregateReport, Aggregator};
use shelf_auth::{AuthError, AuthForm, AuthMode, MockSession, User};
use shelf_commerce::catalog::category_options;
use shelf_commerce::{Book, BookId, Cart, Catalog, CatalogFilter, Money};
use tracing::debug;

/// Everything the storefront page shows, owned in one place.
///
/// The catalog is fixed after loading; search, category, cart, session and
/// the open book-detail view change only through the methods below.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    filter: CatalogFilter,
    cart: Cart,
    session: MockSession,
    selected: Option<BookId>,
}

impl Storefront {
    /// Create a storefront over a loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: CatalogFilter::default(),
            cart: Cart::new(),
            session: MockSession::new(),
            selected: None,
        }
    }

    /// Load the catalog through `aggregator` and create a storefront over it.
    pub async fn load(aggregator: &Aggregator) -> (Self, AggregateReport) {
        let (catalog, report) = aggregator.load().await;
        (Self::new(catalog), report)
    }

    // Catalog ------------------------------------------------------------

    /// The full catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Books matching the current search and category, in catalog order.
    pub fn visible_books(&self) -> Vec<&Book> {
        self.filter.apply(&self.catalog)
    }

    /// Category choices, starting with `"All"`.
    pub fn categories(&self) -> Vec<String> {
        category_options(&self.catalog)
    }

    /// Current filter.
    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    /// Set the title search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    /// Set the selected category (`"All"` for none).
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    /// Open the detail view for a book. Returns `None` and leaves the
    /// selection unchanged when the id is unknown.
    pub fn select_book(&mut self, id: BookId) -> Option<&Book> {
        let book = self.catalog.find(id)?;
        self.selected = Some(id);
        Some(book)
    }

    /// The book whose detail view is open.
    pub fn selected_book(&self) -> Option<&Book> {
        self.selected.and_then(|id| self.catalog.find(id))
    }

    /// Close the detail view.
    pub fn close_details(&mut self) {
        self.selected = None;
    }

    // Cart ---------------------------------------------------------------

    /// Add one unit of the catalog book with `id`.
    ///
    /// Returns false, changing nothing, when no such book exists.
    pub fn add_to_cart(&mut self, id: BookId) -> bool {
        match self.catalog.find(id) {
            Some(book) => {
                let quantity = self.cart.add(book);
                debug!(book_id = %id, quantity, "Added to cart");
                true
            }
            None => false,
        }
    }

    /// Remove one unit of the book with `id`.
    pub fn remove_from_cart(&mut self, id: BookId) {
        let quantity = self.cart.remove(id);
        debug!(book_id = %id, quantity, "Removed from cart");
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart total.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    // Session ------------------------------------------------------------

    /// Open the login or registration dialog.
    pub fn open_auth(&mut self, mode: AuthMode) {
        self.session.open_dialog(mode);
    }

    /// Dismiss the dialog.
    pub fn close_auth(&mut self) {
        self.session.close_dialog();
    }

    /// Mode of the open dialog, if any.
    pub fn auth_mode(&self) -> Option<AuthMode> {
        self.session.dialog()
    }

    /// Submit the login or registration form.
    pub fn submit_auth(&mut self, mode: AuthMode, form: &AuthForm) -> Result<&User, AuthError> {
        self.session.submit(mode, form)
    }

    /// Sign out.
    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_commerce::Currency;

    fn storefront() -> Storefront {
        let books = [
            (1, "Clean Code", "Programming", 3799),
            (2, "AWS Certified Solutions Architect", "Cloud", 4499),
            (3, "The Pragmatic Programmer", "Programming", 3299),
        ]
        .into_iter()
        .map(|(id, title, category, price)| {
            Book::builder(BookId::new(id), title)
                .category(category)
                .price(Money::new(price, Currency::INR))
                .build()
        })
        .collect::<Vec<_>>();
        Storefront::new(Catalog::new(books))
    }

    fn visible_ids(store: &Storefront) -> Vec<i64> {
        store.visible_books().iter().map(|b| b.id.get()).collect()
    }

    #[test]
    fn test_initial_view_shows_all_books() {
        let store = storefront();
        assert_eq!(visible_ids(&store), vec![1, 2, 3]);
        assert_eq!(store.categories(), vec!["All", "Programming", "Cloud"]);
    }

    #[test]
    fn test_search_and_category_narrow_view() {
        let mut store = storefront();
        store.set_category("Programming");
        assert_eq!(visible_ids(&store), vec![1, 3]);

        store.set_search(" prag");
        assert_eq!(visible_ids(&store), vec![3]);

        store.set_category("All");
        store.set_search("");
        assert_eq!(visible_ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn test_cart_through_storefront() {
        let mut store = storefront();
        assert!(store.add_to_cart(BookId::new(1)));
        assert!(store.add_to_cart(BookId::new(1)));
        assert!(!store.add_to_cart(BookId::new(42)));

        assert_eq!(store.cart().lines().len(), 1);
        assert_eq!(store.cart_total().minor_units, 7598);

        store.remove_from_cart(BookId::new(1));
        assert_eq!(store.cart_total().minor_units, 3799);
    }

    #[test]
    fn test_filter_does_not_touch_cart() {
        let mut store = storefront();
        store.add_to_cart(BookId::new(2));
        store.set_category("Programming");
        assert_eq!(store.cart().quantity(BookId::new(2)), 1);
    }

    #[test]
    fn test_book_details() {
        let mut store = storefront();
        assert!(store.select_book(BookId::new(9)).is_none());
        assert!(store.selected_book().is_none());

        assert_eq!(store.select_book(BookId::new(2)).unwrap().title, "AWS Certified Solutions Architect");
        assert_eq!(store.selected_book().unwrap().id, BookId::new(2));

        store.close_details();
        assert!(store.selected_book().is_none());
    }

    #[test]
    fn test_auth_dialog_flow() {
        let mut store = storefront();
        store.open_auth(AuthMode::Login);
        assert_eq!(store.auth_mode(), Some(AuthMode::Login));

        assert!(store
            .submit_auth(AuthMode::Login, &AuthForm::login("", "x"))
            .is_err());
        assert_eq!(store.auth_mode(), Some(AuthMode::Login));
        assert!(store.current_user().is_none());

        store
            .submit_auth(AuthMode::Login, &AuthForm::login("a@b.com", "x"))
            .unwrap();
        assert_eq!(store.auth_mode(), None);
        assert_eq!(store.current_user(), Some(&User::new("a", "a@b.com")));

        store.logout();
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_close_auth() {
        let mut store = storefront();
        store.open_auth(AuthMode::Register);
        store.close_auth();
        assert_eq!(store.auth_mode(), None);
    }
}
