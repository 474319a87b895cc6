use std::sync::Arc;

use shelf_commerce::catalog::BooksPayload;

use crate::inventory::inventory;

/// Shared, read-only server state.
pub struct AppState {
    pub payload: BooksPayload,
}

impl AppState {
    /// State serving the built-in inventory.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            payload: BooksPayload::from_books(&inventory()),
        })
    }
}
