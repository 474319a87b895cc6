use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::debug;

use crate::state::AppState;

/// `GET /books`
pub async fn books_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    debug!(count = state.payload.books.len(), "Serving books");
    (StatusCode::OK, Json(state.payload.clone()))
}
