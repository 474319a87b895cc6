//! Book catalog backends for the Shelf storefront.
//!
//! Two interchangeable ways to serve the same fixed inventory:
//! - an axum router exposing `GET /books`
//! - [`lambda::handler`], producing an API Gateway proxy response
//!
//! Both answer `{"books": [...]}` with prices in decimal rupees.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod inventory;
pub mod lambda;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::ApiError;
pub use state::AppState;

use routes::books_handler;

/// Build the router over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/books", get(books_handler))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn start_server(config: ApiConfig) -> Result<(), ApiError> {
    let state = AppState::new();
    let address = config.address();

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ApiError::Bind {
            address: address.clone(),
            source,
        })?;
    info!(books = state.payload.books.len(), "API running on {address}");

    serve(listener, state).await
}

/// Serve on an already-bound listener until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), ApiError> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
