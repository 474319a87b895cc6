use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use shelf_api::AppState;
use shelf_auth::{AuthForm, AuthMode, User};
use shelf_commerce::BookId;
use shelf_storefront::{PrimaryOrigin, Storefront, StorefrontConfig};
use tokio::net::TcpListener;

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{address}")
}

async fn spawn_backend() -> String {
    spawn(shelf_api::router(AppState::new())).await
}

async fn spawn_external(body: Value) -> String {
    let app = Router::new().route("/1.0/new", get(move || async move { Json(body) }));
    format!("{}/1.0/new", spawn(app).await)
}

async fn spawn_failing_external() -> String {
    let app = Router::new().route("/1.0/new", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    format!("{}/1.0/new", spawn(app).await)
}

fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn backend_and_external_books_are_merged() {
    let config = StorefrontConfig {
        api_base: spawn_backend().await,
        external_url: spawn_external(json!({
            "books": [{"title": "X", "price": "$10.00", "image": "u"}]
        }))
        .await,
        ..StorefrontConfig::default()
    };

    let (store, report) = Storefront::load(&config.aggregator()).await;

    assert_eq!(report.primary, PrimaryOrigin::Backend);
    assert_eq!(report.primary_count, 4);
    assert_eq!(report.external_count, 1);

    let ids: Vec<i64> = store.catalog().iter().map(|b| b.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 1000]);

    let external = store.catalog().find(BookId::new(1000)).unwrap();
    assert_eq!(external.price.minor_units, 80000);
    assert_eq!(external.category, "Technology");
    assert_eq!(
        store.categories(),
        vec!["All", "Programming", "Cloud", "Architecture", "Technology"]
    );
}

#[tokio::test]
async fn unreachable_backend_falls_back_to_builtin_books() {
    let config = StorefrontConfig {
        api_base: closed_port_url(),
        external_url: spawn_external(json!({
            "books": [{"title": "Rust", "subtitle": "Systems", "price": "$2.00"}]
        }))
        .await,
        ..StorefrontConfig::default()
    };

    let (store, report) = Storefront::load(&config.aggregator()).await;

    assert_eq!(report.primary, PrimaryOrigin::Fallback);
    let titles: Vec<&str> = store.catalog().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Clean Code", "Rust"]);
}

#[tokio::test]
async fn failing_external_contributes_nothing() {
    let config = StorefrontConfig {
        api_base: spawn_backend().await,
        external_url: spawn_failing_external().await,
        ..StorefrontConfig::default()
    };

    let (store, report) = Storefront::load(&config.aggregator()).await;

    assert_eq!(report.primary, PrimaryOrigin::Backend);
    assert_eq!(report.external_count, 0);
    assert_eq!(store.catalog().len(), 4);
}

#[tokio::test]
async fn shopping_session_end_to_end() {
    let config = StorefrontConfig {
        api_base: closed_port_url(),
        external_url: spawn_failing_external().await,
        ..StorefrontConfig::default()
    };
    let (mut store, _) = Storefront::load(&config.aggregator()).await;

    assert!(store.add_to_cart(BookId::new(1)));
    assert!(store.add_to_cart(BookId::new(1)));
    assert_eq!(store.cart().lines().len(), 1);
    assert_eq!(store.cart().quantity(BookId::new(1)), 2);
    assert_eq!(store.cart_total().minor_units, 7598);
    assert_eq!(store.cart_total().display(), "\u{20b9}75.98");

    store.open_auth(AuthMode::Login);
    let user = store
        .submit_auth(AuthMode::Login, &AuthForm::login("a@b.com", "x"))
        .unwrap()
        .clone();
    assert_eq!(user, User::new("a", "a@b.com"));
}
