use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use papermarket::{AppState, config};
use tower::ServiceExt;

fn test_state() -> AppState {
    AppState {
        db: None,
        settings: config::Settings {
            mongodb_uri: None,
            mongodb_db: None,
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        order_locks: Default::default(),
    }
}

async fn response_json(res: axum::response::Response) -> serde_json::Value {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<axum::body::Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<axum::body::Body> {
    Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap()
}

#[tokio::test]
async fn quote_is_deterministic_and_uppercased() {
    let app = papermarket::routes::app(test_state());

    let res = app.clone().oneshot(get("/api/trading/quote?symbol=aaa")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let first = response_json(res).await;
    assert_eq!(first["symbol"], "AAA");
    assert_eq!(first["price"], 215.65);

    let res = app.oneshot(get("/api/trading/quote?symbol=AAA")).await.unwrap();
    let second = response_json(res).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn quote_without_symbol_is_a_client_error() {
    let app = papermarket::routes::app(test_state());

    let res = app.oneshot(get("/api/trading/quote")).await.unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn create_account_requires_a_user_id() {
    let app = papermarket::routes::app(test_state());

    let req = post_json("/api/trading/account", serde_json::json!({ "user_id": "  " }));

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_json(res).await;
    assert_eq!(body["code"], "VALIDATION");
    assert!(body["error"].as_str().unwrap().contains("user_id"));
}

#[tokio::test]
async fn create_account_without_a_store_is_a_server_error() {
    let app = papermarket::routes::app(test_state());

    let req = post_json("/api/trading/account", serde_json::json!({ "user_id": "u-1" }));

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(res).await;
    assert_eq!(body["code"], "DATABASE");
}

#[tokio::test]
async fn order_with_an_unknown_side_is_refused_before_any_lookup() {
    // db is None: reaching the store would fail with DATABASE, so a
    // VALIDATION response proves the order never got that far.
    let app = papermarket::routes::app(test_state());

    let req = post_json(
        "/api/trading/order",
        serde_json::json!({ "user_id": "u-1", "symbol": "AAA", "side": "hold", "quantity": 1.0 }),
    );

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_json(res).await;
    assert_eq!(body["code"], "VALIDATION");
    assert!(body["error"].as_str().unwrap().contains("side"));
}

#[tokio::test]
async fn order_with_zero_quantity_is_refused() {
    let app = papermarket::routes::app(test_state());

    let req = post_json(
        "/api/trading/order",
        serde_json::json!({ "user_id": "u-1", "symbol": "AAA", "side": "buy", "quantity": 0.0 }),
    );

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_json(res).await;
    assert_eq!(body["code"], "VALIDATION");
    assert!(body["error"].as_str().unwrap().contains("quantity"));
}

#[tokio::test]
async fn order_with_negative_quantity_is_refused() {
    let app = papermarket::routes::app(test_state());

    let req = post_json(
        "/api/trading/order",
        serde_json::json!({ "user_id": "u-1", "symbol": "AAA", "side": "sell", "quantity": -3.0 }),
    );

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_json(res).await;
    assert_eq!(body["code"], "VALIDATION");
}

#[tokio::test]
async fn order_with_a_blank_user_is_refused() {
    let app = papermarket::routes::app(test_state());

    let req = post_json(
        "/api/trading/order",
        serde_json::json!({ "user_id": "", "symbol": "AAA", "side": "buy", "quantity": 1.0 }),
    );

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = response_json(res).await;
    assert_eq!(body["code"], "VALIDATION");
    assert!(body["error"].as_str().unwrap().contains("user_id"));
}

#[tokio::test]
async fn valid_order_without_a_store_is_a_server_error() {
    let app = papermarket::routes::app(test_state());

    let req = post_json(
        "/api/trading/order",
        serde_json::json!({ "user_id": "u-1", "symbol": "AAA", "side": "buy", "quantity": 1.0 }),
    );

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(res).await;
    assert_eq!(body["code"], "DATABASE");
}

#[tokio::test]
async fn portfolio_without_a_store_is_a_server_error() {
    let app = papermarket::routes::app(test_state());

    let res = app
        .oneshot(get("/api/trading/portfolio?user_id=u-1"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(res).await;
    assert_eq!(body["code"], "DATABASE");
}

#[tokio::test]
async fn portfolio_without_a_user_id_is_a_client_error() {
    let app = papermarket::routes::app(test_state());

    let res = app.oneshot(get("/api/trading/portfolio")).await.unwrap();
    assert!(res.status().is_client_error());
}
