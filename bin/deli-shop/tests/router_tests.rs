use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::MockServer;

mod common;

#[tokio::test]
async fn test_products_and_health() {
    let mock_server = MockServer::start().await;
    let state = common::create_test_app_state(&mock_server.uri());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/products").await;
    response.assert_status_ok();
    let products: Value = response.json();
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 6);
    assert_eq!(products[2]["name"], "Cold Brew Coffee");
    assert_eq!(products[2]["price"], json!(3.75));

    let health = server.get("/api/health").await;
    health.assert_status_ok();
    let body: Value = health.json();
    assert_eq!(body["persistence"], "memory");
}

#[tokio::test]
async fn test_cold_brew_checkout_and_refund_over_http() {
    let mock_server = MockServer::start().await;
    common::mock_token(&mock_server).await;
    common::mock_create(&mock_server).await;
    common::mock_capture(&mock_server, common::capture_body("CAP-1", "3.75", "Ann", "Lee")).await;
    common::mock_refund(&mock_server, "3.75").await;

    let state = common::create_test_app_state(&mock_server.uri());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    // 1. create the intent
    let created = server
        .post("/api/create-order")
        .json(&json!({ "itemId": "3" }))
        .await;
    created.assert_status_ok();
    let created: Value = created.json();
    assert_eq!(created["id"], "PAYPAL-ORDER-1");
    assert_eq!(created["productName"], "Cold Brew Coffee");

    // 2. capture it
    let captured = server
        .post("/api/capture-order/PAYPAL-ORDER-1")
        .json(&json!({ "itemId": "3" }))
        .await;
    captured.assert_status_ok();
    let order: Value = captured.json();
    assert_eq!(order["status"], "captured");
    assert_eq!(order["amount"], json!(3.75));
    assert_eq!(
        order["orderCaption"],
        "Order paid by Ann Lee for Cold Brew Coffee $3.75"
    );
    let order_id = order["id"].as_str().unwrap().to_string();

    // 3. admin views
    let orders: Value = server.get("/api/orders").await.json();
    assert_eq!(orders.as_array().unwrap().len(), 1);

    let summary: Value = server.get("/api/orders/summary").await.json();
    assert_eq!(summary["totalOrders"], 1);
    assert_eq!(summary["totalRevenue"], json!(3.75));
    assert_eq!(summary["todayOrders"], 1);

    // 4. refund twice
    let refund = server
        .post(&format!("/api/refund-order/{}", order_id))
        .await;
    refund.assert_status_ok();
    let refund: Value = refund.json();
    assert_eq!(refund["success"], true);
    assert_eq!(refund["refundId"], "REFUND-1");
    assert_eq!(refund["refundAmount"], json!(3.75));

    let again = server
        .post(&format!("/api/refund-order/{}", order_id))
        .await;
    again.assert_status(axum::http::StatusCode::CONFLICT);
    let again: Value = again.json();
    assert_eq!(again["success"], false);
    assert!(again["error"].is_string());

    let summary: Value = server.get("/api/orders/summary").await.json();
    assert_eq!(summary["refundedOrders"], 1);
}

#[tokio::test]
async fn test_create_order_rejects_bad_input() {
    let mock_server = MockServer::start().await;
    let state = common::create_test_app_state(&mock_server.uri());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let blank = server
        .post("/api/create-order")
        .json(&json!({ "itemId": "  " }))
        .await;
    blank.assert_status_bad_request();

    let unknown = server
        .post("/api/create-order")
        .json(&json!({ "itemId": "99" }))
        .await;
    unknown.assert_status_not_found();
}

#[tokio::test]
async fn test_refund_unknown_order_is_404_with_failure_body() {
    let mock_server = MockServer::start().await;
    let state = common::create_test_app_state(&mock_server.uri());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post(&format!("/api/refund-order/{}", Uuid::new_v4()))
        .await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_reporting_without_database_returns_notice() {
    let mock_server = MockServer::start().await;
    common::mock_token(&mock_server).await;
    common::mock_capture(&mock_server, common::capture_body("CAP-1", "3.75", "Ann", "Lee")).await;

    let state = common::create_unpersisted_app_state(&mock_server.uri());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    // the buyer still gets their order back
    let captured = server
        .post("/api/capture-order/PAYPAL-ORDER-1")
        .json(&json!({ "itemId": "3" }))
        .await;
    captured.assert_status_ok();

    let orders = server.get("/api/orders").await;
    orders.assert_status_ok();
    let orders: Value = orders.json();
    assert!(orders["message"].is_string());

    let summary: Value = server.get("/api/orders/summary").await.json();
    assert!(summary["message"].is_string());

    let products: Value = server.get("/api/products").await.json();
    assert_eq!(products.as_array().unwrap().len(), 6);

    let health: Value = server.get("/api/health").await.json();
    assert_eq!(health["persistence"], "unavailable");
}
