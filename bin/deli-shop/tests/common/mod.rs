#![allow(dead_code)]

use axum::Router;
use deli_core::{AppState, Persistence};
use deli_primitives::models::app_state::app_config::AppConfig;
use deli_primitives::models::app_state::paypal_details::PaypalInfo;
use deli_primitives::models::app_state::storage_details::{StorageBackend, StorageInfo};
use secrecy::SecretString;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn test_config(paypal_api_url: &str) -> AppConfig {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(deli_shop::utility::logging::setup_logging);

    AppConfig {
        app_env: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        paypal_details: PaypalInfo {
            paypal_client_id: Some("test_paypal_client_id".to_string()),
            paypal_secret: Some(SecretString::from("test_paypal_secret")),
            paypal_api_url: paypal_api_url.to_string(),
            currency: "USD".to_string(),
        },
        storage_details: StorageInfo {
            backend: StorageBackend::Memory,
            database_url: None,
        },
    }
}

/// State backed by the in-process stores, talking to PayPal at `paypal_api_url`.
pub fn create_test_app_state(paypal_api_url: &str) -> Arc<AppState> {
    AppState::new(test_config(paypal_api_url), Persistence::Memory)
        .expect("Failed to build test AppState")
}

/// State as it looks after the database could not be reached at startup.
pub fn create_unpersisted_app_state(paypal_api_url: &str) -> Arc<AppState> {
    AppState::new(test_config(paypal_api_url), Persistence::Unavailable)
        .expect("Failed to build test AppState")
}

pub fn create_test_app(state: Arc<AppState>) -> Router {
    deli_api::app::create_router(state)
}

pub fn capture_body(capture_id: &str, value: &str, given: &str, surname: &str) -> Value {
    json!({
        "id": "PAYPAL-ORDER-1",
        "status": "COMPLETED",
        "payer": {
            "name": { "given_name": given, "surname": surname },
            "email_address": "buyer@example.com"
        },
        "purchase_units": [{
            "reference_id": "3",
            "description": "Cold Brew Coffee: Slow-steeped cold brew served over ice",
            "payments": {
                "captures": [{
                    "id": capture_id,
                    "status": "COMPLETED",
                    "amount": { "currency_code": "USD", "value": value }
                }]
            }
        }]
    })
}

pub async fn mock_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ACCESS_TOKEN_XYZ",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;
}

pub async fn mock_create(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v2/checkout/orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "PAYPAL-ORDER-1",
            "status": "CREATED",
            "links": [
                { "href": "https://www.sandbox.paypal.com/checkoutnow?token=PAYPAL-ORDER-1", "rel": "approve", "method": "GET" }
            ]
        })))
        .mount(server)
        .await;
}

pub async fn mock_capture(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/v2/checkout/orders/[^/]+/capture$"))
        .respond_with(ResponseTemplate::new(201).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mock_refund(server: &MockServer, value: &str) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/v2/payments/captures/[^/]+/refund$"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "REFUND-1",
            "status": "COMPLETED",
            "amount": { "currency_code": "USD", "value": value }
        })))
        .mount(server)
        .await;
}
