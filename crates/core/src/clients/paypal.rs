use deli_primitives::error::ApiError;
use deli_primitives::models::app_state::paypal_details::PaypalInfo;
use deli_primitives::models::dtos::providers::paypal::{
    PayPalAmount, PayPalCaptureResponse, PayPalCreateOrderRequest, PayPalErrorResponse,
    PayPalOrderResp, PayPalPurchaseUnitRequest, PayPalRefundResponse, PayPalTokenResponse,
};
use reqwest::{Client, Response, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{error, warn};

const TOKEN_TIMEOUT: Duration = Duration::from_secs(5);

/// PayPal REST client. Every call performs its own client-credential
/// exchange; tokens are never cached.
#[derive(Clone)]
pub struct PayPalClient {
    http: Client,
    base_url: Url,
    client_id: Option<String>,
    secret: Option<SecretString>,
}

impl PayPalClient {
    pub fn new(http: Client, details: &PaypalInfo) -> Result<Self, ApiError> {
        let base_url = Url::parse(&details.paypal_api_url)
            .map_err(|_| ApiError::Configuration("Invalid PayPal base URL".into()))?;

        Ok(Self {
            http,
            base_url,
            client_id: details.paypal_client_id.clone(),
            secret: details.paypal_secret.clone(),
        })
    }

    async fn access_token(&self) -> Result<String, ApiError> {
        let (Some(client_id), Some(secret)) = (&self.client_id, &self.secret) else {
            return Err(ApiError::Configuration(
                "PAYPAL_CLIENT_ID and PAYPAL_SECRET must be set".into(),
            ));
        };

        let resp = self
            .http
            .post(self.endpoint(&["v1", "oauth2", "token"])?)
            .basic_auth(client_id, Some(secret.expose_secret()))
            .form(&[("grant_type", "client_credentials")])
            .timeout(TOKEN_TIMEOUT)
            .send()
            .await
            .map_err(|e| ApiError::Gateway(format!("PayPal auth request failed: {}", e)))?;

        let token: PayPalTokenResponse = Self::read_json(resp, "authenticate").await?;

        Ok(token.access_token)
    }

    /// Creates a `CAPTURE` intent tagged with `item_id` as correlation token.
    pub async fn create_order(
        &self,
        item_id: &str,
        description: String,
        amount: PayPalAmount,
    ) -> Result<PayPalOrderResp, ApiError> {
        let token = self.access_token().await?;

        let payload = PayPalCreateOrderRequest {
            intent: "CAPTURE",
            purchase_units: vec![PayPalPurchaseUnitRequest {
                reference_id: item_id,
                custom_id: item_id,
                description,
                amount,
            }],
        };

        let resp = self
            .http
            .post(self.endpoint(&["v2", "checkout", "orders"])?)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::Gateway(format!("PayPal create order request failed: {}", e)))?;

        Self::read_json(resp, "create_order").await
    }

    pub async fn capture_order(&self, order_id: &str) -> Result<PayPalCaptureResponse, ApiError> {
        let token = self.access_token().await?;

        let resp = self
            .http
            .post(self.endpoint(&["v2", "checkout", "orders", order_id, "capture"])?)
            .bearer_auth(token)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| ApiError::Gateway(format!("PayPal capture request failed: {}", e)))?;

        Self::read_json(resp, "capture_order").await
    }

    /// Full refund of a previously completed capture.
    pub async fn refund_capture(&self, capture_id: &str) -> Result<PayPalRefundResponse, ApiError> {
        let token = self.access_token().await?;

        let resp = self
            .http
            .post(self.endpoint(&["v2", "payments", "captures", capture_id, "refund"])?)
            .bearer_auth(token)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| ApiError::Gateway(format!("PayPal refund request failed: {}", e)))?;

        Self::read_json(resp, "refund_capture").await
    }

    async fn read_json<T: DeserializeOwned>(resp: Response, operation: &str) -> Result<T, ApiError> {
        let status = resp.status();

        let body_text = resp
            .text()
            .await
            .map_err(|e| ApiError::Gateway(format!("Unreadable PayPal {} response: {}", operation, e)))?;

        if !status.is_success() {
            let reason = serde_json::from_str::<PayPalErrorResponse>(&body_text)
                .map(|e| e.reason())
                .unwrap_or_else(|_| body_text.chars().take(200).collect());

            warn!(
                http_status = status.as_u16(),
                operation,
                reason = %reason,
                "PayPal rejected request"
            );
            return Err(ApiError::Gateway(format!(
                "PayPal {} failed ({}): {}",
                operation, status, reason
            )));
        }

        serde_json::from_str(&body_text).map_err(|e| {
            error!(
                error = %e,
                operation,
                response = %body_text.chars().take(200).collect::<String>(),
                "Invalid JSON from PayPal"
            );
            ApiError::Gateway(format!("Invalid PayPal {} response", operation))
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Configuration("Invalid PayPal URL path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
