use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct PaypalInfo {
    /// Both credentials are optional at startup; calls that need a token fail
    /// with a configuration error instead.
    pub paypal_client_id: Option<String>,
    pub paypal_secret: Option<SecretString>,
    pub paypal_api_url: String,
    pub currency: String,
}

impl PaypalInfo {
    pub fn from_env() -> Self {
        Self {
            paypal_client_id: env::var("PAYPAL_CLIENT_ID")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            paypal_secret: env::var("PAYPAL_SECRET")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(SecretString::from),

            paypal_api_url: env::var("PAYPAL_API_URL")
                .unwrap_or_else(|_| "https://api-m.sandbox.paypal.com".into()),

            currency: env::var("STORE_CURRENCY").unwrap_or_else(|_| "USD".into()),
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.paypal_client_id.is_some() && self.paypal_secret.is_some()
    }
}
