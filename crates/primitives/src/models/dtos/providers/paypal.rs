use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PayPalTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPalAmount {
    pub currency_code: String,
    pub value: String,
}

// ── Order creation

#[derive(Debug, Serialize)]
pub struct PayPalCreateOrderRequest<'a> {
    pub intent: &'static str,
    pub purchase_units: Vec<PayPalPurchaseUnitRequest<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PayPalPurchaseUnitRequest<'a> {
    pub reference_id: &'a str,
    pub custom_id: &'a str,
    pub description: String,
    pub amount: PayPalAmount,
}

#[derive(Debug, Deserialize)]
pub struct PayPalLink {
    pub rel: String,
    pub href: String,
}

#[derive(Debug, Deserialize)]
pub struct PayPalOrderResp {
    pub id: String,
    #[serde(default)]
    pub links: Vec<PayPalLink>,
}

impl PayPalOrderResp {
    pub fn approve_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.rel == "approve" || l.rel == "payer-action")
            .map(|l| l.href.as_str())
    }
}

// ── Capture

#[derive(Debug, Deserialize)]
pub struct PayPalName {
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PayPalPayer {
    #[serde(default)]
    pub name: Option<PayPalName>,
    #[serde(default)]
    pub email_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Capture {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    pub amount: PayPalAmount,
}

#[derive(Debug, Default, Deserialize)]
pub struct Payments {
    #[serde(default)]
    pub captures: Vec<Capture>,
}

#[derive(Debug, Deserialize)]
pub struct PurchaseUnit {
    #[serde(default)]
    pub reference_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub payments: Payments,
}

#[derive(Debug, Deserialize)]
pub struct PayPalCaptureResponse {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payer: Option<PayPalPayer>,
    #[serde(default)]
    pub purchase_units: Vec<PurchaseUnit>,
}

// ── Refund

#[derive(Debug, Deserialize)]
pub struct PayPalRefundResponse {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub amount: Option<PayPalAmount>,
}

// ── Errors

#[derive(Debug, Deserialize)]
pub struct PayPalErrorDetail {
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PayPalErrorResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Vec<PayPalErrorDetail>,
}

impl PayPalErrorResponse {
    /// Most specific reason PayPal gave, falling back to the top-level message.
    pub fn reason(&self) -> String {
        self.details
            .iter()
            .find_map(|d| d.issue.clone().or_else(|| d.description.clone()))
            .or_else(|| self.message.clone())
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| "unknown PayPal error".into())
    }
}
