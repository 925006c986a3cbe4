use crate::clients::PayPalClient;
use crate::persistence::Persistence;
use crate::repositories::{CatalogStore, OrderStore};
use eyre::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

pub use deli_primitives::models::app_state::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub paypal: PayPalClient,
    pub persistence: Persistence,
    pub catalog: Arc<dyn CatalogStore>,
    pub orders: Arc<dyn OrderStore>,
}

impl AppState {
    pub fn new(config: AppConfig, persistence: Persistence) -> Result<Arc<Self>> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let paypal = PayPalClient::new(http, &config.paypal_details)?;

        Ok(Arc::new(Self {
            paypal,
            catalog: persistence.catalog_store(),
            orders: persistence.order_store(),
            persistence,
            config,
        }))
    }
}
