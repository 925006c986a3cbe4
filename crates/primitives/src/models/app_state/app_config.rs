use crate::models::app_state::paypal_details::PaypalInfo;
use crate::models::app_state::storage_details::StorageInfo;
use eyre::{eyre, Report};
use std::env;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_env: String,

    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,

    pub paypal_details: PaypalInfo,

    pub storage_details: StorageInfo,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        let port = env::var("PORT").unwrap_or_else(|_| "8080".into());

        Ok(Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),

            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: port
                .trim()
                .parse()
                .map_err(|_| eyre!("Invalid PORT: {}", port))?,
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".into())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),

            paypal_details: PaypalInfo::from_env(),

            storage_details: StorageInfo::from_env()?,
        })
    }

    pub fn is_test(&self) -> bool {
        self.app_env == "test"
    }

    pub fn bind_address(&self) -> Result<SocketAddr, Report> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| eyre!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }
}
