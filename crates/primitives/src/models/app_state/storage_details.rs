use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;
use std::str::FromStr;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct StorageInfo {
    pub backend: StorageBackend,
    pub database_url: Option<SecretString>,
}

impl StorageInfo {
    pub fn from_env() -> Result<Self, Report> {
        let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "postgres".into());

        Ok(Self {
            backend: StorageBackend::from_str(backend.trim().to_lowercase().as_str())
                .map_err(|_| eyre!("Unsupported STORAGE_BACKEND: {}", backend))?,

            database_url: env::var("DATABASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(SecretString::from),
        })
    }
}
