use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let mongodb_uri = std::env::var("MONGODB_URI").context("MONGODB_URI is not set")?;
        Ok(Self {
            mongodb_uri,
            database: std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "NotifyMeDB".into()),
            collection: std::env::var("MONGODB_COLLECTION").unwrap_or_else(|_| "notifies".into()),
        })
    }
}
