//! Catalog client configuration.

use crate::CatalogError;
use etalase_commerce::Currency;

/// Endpoint and pricing configuration for the remote catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the JSON database holding the catalog.
    pub db_url: String,
    /// Currency catalog prices are quoted in.
    pub currency: Currency,
}

impl CatalogConfig {
    /// Create a configuration pricing in the default currency.
    pub fn new(db_url: impl Into<String>) -> Self {
        Self {
            db_url: db_url.into(),
            currency: Currency::default(),
        }
    }

    /// Set the currency catalog prices are quoted in.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Read the configuration from the environment.
    ///
    /// Expects `ETALASE_DB_URL`; `ETALASE_CURRENCY` optionally overrides
    /// the default currency with an ISO code.
    pub fn from_env() -> Result<Self, CatalogError> {
        let db_url = std::env::var("ETALASE_DB_URL")
            .map_err(|_| CatalogError::MissingConfig("ETALASE_DB_URL"))?;
        let currency = match std::env::var("ETALASE_CURRENCY") {
            Ok(code) => Currency::from_code(&code)
                .ok_or(CatalogError::MissingConfig("ETALASE_CURRENCY"))?,
            Err(_) => Currency::default(),
        };
        Ok(Self { db_url, currency })
    }
}
