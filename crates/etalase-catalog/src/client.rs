//! Catalog service client.

use crate::{CatalogConfig, CatalogError};
use etalase_commerce::catalog::Product;
use etalase_commerce::{Money, ProductId};
use etalase_data::{FetchClient, Transport};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Client for the remote product catalog.
pub struct CatalogClient {
    http: FetchClient,
    config: CatalogConfig,
}

/// A product as stored in the database, without its key.
///
/// Prices are stored as plain decimal numbers; the client converts them
/// to [`Money`] in the configured currency.
#[derive(Deserialize)]
struct RawProduct {
    name: String,
    price: f64,
    image: String,
    category: String,
}

impl RawProduct {
    fn into_product(self, id: ProductId, config: &CatalogConfig) -> Product {
        Product {
            id,
            name: self.name,
            price: Money::from_decimal(self.price, config.currency),
            image: self.image,
            category: self.category,
        }
    }
}

impl CatalogClient {
    /// Create a client from a configuration and a transport.
    pub fn new(config: CatalogConfig, transport: Arc<dyn Transport>) -> Self {
        let http = FetchClient::new(transport)
            .with_base_url(config.db_url.trim_end_matches('/').to_string());
        Self { http, config }
    }

    /// Fetch all products in the catalog.
    ///
    /// Returns an empty list when the catalog holds no products (the
    /// database answers `null`). The remote map is unordered, so records
    /// are returned sorted by product id for a deterministic listing.
    pub fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.http.get("/products.json").send()?.error_for_status()?;

        // BTreeMap gives the id-sorted order directly.
        let raw = response
            .json::<Option<BTreeMap<String, RawProduct>>>()
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;

        let products: Vec<Product> = raw
            .unwrap_or_default()
            .into_iter()
            .map(|(id, raw)| raw.into_product(ProductId::new(id), &self.config))
            .collect();
        tracing::debug!(count = products.len(), "fetched catalog");
        Ok(products)
    }

    /// Fetch a single product by id.
    ///
    /// Returns `Ok(None)` when the id is not in the catalog.
    pub fn fetch_product(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let response = self
            .http
            .get(format!("/products/{id}.json"))
            .send()?
            .error_for_status()?;

        let raw = response
            .json::<Option<RawProduct>>()
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Ok(raw.map(|r| r.into_product(id.clone(), &self.config)))
    }
}
