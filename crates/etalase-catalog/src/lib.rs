//! Client for the remote product catalog the Etalase storefront renders.
//!
//! The catalog lives in a JSON database: `products.json` is a map keyed
//! by product id, and absent paths answer `null`. This crate turns those
//! payloads into [`etalase_commerce::Product`] records, reporting an
//! empty list when the catalog has no products.

mod client;
mod config;
mod error;

pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use error::CatalogError;
