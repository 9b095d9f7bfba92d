//! Catalog client errors.

use etalase_data::FetchError;
use thiserror::Error;

/// Errors that can occur fetching the product catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport-level failure, including non-2xx responses.
    #[error("transport error: {0}")]
    Transport(#[from] FetchError),

    /// The catalog answered with a body we could not decode.
    #[error("malformed catalog response: {0}")]
    Malformed(String),

    /// A required configuration value is missing from the environment.
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),
}
