//! HTTP client utilities for the Etalase service clients.
//!
//! Provides a small, ergonomic API for talking to the remote
//! backend-as-a-service endpoints with automatic JSON handling. The crate
//! carries no network code of its own: every request goes through the
//! [`Transport`] trait, which the host application implements over
//! whatever HTTP stack it runs on, and which tests replace with mocks.
//!
//! # Example
//!
//! ```rust,ignore
//! use etalase_data::{FetchClient, Transport};
//! use serde::Deserialize;
//! use std::sync::Arc;
//!
//! #[derive(Deserialize)]
//! struct ProductRecord {
//!     name: String,
//!     price: f64,
//! }
//!
//! let transport: Arc<dyn Transport> = Arc::new(MyHttpTransport::new());
//! let client = FetchClient::new(transport)
//!     .with_base_url("https://store-db.example.com");
//!
//! let record: ProductRecord = client
//!     .get("/products/kaos-01.json")
//!     .send()?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use request::{Method, Request, RequestBuilder};
pub use response::Response;

use std::collections::HashMap;
use std::sync::Arc;

/// Carries a finalized [`Request`] to the network and returns the response.
///
/// This is the only seam between the service clients and the outside
/// world. Implementations are expected to be cheap to clone behind an
/// `Arc` and safe to share across threads.
pub trait Transport: Send + Sync {
    /// Execute the request, blocking until the response is available.
    fn execute(&self, request: Request) -> Result<Response, FetchError>;
}

/// HTTP client for making outbound requests.
///
/// A lightweight wrapper over a shared [`Transport`] that prepends a base
/// URL and default headers, with a builder API for individual requests.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    /// Create a new HTTP client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Set a base URL that will be prepended to relative request URLs.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Put, url)
    }

    /// Create a PATCH request.
    pub fn patch(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Patch, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            transport: Arc::clone(&self.transport),
            builder,
        }
    }
}

/// A request builder bound to a client's transport.
pub struct ClientRequestBuilder {
    transport: Arc<dyn Transport>,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a query parameter to the request URL.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.builder = self.builder.body(body);
        self
    }

    /// Set the request body as a string.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.builder = self.builder.text(text);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request through the transport and return the response.
    pub fn send(self) -> Result<Response, FetchError> {
        let request = self.builder.build();
        tracing::debug!(method = request.method.as_str(), url = %request.url, "dispatching request");
        let response = self.transport.execute(request)?;
        tracing::debug!(status = response.status, "received response");
        Ok(response)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Method, Request, Response, Transport};
}
