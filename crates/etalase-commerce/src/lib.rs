//! Storefront domain types and logic for Etalase.
//!
//! This crate provides the in-process state and value types the storefront
//! pages work with:
//!
//! - **Cart**: the session cart store with merge-by-key line items
//! - **Catalog**: the product record the remote catalog returns
//! - **Money**: minor-unit monetary values with checked arithmetic
//! - **Ids**: newtype identifiers for products and accounts
//!
//! # Example
//!
//! ```rust
//! use etalase_commerce::prelude::*;
//!
//! let mut cart = CartStore::new(Currency::IDR);
//!
//! let selection = ProductSelection::new(
//!     ProductId::new("p1"),
//!     "Linen Shirt",
//!     Money::new(250_000, Currency::IDR),
//!     "/img/linen-shirt.jpg",
//!     "M",
//! );
//!
//! let key = cart.add_item(selection.clone());
//! cart.add_item(selection);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().unwrap(), Money::new(500_000, Currency::IDR));
//!
//! cart.decrease_qty(&key);
//! cart.decrease_qty(&key);
//! assert!(cart.is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::{AccountId, ProductId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{AccountId, ProductId};
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{CartKey, CartStore, CartTotals, LineItem, ProductSelection};
    pub use crate::catalog::Product;
}
