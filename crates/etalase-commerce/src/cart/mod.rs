//! Shopping cart module.
//!
//! Contains the session cart store, its line items, and the composite key
//! that deduplicates them.

mod item;
mod store;

pub use item::{CartKey, LineItem, ProductSelection};
pub use store::{CartStore, CartTotals};
