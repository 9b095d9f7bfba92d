//! Cart line items and their composite key.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite key identifying a line item by product and size.
///
/// A structured pair rather than a delimited string, so a product id or
/// size containing the delimiter character can never collide with another
/// key. The `Display` form renders the familiar `id-size` string for logs
/// and UI anchors only; equality and lookup never go through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartKey {
    /// The product being purchased.
    pub product_id: ProductId,
    /// The chosen size.
    pub size: String,
}

impl CartKey {
    /// Create a key from a product id and size.
    pub fn new(product_id: impl Into<ProductId>, size: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.into(),
        }
    }
}

impl fmt::Display for CartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.product_id, self.size)
    }
}

/// What the shopper picked on a product page: a product plus a size.
///
/// This is the input to [`CartStore::add_item`](crate::cart::CartStore::add_item).
/// Fields are carried through unvalidated; the store takes whatever price,
/// title, and image it is handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSelection {
    /// Product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price at selection time.
    pub price: Money,
    /// URL of the product image.
    pub image: String,
    /// Chosen size.
    pub size: String,
}

impl ProductSelection {
    /// Create a selection from its parts.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image: image.into(),
            size: size.into(),
        }
    }

    /// Create a selection from a catalog product and a chosen size.
    pub fn from_product(product: &Product, size: impl Into<String>) -> Self {
        Self {
            id: product.id.clone(),
            title: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            size: size.into(),
        }
    }

    /// The cart key this selection merges under.
    pub fn cart_key(&self) -> CartKey {
        CartKey::new(self.id.clone(), self.size.clone())
    }
}

/// A line item in the cart: one distinct (product, size) selection.
///
/// Invariant: `quantity >= 1` for as long as the item exists; a quantity
/// that would reach zero removes the item from the store instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Composite key (product id + size).
    pub key: CartKey,
    /// Display title, frozen at first add.
    pub title: String,
    /// Unit price, frozen at first add.
    pub unit_price: Money,
    /// URL of the product image, frozen at first add.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1 from a selection.
    pub(crate) fn from_selection(selection: ProductSelection) -> Self {
        let key = selection.cart_key();
        Self {
            key,
            title: selection.title,
            unit_price: selection.price,
            image: selection.image,
            quantity: 1,
        }
    }

    /// The product this line refers to.
    pub fn product_id(&self) -> &ProductId {
        &self.key.product_id
    }

    /// The chosen size.
    pub fn size(&self) -> &str {
        &self.key.size
    }

    /// Line total (`unit_price * quantity`), `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.try_multiply(i64::from(self.quantity))
    }
}
