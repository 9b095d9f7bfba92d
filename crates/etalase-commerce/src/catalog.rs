//! Product catalog records.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as returned by the remote catalog.
///
/// This is the record the storefront pages render and the shape the cart
/// builds selections from: one id, a display name, a single price, an
/// image reference, and a category tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier (the catalog key).
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Product price.
    pub price: Money,
    /// URL of the product image.
    pub image: String,
    /// Category tag (e.g., "shirts").
    pub category: String,
}

impl Product {
    /// Create a new product record.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            category: category.into(),
        }
    }

    /// Check whether this product belongs to the given category.
    ///
    /// Category tags in the catalog are not normalized, so the comparison
    /// ignores ASCII case.
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let product = Product::new(
            "kaos-01",
            "Kaos Polos",
            Money::new(95_000, Currency::IDR),
            "/img/kaos-polos.jpg",
            "shirts",
        );
        assert_eq!(product.id.as_str(), "kaos-01");
        assert_eq!(product.price.amount_minor, 95_000);
    }

    #[test]
    fn test_category_check_ignores_case() {
        let product = Product::new(
            "kaos-01",
            "Kaos Polos",
            Money::new(95_000, Currency::IDR),
            "/img/kaos-polos.jpg",
            "Shirts",
        );
        assert!(product.is_in_category("shirts"));
        assert!(!product.is_in_category("pants"));
    }

    #[test]
    fn test_product_deserializes_from_catalog_json() {
        let json = r#"{
            "id": "kaos-01",
            "name": "Kaos Polos",
            "price": { "amount_minor": 95000, "currency": "IDR" },
            "image": "/img/kaos-polos.jpg",
            "category": "shirts"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Kaos Polos");
        assert_eq!(product.price, Money::new(95_000, Currency::IDR));
    }
}
