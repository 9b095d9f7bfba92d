//! The session cart store.

use crate::cart::{CartKey, LineItem, ProductSelection};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::Serialize;

/// In-memory cart state for one storefront session.
///
/// Line items are kept in insertion order and deduplicated by
/// [`CartKey`]: adding an already-present (product, size) pair merges
/// into the existing line instead of appending a second one.
///
/// The store is an explicitly-owned value, not a global. Create one per
/// session and hand `&mut` access to whichever event handler needs it;
/// ownership makes the single-writer assumption compiler-enforced, and
/// callers that do share it across tasks wrap it in their own lock.
///
/// Mutations on absent keys are deliberately silent no-ops, because UI
/// code depends on that (a second decrease past zero must not fail).
/// `try_*` variants report [`CommerceError::ItemNotInCart`] for callers
/// that want the signal.
///
/// The store serializes for snapshot output (debugging, page rendering)
/// but does not deserialize: cart state lives only for the session, and
/// a cart built from arbitrary input could carry duplicate keys or zero
/// quantities. The operations are the only construction path, so the
/// invariants cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartStore {
    items: Vec<LineItem>,
    currency: Currency,
}

/// Derived cart totals. Computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub total_items: u64,
    /// Sum of `quantity * unit_price` across all lines.
    pub total_price: Money,
}

impl CartStore {
    /// Create an empty cart pricing in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// The currency empty-cart totals are reported in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add a selection to the cart, merging by key.
    ///
    /// If a line with the same (product, size) already exists its quantity
    /// goes up by 1 and its price, title, and image stay as they were at
    /// first add. Otherwise a new line with quantity 1 is appended.
    ///
    /// Returns the key the selection landed under.
    pub fn add_item(&mut self, selection: ProductSelection) -> CartKey {
        let key = selection.cart_key();
        if let Some(existing) = self.items.iter_mut().find(|i| i.key == key) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.items.push(LineItem::from_selection(selection));
        }
        key
    }

    /// Increment the quantity of the line with this key.
    ///
    /// No-op if the key is not in the cart.
    pub fn increase_qty(&mut self, key: &CartKey) {
        if let Some(item) = self.items.iter_mut().find(|i| &i.key == key) {
            item.quantity = item.quantity.saturating_add(1);
        }
    }

    /// Strict variant of [`increase_qty`](Self::increase_qty).
    pub fn try_increase_qty(&mut self, key: &CartKey) -> Result<(), CommerceError> {
        match self.items.iter_mut().find(|i| &i.key == key) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                Ok(())
            }
            None => Err(CommerceError::ItemNotInCart(key.to_string())),
        }
    }

    /// Decrement the quantity of the line with this key.
    ///
    /// A line whose quantity reaches 0 is removed from the cart. No-op if
    /// the key is not in the cart, so decreasing past zero is safe.
    pub fn decrease_qty(&mut self, key: &CartKey) {
        let Some(index) = self.items.iter().position(|i| &i.key == key) else {
            return;
        };
        let item = &mut self.items[index];
        item.quantity -= 1;
        if item.quantity == 0 {
            self.items.remove(index);
        }
    }

    /// Strict variant of [`decrease_qty`](Self::decrease_qty).
    pub fn try_decrease_qty(&mut self, key: &CartKey) -> Result<(), CommerceError> {
        if self.contains(key) {
            self.decrease_qty(key);
            Ok(())
        } else {
            Err(CommerceError::ItemNotInCart(key.to_string()))
        }
    }

    /// Remove the line with this key, whatever its quantity.
    ///
    /// Returns whether anything was removed; absent keys are a no-op.
    pub fn remove_item(&mut self, key: &CartKey) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.key != key);
        self.items.len() < len_before
    }

    /// Strict variant of [`remove_item`](Self::remove_item).
    pub fn try_remove_item(&mut self, key: &CartKey) -> Result<(), CommerceError> {
        if self.remove_item(key) {
            Ok(())
        } else {
            Err(CommerceError::ItemNotInCart(key.to_string()))
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// All lines, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line by key.
    pub fn get(&self, key: &CartKey) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.key == key)
    }

    /// Check whether a key is in the cart.
    pub fn contains(&self, key: &CartKey) -> bool {
        self.items.iter().any(|i| &i.key == key)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct (product, size) lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Total item count: the sum of all line quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Total price: the sum of `quantity * unit_price` across all lines.
    ///
    /// Zero in the cart's currency when empty. Errors if a line's price is
    /// in a different currency or the sum overflows.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        let mut total = Money::zero(self.currency);
        for item in &self.items {
            if item.unit_price.currency != self.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: item.unit_price.currency.code().to_string(),
                });
            }
            let line = item.line_total().ok_or(CommerceError::Overflow)?;
            total = total.try_add(&line).ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }

    /// Both derived totals in one pass.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        Ok(CartTotals {
            total_items: self.total_items(),
            total_price: self.total_price()?,
        })
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(id: &str, size: &str, price: i64) -> ProductSelection {
        ProductSelection::new(
            id,
            format!("Product {id}"),
            Money::new(price, Currency::IDR),
            format!("/img/{id}.jpg"),
            size,
        )
    }

    #[test]
    fn test_new_cart_is_empty_with_zero_totals() {
        let cart = CartStore::new(Currency::IDR);
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price().unwrap(), Money::zero(Currency::IDR));
    }

    #[test]
    fn test_add_item_appends_with_quantity_one() {
        let mut cart = CartStore::new(Currency::IDR);
        let key = cart.add_item(selection("p1", "M", 1000));

        assert_eq!(key, CartKey::new("p1", "M"));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(&key).unwrap().quantity, 1);
    }

    #[test]
    fn test_repeated_adds_merge_into_one_line() {
        let mut cart = CartStore::new(Currency::IDR);
        for _ in 0..5 {
            cart.add_item(selection("p1", "M", 1000));
        }

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(&CartKey::new("p1", "M")).unwrap().quantity, 5);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_readd_keeps_original_price_title_image() {
        let mut cart = CartStore::new(Currency::IDR);
        cart.add_item(selection("p1", "M", 1000));

        // Same key, different everything else: the existing line wins.
        let mut changed = selection("p1", "M", 9999);
        changed.title = "Renamed".to_string();
        changed.image = "/img/other.jpg".to_string();
        cart.add_item(changed);

        let item = cart.get(&CartKey::new("p1", "M")).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.unit_price, Money::new(1000, Currency::IDR));
        assert_eq!(item.title, "Product p1");
        assert_eq!(item.image, "/img/p1.jpg");
    }

    #[test]
    fn test_unseen_pair_adds_distinct_line() {
        let mut cart = CartStore::new(Currency::IDR);
        cart.add_item(selection("p1", "M", 1000));
        cart.add_item(selection("p1", "L", 1000));
        cart.add_item(selection("p2", "M", 2000));

        assert_eq!(cart.unique_item_count(), 3);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut cart = CartStore::new(Currency::IDR);
        cart.add_item(selection("p2", "M", 1000));
        cart.add_item(selection("p1", "L", 1000));
        cart.add_item(selection("p2", "M", 1000));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id().as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
    }

    #[test]
    fn test_increase_qty() {
        let mut cart = CartStore::new(Currency::IDR);
        let key = cart.add_item(selection("p1", "M", 1000));
        cart.increase_qty(&key);
        assert_eq!(cart.get(&key).unwrap().quantity, 2);
    }

    #[test]
    fn test_increase_qty_missing_key_is_noop() {
        let mut cart = CartStore::new(Currency::IDR);
        cart.add_item(selection("p1", "M", 1000));
        cart.increase_qty(&CartKey::new("nope", "M"));
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_decrease_qty_removes_at_zero_then_noops() {
        let mut cart = CartStore::new(Currency::IDR);
        let key = cart.add_item(selection("p1", "M", 1000));
        cart.increase_qty(&key);

        cart.decrease_qty(&key);
        assert_eq!(cart.get(&key).unwrap().quantity, 1);

        cart.decrease_qty(&key);
        assert!(!cart.contains(&key));
        assert!(cart.is_empty());

        // Past zero: silent no-op, must not panic.
        cart.decrease_qty(&key);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartStore::new(Currency::IDR);
        let key = cart.add_item(selection("p1", "M", 1000));
        cart.add_item(selection("p2", "M", 2000));

        assert!(cart.remove_item(&key));
        assert!(!cart.remove_item(&key));
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cart = CartStore::new(Currency::IDR);
        cart.add_item(selection("p1", "M", 1000));
        cart.add_item(selection("p2", "L", 2000));
        cart.increase_qty(&CartKey::new("p1", "M"));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price().unwrap(), Money::zero(Currency::IDR));
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_totals_track_quantities_and_prices() {
        let mut cart = CartStore::new(Currency::IDR);
        cart.add_item(selection("p1", "M", 1000));
        cart.add_item(selection("p1", "M", 1000));
        cart.add_item(selection("p2", "L", 2500));

        let totals = cart.totals().unwrap();
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.total_price, Money::new(4500, Currency::IDR));
    }

    // The worked scenario: two adds of (p1, M) at 10, then decrease twice.
    #[test]
    fn test_add_decrease_scenario() {
        let mut cart = CartStore::new(Currency::IDR);
        let key = cart.add_item(selection("p1", "M", 10));
        cart.add_item(selection("p1", "M", 10));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(&key).unwrap().quantity, 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().unwrap(), Money::new(20, Currency::IDR));

        cart.decrease_qty(&key);
        assert_eq!(cart.get(&key).unwrap().quantity, 1);
        assert_eq!(cart.total_price().unwrap(), Money::new(10, Currency::IDR));

        cart.decrease_qty(&key);
        assert!(!cart.contains(&key));
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price().unwrap(), Money::zero(Currency::IDR));
    }

    #[test]
    fn test_try_variants_report_missing_keys() {
        let mut cart = CartStore::new(Currency::IDR);
        let missing = CartKey::new("ghost", "XL");

        assert!(matches!(
            cart.try_increase_qty(&missing),
            Err(CommerceError::ItemNotInCart(_))
        ));
        assert!(matches!(
            cart.try_decrease_qty(&missing),
            Err(CommerceError::ItemNotInCart(_))
        ));
        assert!(matches!(
            cart.try_remove_item(&missing),
            Err(CommerceError::ItemNotInCart(_))
        ));

        let key = cart.add_item(selection("p1", "M", 1000));
        assert!(cart.try_increase_qty(&key).is_ok());
        assert_eq!(cart.get(&key).unwrap().quantity, 2);
    }

    #[test]
    fn test_total_price_rejects_mixed_currencies() {
        let mut cart = CartStore::new(Currency::IDR);
        cart.add_item(selection("p1", "M", 1000));
        cart.add_item(ProductSelection::new(
            "p2",
            "Imported",
            Money::new(500, Currency::USD),
            "/img/p2.jpg",
            "M",
        ));

        assert!(matches!(
            cart.total_price(),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_total_price_reports_overflow() {
        let mut cart = CartStore::new(Currency::IDR);
        cart.add_item(selection("p1", "M", i64::MAX));
        cart.increase_qty(&CartKey::new("p1", "M"));

        assert!(matches!(cart.total_price(), Err(CommerceError::Overflow)));
    }

    // Snapshots serialize; state is only ever built through the operations.
    #[test]
    fn test_cart_snapshot_serializes() {
        let mut cart = CartStore::new(Currency::IDR);
        cart.add_item(selection("p1", "M", 1000));
        cart.add_item(selection("p1", "M", 1000));

        let snapshot = serde_json::to_value(&cart).unwrap();
        assert_eq!(snapshot["currency"], "IDR");
        assert_eq!(snapshot["items"][0]["quantity"], 2);
        assert_eq!(snapshot["items"][0]["key"]["size"], "M");
    }

    // Unvalidated input contract: negative prices pass through untouched.
    #[test]
    fn test_negative_price_flows_through_totals() {
        let mut cart = CartStore::new(Currency::IDR);
        cart.add_item(selection("refund", "M", -500));
        cart.add_item(selection("p1", "M", 1000));

        assert_eq!(cart.total_price().unwrap(), Money::new(500, Currency::IDR));
    }
}
