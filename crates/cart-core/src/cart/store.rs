//! Cart store and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One product-plus-quantity record in the cart.
///
/// The product is a snapshot captured when the item was first added; repeated
/// adds keep the original snapshot rather than refreshing price or stock from
/// a newer one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Product snapshot from the catalog.
    pub product: Product,
    /// Shopper-chosen number of units. At least 1 while the item exists;
    /// reaching 0 removes the line item entirely.
    pub cart_quantity: u32,
}

impl CartLineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            cart_quantity: 1,
        }
    }

    /// Total for this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.product.price * i64::from(self.cart_quantity)
    }
}

/// The cart: an ordered collection of line items, at most one per product id.
///
/// Every mutation is infallible and synchronous. Unknown product ids are
/// handled as no-ops rather than errors, so UI code can call these
/// operations defensively. The one exception to the forgiving policy lives
/// in the scope layer, which fails loudly on access outside a mounted scope.
///
/// Stock limits are deliberately not enforced here: `can_add_to_cart` is the
/// policy guard the UI consults before mutating, and a caller that bypasses
/// it can push a quantity past `available_stock`. Keeping mutation and
/// policy separate keeps the store simple and leaves the UI in charge of
/// when to disable controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartStore {
    items: Vec<CartLineItem>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Line items in insertion order, for rendering.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Add one unit of a product.
    ///
    /// If a line item for the product already exists its quantity goes up by
    /// one and the stored snapshot is kept; otherwise a new line item is
    /// appended at the end with quantity 1.
    ///
    /// The cart operates in a single currency. A product priced in a
    /// different currency than the cart's is bad data and is dropped as a
    /// no-op, like any other invalid input.
    pub fn add_to_cart(&mut self, product: Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.cart_quantity = existing.cart_quantity.saturating_add(1);
            debug!(product_id = %product.id, quantity = existing.cart_quantity, "cart quantity increased");
            return;
        }
        if self.currency_differs(&product) {
            debug!(product_id = %product.id, "cart item rejected: currency differs from cart");
            return;
        }
        debug!(product_id = %product.id, "cart item added");
        self.items.push(CartLineItem::new(product));
    }

    /// Remove a line item. No-op if the product is not in the cart.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        if self.items.len() < len_before {
            debug!(product_id = %product_id, "cart item removed");
        }
    }

    /// Increase a line item's quantity by one. No-op if the product is not
    /// in the cart. No upper bound is applied; see `can_add_to_cart`.
    pub fn increment_quantity(&mut self, product_id: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.cart_quantity = item.cart_quantity.saturating_add(1);
            debug!(product_id = %product_id, quantity = item.cart_quantity, "cart quantity increased");
        }
    }

    /// Decrease a line item's quantity by one, removing the line item when
    /// it reaches zero. No-op if the product is not in the cart.
    pub fn decrement_quantity(&mut self, product_id: ProductId) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.cart_quantity = item.cart_quantity.saturating_sub(1);
            debug!(product_id = %product_id, quantity = item.cart_quantity, "cart quantity decreased");
        }
        self.items.retain(|i| i.cart_quantity > 0);
    }

    /// Empty the cart. Idempotent.
    pub fn clear_cart(&mut self) {
        if !self.items.is_empty() {
            debug!(items = self.items.len(), "cart cleared");
        }
        self.items.clear();
    }

    /// Sum of line totals. Zero for an empty cart. Never panics: line items
    /// share one currency (`add_to_cart` rejects mismatches), and a foreign
    /// line smuggled into a hand-built state is excluded from the sum.
    pub fn cart_total(&self) -> Money {
        let currency = self.currency();
        self.items.iter().fold(Money::zero(currency), |acc, item| {
            acc.try_add(&item.line_total()).unwrap_or(acc)
        })
    }

    /// Total units across all line items, not distinct products.
    pub fn cart_count(&self) -> u32 {
        self.items.iter().map(|i| i.cart_quantity).sum()
    }

    /// Quantity held for a product, or 0 if it is not in the cart.
    pub fn item_quantity(&self, product_id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|i| i.product.id == product_id)
            .map(|i| i.cart_quantity)
            .unwrap_or(0)
    }

    /// Policy guard consulted by the UI before adding or incrementing.
    ///
    /// Returns false when the product is out of stock, or when the cart
    /// already holds as many units as the caller-supplied snapshot says are
    /// available. The stock field read here is the caller's, which may be
    /// fresher than the snapshot stored on the line item.
    pub fn can_add_to_cart(&self, product: &Product) -> bool {
        if product.available_stock == 0 || self.currency_differs(product) {
            return false;
        }
        self.item_quantity(product.id) < product.available_stock
    }

    /// The cart operates in a single currency, taken from the first line
    /// item. Empty carts fall back to the default currency.
    fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.product.price.currency)
            .unwrap_or_default()
    }

    /// A product priced in another currency than the cart's. Always false
    /// for an empty cart, which accepts any currency.
    fn currency_differs(&self, product: &Product) -> bool {
        self.items
            .first()
            .is_some_and(|i| i.product.price.currency != product.price.currency)
    }
}
