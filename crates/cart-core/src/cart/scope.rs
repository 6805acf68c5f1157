//! Scope-bound access to the cart store.
//!
//! The cart lives for the lifetime of a UI scope: mounted empty when the
//! scope starts, discarded when it ends, never persisted. `CartScope` is the
//! explicit lifecycle object for that scope and `use_cart` hands consumers a
//! handle to the store it owns.
//!
//! Access outside a mounted scope is a programmer error, not bad data, and
//! fails loudly: `use_cart` panics with a descriptive message. This is the
//! one intentional hard failure in the crate, in contrast with the
//! forgiving no-op policy for unknown product ids inside a valid scope.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::cart::store::{CartLineItem, CartStore};
use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;

thread_local! {
    static ACTIVE_CART: RefCell<Option<Rc<RefCell<CartStore>>>> = const { RefCell::new(None) };
}

/// Owns the cart store for the duration of a UI scope.
///
/// Dropping the scope tears the store down; handles obtained while it was
/// mounted keep their clone of the state alive but `use_cart` starts
/// failing again.
#[derive(Debug)]
pub struct CartScope {
    store: Rc<RefCell<CartStore>>,
}

impl CartScope {
    /// Mount a fresh empty cart for this scope.
    ///
    /// # Panics
    /// Panics if a scope is already mounted on this thread. Use `try_mount`
    /// for fallible mounting.
    pub fn mount() -> Self {
        match Self::try_mount() {
            Ok(scope) => scope,
            Err(err) => panic!("{}", err),
        }
    }

    /// Try to mount a fresh empty cart for this scope.
    pub fn try_mount() -> Result<Self, CartError> {
        ACTIVE_CART.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.is_some() {
                return Err(CartError::ScopeAlreadyMounted);
            }
            let store = Rc::new(RefCell::new(CartStore::new()));
            *slot = Some(Rc::clone(&store));
            debug!("cart scope mounted");
            Ok(Self { store })
        })
    }

    /// Get a handle to the store this scope owns.
    pub fn handle(&self) -> CartHandle {
        CartHandle {
            store: Rc::clone(&self.store),
        }
    }
}

impl Drop for CartScope {
    fn drop(&mut self) {
        ACTIVE_CART.with(|slot| {
            *slot.borrow_mut() = None;
        });
        debug!("cart scope unmounted");
    }
}

/// Get a handle to the currently mounted cart.
///
/// # Panics
/// Panics if no `CartScope` is mounted on this thread. This is deliberate:
/// an unmounted access is an integration mistake that should surface
/// immediately during development, not default to an empty cart.
pub fn use_cart() -> CartHandle {
    match try_use_cart() {
        Ok(handle) => handle,
        Err(err) => panic!("{}", err),
    }
}

/// Get a handle to the currently mounted cart, or an error if none is
/// mounted.
pub fn try_use_cart() -> Result<CartHandle, CartError> {
    ACTIVE_CART.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|store| CartHandle {
                store: Rc::clone(store),
            })
            .ok_or(CartError::ScopeNotMounted)
    })
}

/// Cheaply cloneable handle to the scope's cart store.
///
/// All clones observe the same state. Consumers read snapshots and invoke
/// operations through the handle; the underlying collection is never handed
/// out mutably.
#[derive(Debug, Clone)]
pub struct CartHandle {
    store: Rc<RefCell<CartStore>>,
}

impl CartHandle {
    /// Snapshot of the line items in insertion order.
    pub fn items(&self) -> Vec<CartLineItem> {
        self.store.borrow().items().to_vec()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn unique_item_count(&self) -> usize {
        self.store.borrow().unique_item_count()
    }

    /// Add one unit of a product. See [`CartStore::add_to_cart`].
    pub fn add_to_cart(&self, product: Product) {
        self.store.borrow_mut().add_to_cart(product);
    }

    /// Remove a line item. No-op if the product is not in the cart.
    pub fn remove_from_cart(&self, product_id: ProductId) {
        self.store.borrow_mut().remove_from_cart(product_id);
    }

    /// Increase a line item's quantity by one. No-op on a missing id.
    pub fn increment_quantity(&self, product_id: ProductId) {
        self.store.borrow_mut().increment_quantity(product_id);
    }

    /// Decrease a line item's quantity by one, removing it at zero. No-op on
    /// a missing id.
    pub fn decrement_quantity(&self, product_id: ProductId) {
        self.store.borrow_mut().decrement_quantity(product_id);
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.store.borrow_mut().clear_cart();
    }

    /// Sum of line totals.
    pub fn cart_total(&self) -> Money {
        self.store.borrow().cart_total()
    }

    /// Total units across all line items.
    pub fn cart_count(&self) -> u32 {
        self.store.borrow().cart_count()
    }

    /// Quantity held for a product, or 0 if absent.
    pub fn item_quantity(&self, product_id: ProductId) -> u32 {
        self.store.borrow().item_quantity(product_id)
    }

    /// Policy guard for add/increment controls. See
    /// [`CartStore::can_add_to_cart`].
    pub fn can_add_to_cart(&self, product: &Product) -> bool {
        self.store.borrow().can_add_to_cart(product)
    }

    /// Run a closure against the store for compound reads.
    pub fn with<R>(&self, f: impl FnOnce(&CartStore) -> R) -> R {
        f(&self.store.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: u64, price: f64, stock: u32) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            Money::from_decimal(price, Currency::USD),
            stock,
        )
    }

    #[test]
    #[should_panic(expected = "outside a mounted CartScope")]
    fn test_use_cart_without_scope_panics() {
        let _ = use_cart();
    }

    #[test]
    fn test_try_use_cart_without_scope_errors() {
        assert_eq!(try_use_cart().unwrap_err(), CartError::ScopeNotMounted);
    }

    #[test]
    fn test_scope_starts_empty() {
        let _scope = CartScope::mount();
        let cart = use_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.cart_count(), 0);
        assert_eq!(cart.cart_total().display(), "$0.00");
    }

    #[test]
    fn test_handles_share_state() {
        let scope = CartScope::mount();
        let header = scope.handle();
        let card = use_cart();

        card.add_to_cart(product(1, 29.99, 10));
        card.add_to_cart(product(1, 29.99, 10));

        assert_eq!(header.cart_count(), 2);
        assert_eq!(header.items().len(), 1);
        assert_eq!(header.item_quantity(ProductId::new(1)), 2);
    }

    #[test]
    fn test_scope_drop_tears_down() {
        let scope = CartScope::mount();
        use_cart().add_to_cart(product(1, 29.99, 10));
        drop(scope);

        assert_eq!(try_use_cart().unwrap_err(), CartError::ScopeNotMounted);

        // A new scope starts from scratch.
        let _scope = CartScope::mount();
        assert!(use_cart().is_empty());
    }

    #[test]
    fn test_nested_mount_is_rejected() {
        let _scope = CartScope::mount();
        assert_eq!(
            CartScope::try_mount().unwrap_err(),
            CartError::ScopeAlreadyMounted
        );
    }

    #[test]
    fn test_full_shopper_flow() {
        let _scope = CartScope::mount();
        let cart = use_cart();

        let book = product(1, 29.99, 10).with_category("books");
        let mug = product(2, 19.50, 5).with_category("kitchen");

        cart.add_to_cart(book.clone());
        cart.add_to_cart(mug.clone());
        assert_eq!(cart.cart_total().amount_cents, 4949);

        cart.increment_quantity(book.id);
        assert_eq!(cart.cart_count(), 3);

        cart.decrement_quantity(book.id);
        cart.decrement_quantity(book.id);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_quantity(book.id), 0);

        assert!(cart.can_add_to_cart(&mug));
        cart.clear_cart();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_with_compound_read() {
        let _scope = CartScope::mount();
        let cart = use_cart();
        cart.add_to_cart(product(1, 10.00, 3));
        cart.add_to_cart(product(2, 5.00, 3));

        let summary = cart.with(|store| {
            (
                store.unique_item_count(),
                store.cart_count(),
                store.cart_total().display(),
            )
        });
        assert_eq!(summary, (2, 2, "$15.00".to_string()));
    }
}
