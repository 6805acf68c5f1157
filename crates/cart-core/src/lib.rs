//! Shopping cart state management for the storefront.
//!
//! This crate owns the cart: its line items, every mutation that changes
//! them, and the derived values the UI renders from. Everything else in the
//! storefront (catalog fetching, routing, presentation) is a collaborator
//! that either hands products in or reads snapshots out.
//!
//! # Example
//!
//! ```rust
//! use cart_core::prelude::*;
//!
//! let scope = CartScope::mount();
//! let cart = use_cart();
//!
//! let product = Product::new(1, "Rust Programming Book", Money::from_decimal(29.99, Currency::USD), 10);
//! cart.add_to_cart(product.clone());
//! cart.add_to_cart(product);
//!
//! assert_eq!(cart.cart_count(), 2);
//! assert_eq!(cart.cart_total().display(), "$59.98");
//! drop(scope);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CartError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::Product;

    // Cart
    pub use crate::cart::{
        try_use_cart, use_cart, CartHandle, CartLineItem, CartScope, CartStore,
    };
}
