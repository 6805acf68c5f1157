//! Shopping cart module.
//!
//! Contains the cart store, its line items, and the scope layer that exposes
//! the store to a UI subtree.

mod scope;
mod store;

pub use scope::{try_use_cart, use_cart, CartHandle, CartScope};
pub use store::{CartLineItem, CartStore};
