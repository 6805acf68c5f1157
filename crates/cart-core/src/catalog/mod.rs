//! Catalog types.
//!
//! The catalog itself (fetching, caching) lives outside this crate; the cart
//! only consumes already-resolved product snapshots.

mod product;

pub use product::Product;
