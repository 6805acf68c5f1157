//! Cart error types.

use thiserror::Error;

/// Errors that can occur when wiring the cart into an application.
///
/// These cover integration mistakes only. Data-level misses (removing or
/// adjusting a product id that is not in the cart) are no-ops by contract,
/// so no variant exists for them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Cart accessed before a scope was mounted.
    #[error("cart accessed outside a mounted CartScope; call CartScope::mount() before use_cart()")]
    ScopeNotMounted,

    /// A second scope was mounted while one is still active.
    #[error("a CartScope is already mounted on this thread")]
    ScopeAlreadyMounted,
}
