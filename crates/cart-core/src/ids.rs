//! Newtype IDs for type-safe identifiers.
//!
//! Catalog ids are numeric, but a bare integer is easy to confuse with a
//! quantity or a count. The newtype keeps product ids distinct from every
//! other number flowing through the cart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a product in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an ID from a raw catalog id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_id_from_u64() {
        let id: ProductId = 7.into();
        assert_eq!(id, ProductId::new(7));
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new(123);
        assert_eq!(format!("{}", id), "123");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new(1), ProductId::new(1));
        assert_ne!(ProductId::new(1), ProductId::new(2));
    }
}
