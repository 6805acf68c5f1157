//! Product snapshot supplied by the catalog.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as supplied by the catalog collaborator.
///
/// `available_stock` is the seller-side count of purchasable units. It is a
/// different quantity than the shopper-chosen `cart_quantity` on a cart line
/// item, and the two must never share a field name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Full description.
    pub description: String,
    /// Category name.
    pub category: String,
    /// Image URL or path.
    pub image: String,
    /// Units available for purchase.
    pub available_stock: u32,
}

impl Product {
    /// Create a new product snapshot.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        available_stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: String::new(),
            category: String::new(),
            image: String::new(),
            available_stock,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check if any units are available for purchase.
    pub fn is_in_stock(&self) -> bool {
        self.available_stock > 0
    }
}
