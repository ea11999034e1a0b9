//! Catalog products.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A purchasable catalog entry.
///
/// Products are immutable once created: the name identifies the product
/// and the price is fixed at creation. `Eq + Hash` let a product key the
/// inventory map directly.
///
/// # Example
///
/// ```rust
/// use vendo::core::Product;
///
/// let coke = Product::new("Coke", 18);
/// assert_eq!(coke.name(), "Coke");
/// assert_eq!(coke.price(), 18);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: u32,
}

impl Product {
    /// Create a product with its display name and unit price.
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// The product's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The product's unit price.
    pub fn price(&self) -> u32 {
        self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}
