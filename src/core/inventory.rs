//! Product inventory bookkeeping.

use super::product::Product;
use std::collections::HashMap;

/// Mapping of products to the number of units on hand.
///
/// A product absent from the map reads as count 0. Counts are unsigned,
/// so a negative count is unrepresentable; the machine only decrements
/// after an availability check.
///
/// Mutation is the operator's administrative interface and is legal at any
/// point, independent of the transaction flow.
///
/// # Example
///
/// ```rust
/// use vendo::core::{Inventory, Product};
///
/// let mut inventory = Inventory::new();
/// let coke = Product::new("Coke", 18);
///
/// inventory.set_quantity(coke.clone(), 5);
/// assert!(inventory.is_available(&coke));
/// assert_eq!(inventory.quantity(&coke), 5);
///
/// inventory.remove(&coke);
/// assert_eq!(inventory.quantity(&coke), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    products: HashMap<Product, u32>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// True iff the product is known and at least one unit remains.
    pub fn is_available(&self, product: &Product) -> bool {
        self.quantity(product) > 0
    }

    /// Units on hand; 0 for an unknown product.
    pub fn quantity(&self, product: &Product) -> u32 {
        self.products.get(product).copied().unwrap_or(0)
    }

    /// Register a product or overwrite its count.
    pub fn set_quantity(&mut self, product: Product, qty: u32) {
        self.products.insert(product, qty);
    }

    /// Add units to a product's count, registering it if unknown.
    pub fn add(&mut self, product: Product, qty: u32) {
        *self.products.entry(product).or_insert(0) += qty;
    }

    /// Drop a product from the catalog entirely.
    pub fn remove(&mut self, product: &Product) {
        self.products.remove(product);
    }

    /// Number of distinct products listed.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when nothing is listed.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate listed products and their counts.
    pub fn products(&self) -> impl Iterator<Item = (&Product, u32)> {
        self.products.iter().map(|(product, qty)| (product, *qty))
    }
}
