//! Builder for constructing stocked machines.

use crate::core::{Inventory, Product};
use crate::machine::vending::VendingMachine;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no products stocked. Call .product(product, qty) before .build()")]
    EmptyCatalog,

    #[error("product '{name}' has a zero price")]
    ZeroPrice { name: String },
}

/// Builder for a stocked [`VendingMachine`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use vendo::core::Product;
/// use vendo::machine::MachineBuilder;
///
/// let machine = MachineBuilder::new()
///     .product(Product::new("Coke", 18), 5)
///     .product(Product::new("Water", 10), 2)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.inventory().len(), 2);
/// ```
#[derive(Default)]
pub struct MachineBuilder {
    stock: Vec<(Product, u32)>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock a product at the given count.
    pub fn product(mut self, product: Product, qty: u32) -> Self {
        self.stock.push((product, qty));
        self
    }

    /// Build the machine, idle and ready for commands.
    /// Returns an error if nothing is stocked or a price is zero.
    pub fn build(self) -> Result<VendingMachine, BuildError> {
        if self.stock.is_empty() {
            return Err(BuildError::EmptyCatalog);
        }

        let mut inventory = Inventory::new();
        for (product, qty) in self.stock {
            if product.price() == 0 {
                return Err(BuildError::ZeroPrice {
                    name: product.name().to_string(),
                });
            }
            inventory.set_quantity(product, qty);
        }

        Ok(VendingMachine::with_inventory(inventory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MachineState;

    #[test]
    fn builder_rejects_empty_catalog() {
        let result = MachineBuilder::new().build();
        assert!(matches!(result, Err(BuildError::EmptyCatalog)));
    }

    #[test]
    fn builder_rejects_zero_price() {
        let result = MachineBuilder::new()
            .product(Product::new("Freebie", 0), 3)
            .build();

        assert!(matches!(result, Err(BuildError::ZeroPrice { name }) if name == "Freebie"));
    }

    #[test]
    fn built_machine_is_idle_and_stocked() {
        let coke = Product::new("Coke", 18);
        let machine = MachineBuilder::new()
            .product(coke.clone(), 5)
            .build()
            .unwrap();

        assert_eq!(machine.state(), MachineState::Idle);
        assert_eq!(machine.inventory().quantity(&coke), 5);
    }
}
