//! Pure domain types for the machine.
//!
//! Everything here is side-effect-free data:
//! - Currency denominations and their worth
//! - Catalog products and inventory counts
//! - Machine states
//! - The transition log
//!
//! Command handling and state transitions live in [`crate::machine`].

mod history;
mod inventory;
mod money;
mod product;
mod state;

pub use history::{TransitionLog, TransitionRecord};
pub use inventory::Inventory;
pub use money::{Coin, Denomination, Note};
pub use product::Product;
pub use state::MachineState;
