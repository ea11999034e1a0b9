//! Vendo: a vending machine transaction engine.
//!
//! A single vending machine modeled as a finite state machine: product
//! selection, payment accumulation, dispensing, and change return, with
//! the legal order of operations enforced by the machine itself.
//!
//! # Core Concepts
//!
//! - **States**: `Idle -> AwaitingPayment -> Dispensing -> ReturningChange`,
//!   then back to `Idle`; the machine is cyclic.
//! - **Commands**: select, insert, dispense, return-change. Each either
//!   fully succeeds with an [`Outcome`] or is rejected with a
//!   [`CommandError`] that leaves the machine untouched; the machine never
//!   enters an error state.
//! - **Two-step pickup**: dispensing and change return are separate
//!   states, so the customer collects the product before the change tray
//!   releases. Exact payment still ends with a return-change command.
//!
//! # Example
//!
//! ```rust
//! use vendo::core::{Coin, Note, Product};
//! use vendo::machine::{MachineBuilder, Outcome};
//!
//! let coke = Product::new("Coke", 18);
//!
//! let mut machine = MachineBuilder::new()
//!     .product(coke.clone(), 5)
//!     .build()
//!     .unwrap();
//!
//! machine.select(coke).unwrap();
//! machine.insert_coin(Coin::Five).unwrap();
//! machine.insert_coin(Coin::Five).unwrap();
//! machine.insert_note(Note::Ten).unwrap();
//! machine.dispense().unwrap();
//!
//! assert_eq!(
//!     machine.return_change().unwrap(),
//!     Outcome::ChangeReturned { amount: 2 },
//! );
//! ```

pub mod core;
pub mod machine;

// Re-export commonly used types
pub use self::core::{
    Coin, Denomination, Inventory, MachineState, Note, Product, TransitionLog, TransitionRecord,
};
pub use self::machine::{
    BuildError, Command, CommandError, MachineBuilder, Outcome, Transaction, VendingMachine,
};
