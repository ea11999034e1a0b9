//! Command handling for the machine.
//!
//! [`VendingMachine`] owns the domain data from [`crate::core`] and routes
//! every external command through a single dispatch over
//! (current state, command) pairs. A command either fully succeeds with an
//! [`Outcome`] or is rejected with a [`CommandError`] that leaves the
//! machine untouched.

mod builder;
mod command;
mod error;
mod transaction;
mod vending;

pub use builder::{BuildError, MachineBuilder};
pub use command::{Command, Outcome};
pub use error::CommandError;
pub use transaction::Transaction;
pub use vending::VendingMachine;
