//! Commands accepted by the machine and their structured outcomes.

use crate::core::{Denomination, Product};
use serde::{Deserialize, Serialize};
use std::fmt;

/// External commands a customer can issue.
///
/// Every command is legal in exactly one state; anywhere else it is
/// rejected without effect.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Choose a product to buy.
    Select(Product),
    /// Insert a coin or note toward the selected product.
    Insert(Denomination),
    /// Collect the dispensed product.
    Dispense,
    /// Collect the change and close the transaction.
    ReturnChange,
}

impl Command {
    /// The command's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::Insert(_) => "insert",
            Self::Dispense => "dispense",
            Self::ReturnChange => "return-change",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Successful result of applying a command.
///
/// Each variant is one observable machine behavior; rejections are
/// reported through [`CommandError`](crate::machine::CommandError) instead.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// A product was selected and a transaction opened.
    ProductSelected {
        product: Product,
    },
    /// Payment was accepted but does not yet cover the price.
    PaymentAccepted {
        inserted: u32,
        total: u32,
        remaining: u32,
    },
    /// Payment now covers the price; the product can be dispensed.
    PaymentComplete {
        inserted: u32,
        total: u32,
    },
    /// The product was dispensed.
    ProductDispensed {
        product: Product,
    },
    /// Change (possibly zero) was returned and the transaction closed.
    ChangeReturned {
        amount: u32,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProductSelected { product } => {
                write!(f, "selected {}", product.name())
            }
            Self::PaymentAccepted {
                total, remaining, ..
            } => {
                write!(f, "payment accepted, {total} paid, {remaining} to go")
            }
            Self::PaymentComplete { total, .. } => {
                write!(f, "payment complete at {total}, ready to dispense")
            }
            Self::ProductDispensed { product } => {
                write!(f, "dispensed {}", product.name())
            }
            Self::ChangeReturned { amount: 0 } => f.write_str("no change due"),
            Self::ChangeReturned { amount } => write!(f, "returned change of {amount}"),
        }
    }
}
