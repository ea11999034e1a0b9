//! In-flight transaction bookkeeping.

use crate::core::Product;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session data for one select -> pay -> dispense -> return-change cycle.
///
/// The payment total is only meaningful while a product is selected, and
/// the whole session resets as a unit when the transaction closes. Exactly
/// one transaction is in flight at a time; the machine serializes commands
/// rather than juggling sessions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    selected: Option<Product>,
    paid: u32,
    id: Option<Uuid>,
}

impl Transaction {
    /// The selected product, if a transaction is open.
    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// Accumulated payment for the open transaction.
    pub fn paid(&self) -> u32 {
        self.paid
    }

    /// Identifier of the open transaction.
    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    /// True while a product is selected.
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open a session for the product, starting from zero payment.
    pub(crate) fn begin(&mut self, product: Product) {
        self.selected = Some(product);
        self.paid = 0;
        self.id = Some(Uuid::new_v4());
    }

    /// Accumulate an inserted payment.
    pub(crate) fn add_payment(&mut self, amount: u32) {
        self.paid += amount;
    }

    /// Close the session, resetting every field together.
    pub(crate) fn clear(&mut self) {
        self.selected = None;
        self.paid = 0;
        self.id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transaction_is_closed() {
        let transaction = Transaction::default();
        assert!(!transaction.is_open());
        assert_eq!(transaction.paid(), 0);
        assert!(transaction.id().is_none());
    }

    #[test]
    fn begin_opens_with_zero_payment_and_fresh_id() {
        let mut transaction = Transaction::default();
        transaction.add_payment(7);

        transaction.begin(Product::new("Coke", 18));

        assert!(transaction.is_open());
        assert_eq!(transaction.paid(), 0);
        assert!(transaction.id().is_some());
    }

    #[test]
    fn payments_accumulate() {
        let mut transaction = Transaction::default();
        transaction.begin(Product::new("Pepsi", 15));

        transaction.add_payment(5);
        transaction.add_payment(2);

        assert_eq!(transaction.paid(), 7);
    }

    #[test]
    fn clear_resets_every_field_together() {
        let mut transaction = Transaction::default();
        transaction.begin(Product::new("Water", 10));
        transaction.add_payment(10);

        transaction.clear();

        assert_eq!(transaction, Transaction::default());
    }

    #[test]
    fn each_session_gets_a_distinct_id() {
        let mut transaction = Transaction::default();

        transaction.begin(Product::new("Coke", 18));
        let first = transaction.id();

        transaction.clear();
        transaction.begin(Product::new("Coke", 18));
        let second = transaction.id();

        assert_ne!(first, second);
    }
}
