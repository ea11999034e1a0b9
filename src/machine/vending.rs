//! The vending machine and its command dispatch.

use crate::core::{
    Coin, Denomination, Inventory, MachineState, Note, Product, TransitionLog, TransitionRecord,
};
use crate::machine::command::{Command, Outcome};
use crate::machine::error::CommandError;
use crate::machine::transaction::Transaction;
use chrono::Utc;
use tracing::debug;

/// Payment threshold guard: the accumulated total covers the price.
fn payment_covers(total: u32, price: u32) -> bool {
    total >= price
}

/// A single vending machine.
///
/// The machine owns one [`Inventory`], one in-flight [`Transaction`], the
/// current [`MachineState`], and an append-only [`TransitionLog`]. Every
/// command funnels through [`apply`](Self::apply), which either fully
/// succeeds or leaves the machine exactly as it was.
///
/// Commands are serialized by `&mut self`: one customer interacts at a
/// time, and no handler suspends or blocks. Callers sharing a machine
/// across threads should wrap it in a `Mutex` so each command stays the
/// atomic unit. There is no timeout for an abandoned transaction; once a
/// selection is made the machine waits indefinitely for the next command.
///
/// # Example
///
/// ```rust
/// use vendo::core::{Coin, Note, Product};
/// use vendo::machine::{MachineBuilder, Outcome};
///
/// let coke = Product::new("Coke", 18);
/// let mut machine = MachineBuilder::new()
///     .product(coke.clone(), 5)
///     .build()
///     .unwrap();
///
/// machine.select(coke.clone()).unwrap();
/// machine.insert_coin(Coin::Five).unwrap();
/// machine.insert_coin(Coin::Five).unwrap();
/// machine.insert_note(Note::Ten).unwrap();
/// machine.dispense().unwrap();
///
/// let outcome = machine.return_change().unwrap();
/// assert_eq!(outcome, Outcome::ChangeReturned { amount: 2 });
/// assert_eq!(machine.inventory().quantity(&coke), 4);
/// ```
#[derive(Debug, Default)]
pub struct VendingMachine {
    inventory: Inventory,
    transaction: Transaction,
    current: MachineState,
    log: TransitionLog,
}

impl VendingMachine {
    /// Create an empty idle machine.
    ///
    /// Stock it through [`stock`](Self::stock), or use
    /// [`MachineBuilder`](crate::machine::MachineBuilder) to construct a
    /// stocked machine in one expression.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inventory,
            ..Self::default()
        }
    }

    /// Current machine state.
    pub fn state(&self) -> MachineState {
        self.current
    }

    /// The stocked inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The in-flight transaction.
    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Accumulated payment for the open transaction.
    pub fn payment_total(&self) -> u32 {
        self.transaction.paid()
    }

    /// Log of every state transition so far.
    pub fn history(&self) -> &TransitionLog {
        &self.log
    }

    /// Register a product at the given count, overwriting any existing
    /// count. Administrative; legal in any state.
    pub fn stock(&mut self, product: Product, qty: u32) {
        debug!(product = product.name(), qty, "stocked");
        self.inventory.set_quantity(product, qty);
    }

    /// Add units to a product's count. Administrative; legal in any state.
    pub fn restock(&mut self, product: Product, qty: u32) {
        debug!(product = product.name(), qty, "restocked");
        self.inventory.add(product, qty);
    }

    /// Remove a product from the catalog entirely. Administrative; legal
    /// in any state.
    pub fn unlist(&mut self, product: &Product) {
        debug!(product = product.name(), "unlisted");
        self.inventory.remove(product);
    }

    /// Choose a product to buy.
    pub fn select(&mut self, product: Product) -> Result<Outcome, CommandError> {
        self.apply(Command::Select(product))
    }

    /// Insert a coin or note toward the selected product.
    pub fn insert_payment(&mut self, denomination: Denomination) -> Result<Outcome, CommandError> {
        self.apply(Command::Insert(denomination))
    }

    /// Insert a coin.
    pub fn insert_coin(&mut self, coin: Coin) -> Result<Outcome, CommandError> {
        self.apply(Command::Insert(Denomination::Coin(coin)))
    }

    /// Insert a note.
    pub fn insert_note(&mut self, note: Note) -> Result<Outcome, CommandError> {
        self.apply(Command::Insert(Denomination::Note(note)))
    }

    /// Collect the dispensed product.
    pub fn dispense(&mut self) -> Result<Outcome, CommandError> {
        self.apply(Command::Dispense)
    }

    /// Collect the change and close the transaction.
    pub fn return_change(&mut self) -> Result<Outcome, CommandError> {
        self.apply(Command::ReturnChange)
    }

    /// Apply one command to the current state.
    ///
    /// On success the outcome describes what happened, and any state
    /// change has been installed and logged. On rejection the machine is
    /// exactly as it was before the call.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, CommandError> {
        let from = self.current;
        let label = command.name();
        let open_transaction = self.transaction.id();

        let (next, outcome) = match self.dispatch(command) {
            Ok(step) => step,
            Err(rejection) => {
                debug!(state = from.name(), command = label, %rejection, "command rejected");
                return Err(rejection);
            }
        };

        if next != from {
            // The transition that closes a transaction still belongs to it.
            let transaction = self.transaction.id().or(open_transaction);
            self.log = self.log.record(TransitionRecord {
                from,
                to: next,
                command: label.to_string(),
                transaction,
                timestamp: Utc::now(),
            });
            debug!(from = from.name(), to = next.name(), command = label, "transition");
            self.current = next;
        }

        Ok(outcome)
    }

    /// Route a command to the handler for the current state.
    ///
    /// Handlers mutate the transaction and inventory; the state change is
    /// returned to [`apply`](Self::apply) rather than installed here.
    fn dispatch(&mut self, command: Command) -> Result<(MachineState, Outcome), CommandError> {
        match (self.current, command) {
            (MachineState::Idle, Command::Select(product)) => self.handle_select(product),
            (MachineState::AwaitingPayment, Command::Insert(denomination)) => {
                Ok(self.handle_insert(denomination))
            }
            (MachineState::Dispensing, Command::Dispense) => Ok(self.handle_dispense()),
            (MachineState::ReturningChange, Command::ReturnChange) => {
                Ok(self.handle_return_change())
            }
            (state, command) => Err(CommandError::InvalidCommand {
                state: state.name(),
                command: command.name(),
            }),
        }
    }

    fn handle_select(&mut self, product: Product) -> Result<(MachineState, Outcome), CommandError> {
        if !self.inventory.is_available(&product) {
            return Err(CommandError::ProductUnavailable {
                name: product.name().to_string(),
            });
        }

        self.transaction.begin(product.clone());
        Ok((
            MachineState::AwaitingPayment,
            Outcome::ProductSelected { product },
        ))
    }

    fn handle_insert(&mut self, denomination: Denomination) -> (MachineState, Outcome) {
        let inserted = denomination.value();
        self.transaction.add_payment(inserted);

        let total = self.transaction.paid();
        let price = self.selected_product().price();

        if payment_covers(total, price) {
            (
                MachineState::Dispensing,
                Outcome::PaymentComplete { inserted, total },
            )
        } else {
            (
                MachineState::AwaitingPayment,
                Outcome::PaymentAccepted {
                    inserted,
                    total,
                    remaining: price - total,
                },
            )
        }
    }

    fn handle_dispense(&mut self) -> (MachineState, Outcome) {
        let product = self.selected_product();
        // Count stays at zero if an operator pulled stock mid-transaction.
        let remaining = self.inventory.quantity(&product).saturating_sub(1);
        self.inventory.set_quantity(product.clone(), remaining);

        (
            MachineState::ReturningChange,
            Outcome::ProductDispensed { product },
        )
    }

    fn handle_return_change(&mut self) -> (MachineState, Outcome) {
        let price = self.selected_product().price();
        let amount = self.transaction.paid().saturating_sub(price);
        self.transaction.clear();

        (MachineState::Idle, Outcome::ChangeReturned { amount })
    }

    /// The product of the open transaction.
    ///
    /// Only called from states a successful selection necessarily
    /// precedes.
    fn selected_product(&self) -> Product {
        self.transaction
            .selected()
            .cloned()
            .expect("states past Idle always hold a selection")
    }
}
