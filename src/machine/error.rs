//! Rejection errors for commands.

use thiserror::Error;

/// A command the machine refused.
///
/// Rejections are advisory: the machine state, transaction, and inventory
/// are exactly as they were before the command. The caller reissues the
/// correct command; nothing needs recovery.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The selected product is unknown or out of stock.
    #[error("product '{name}' is not available")]
    ProductUnavailable { name: String },

    /// The command is not legal in the current state.
    #[error("cannot {command} while the machine is {state}")]
    InvalidCommand {
        state: &'static str,
        command: &'static str,
    },
}
