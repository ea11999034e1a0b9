//! Machine states.
//!
//! The machine's position within one transaction, as a tagged enum. The
//! legal command for each state lives with the dispatch in
//! [`crate::machine`]; the states themselves are plain values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The position of the machine within one transaction.
///
/// The machine is cyclic: closing a transaction at change return leads
/// back to [`Idle`](Self::Idle); no state is terminal.
///
/// # Example
///
/// ```rust
/// use vendo::core::MachineState;
///
/// let state = MachineState::AwaitingPayment;
/// assert_eq!(state.name(), "AwaitingPayment");
/// assert_eq!(state.to_string(), "AwaitingPayment");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MachineState {
    /// No transaction in flight; waiting for a selection.
    Idle,
    /// A product is selected; accumulating payment.
    AwaitingPayment,
    /// Payment covers the price; the product is ready to collect.
    Dispensing,
    /// Product collected; change (possibly zero) is ready to collect.
    ReturningChange,
}

impl MachineState {
    /// The state's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingPayment => "AwaitingPayment",
            Self::Dispensing => "Dispensing",
            Self::ReturningChange => "ReturningChange",
        }
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::Idle
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(MachineState::Idle.name(), "Idle");
        assert_eq!(MachineState::AwaitingPayment.name(), "AwaitingPayment");
        assert_eq!(MachineState::Dispensing.name(), "Dispensing");
        assert_eq!(MachineState::ReturningChange.name(), "ReturningChange");
    }

    #[test]
    fn display_matches_name() {
        for state in [
            MachineState::Idle,
            MachineState::AwaitingPayment,
            MachineState::Dispensing,
            MachineState::ReturningChange,
        ] {
            assert_eq!(state.to_string(), state.name());
        }
    }

    #[test]
    fn state_serializes_correctly() {
        let state = MachineState::Dispensing;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MachineState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(MachineState::Idle, MachineState::Idle);
        assert_ne!(MachineState::Idle, MachineState::Dispensing);
    }
}
