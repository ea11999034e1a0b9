//! Currency denominations accepted by the machine.
//!
//! Denominations are fixed at compile time. The machine never creates or
//! destroys money; it only sums the worth of what the customer inserts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coins accepted by the machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Coin {
    One,
    Two,
    Five,
}

impl Coin {
    /// Monetary worth of the coin.
    pub fn value(&self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Five => 5,
        }
    }

    /// The coin's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::One => "One",
            Self::Two => "Two",
            Self::Five => "Five",
        }
    }
}

/// Notes accepted by the machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Note {
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl Note {
    /// Monetary worth of the note.
    pub fn value(&self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    /// The note's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ten => "Ten",
            Self::Twenty => "Twenty",
            Self::Fifty => "Fifty",
            Self::Hundred => "Hundred",
        }
    }
}

/// A single inserted payment: either a coin or a note.
///
/// # Example
///
/// ```rust
/// use vendo::core::{Coin, Denomination, Note};
///
/// let coin = Denomination::Coin(Coin::Five);
/// let note = Denomination::Note(Note::Ten);
///
/// assert_eq!(coin.value() + note.value(), 15);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Denomination {
    Coin(Coin),
    Note(Note),
}

impl Denomination {
    /// Monetary worth of the denomination.
    pub fn value(&self) -> u32 {
        match self {
            Self::Coin(coin) => coin.value(),
            Self::Note(note) => note.value(),
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coin(coin) => write!(f, "coin {}", coin.name()),
            Self::Note(note) => write!(f, "note {}", note.name()),
        }
    }
}
