//! Operand types shared across the Tally ecosystem.

use serde::{Deserialize, Serialize};

/// A single integer operand.
///
/// Negative values render wrapped in parentheses so that expressions such as
/// `3 - (-2) = 5` stay unambiguous.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operand(pub i64);

impl Operand {
    /// Creates a new `Operand` from an integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// The left and right operands of a binary operation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Operands {
    /// Left operand.
    pub left: Operand,
    /// Right operand.
    pub right: Operand,
}

impl Operands {
    /// Creates a new operand pair.
    #[must_use]
    pub fn new(left: i64, right: i64) -> Self {
        Self {
            left: Operand(left),
            right: Operand(right),
        }
    }
}
