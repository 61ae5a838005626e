//! Error types for the Tally ecosystem.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the Tally ecosystem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Division by zero.
    #[error("Division by zero: {left} // 0 is undefined")]
    DivisionByZero {
        /// The left operand of the failed division.
        left: i64,
    },

    /// Checked arithmetic overflowed the operand range.
    #[error("Overflow: {left} {symbol} {right} does not fit in a signed 64-bit integer")]
    Overflow {
        /// Symbol of the overflowing operation.
        symbol: &'static str,
        /// Left operand.
        left: i64,
        /// Right operand.
        right: i64,
    },

    /// Operator was not found in the registry.
    #[error("Unknown operator: {name}")]
    UnknownOperator {
        /// The requested operator name.
        name: String,
    },

    /// Operator name is already registered.
    #[error("Duplicate operator: {name} is already in the registry")]
    DuplicateOperator {
        /// The conflicting operator name.
        name: String,
    },
}

impl Error {
    /// Creates an unknown-operator error for the given name.
    #[must_use]
    pub fn unknown_operator(name: impl Into<String>) -> Self {
        Self::UnknownOperator { name: name.into() }
    }

    /// Creates an overflow error for the given operation.
    #[must_use]
    pub fn overflow(symbol: &'static str, left: i64, right: i64) -> Self {
        Self::Overflow {
            symbol,
            left,
            right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::DivisionByZero { left: 7 };
        assert_eq!(err.to_string(), "Division by zero: 7 // 0 is undefined");

        let err = Error::overflow("+", i64::MAX, 1);
        assert!(err.to_string().starts_with("Overflow:"));

        let err = Error::unknown_operator("modulo");
        assert_eq!(err.to_string(), "Unknown operator: modulo");
    }
}
