//! The [`Operator`] trait and the built-in arithmetic operators.

use crate::error::{Error, Result};
use crate::operation::Operation;
use crate::types::Operands;

/// A binary integer operator.
///
/// Implementors provide a unique `name`, a mathematical `symbol` and the
/// computation itself; `run` wraps the result into an [`Operation`] record.
pub trait Operator: Send + Sync + std::fmt::Debug {
    /// Unique lowercase name of the operator, e.g. `"addition"`.
    fn name(&self) -> &'static str;

    /// Mathematical symbol of the operator, typically a single character.
    fn symbol(&self) -> &'static str;

    /// Computes the operation between the operands.
    ///
    /// # Errors
    ///
    /// Returns an error if the computation is undefined for the operands
    /// (division by zero) or overflows the operand range.
    fn compute(&self, operands: Operands) -> Result<i64>;

    /// Computes the operation and wraps the result into an [`Operation`].
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Operator::compute`].
    fn run(&self, operands: Operands) -> Result<Operation> {
        let result = self.compute(operands)?;
        Ok(Operation::new(operands, self.name(), self.symbol(), result))
    }
}

/// Addition operator (`+`).
#[derive(Debug, Default, Clone, Copy)]
pub struct Addition;

impl Operator for Addition {
    fn name(&self) -> &'static str {
        "addition"
    }

    fn symbol(&self) -> &'static str {
        "+"
    }

    fn compute(&self, operands: Operands) -> Result<i64> {
        let (left, right) = (operands.left.value(), operands.right.value());
        left.checked_add(right)
            .ok_or_else(|| Error::overflow(self.symbol(), left, right))
    }
}

/// Subtraction operator (`-`).
#[derive(Debug, Default, Clone, Copy)]
pub struct Subtraction;

impl Operator for Subtraction {
    fn name(&self) -> &'static str {
        "subtraction"
    }

    fn symbol(&self) -> &'static str {
        "-"
    }

    fn compute(&self, operands: Operands) -> Result<i64> {
        let (left, right) = (operands.left.value(), operands.right.value());
        left.checked_sub(right)
            .ok_or_else(|| Error::overflow(self.symbol(), left, right))
    }
}

/// Multiplication operator (`*`).
#[derive(Debug, Default, Clone, Copy)]
pub struct Multiplication;

impl Operator for Multiplication {
    fn name(&self) -> &'static str {
        "multiplication"
    }

    fn symbol(&self) -> &'static str {
        "*"
    }

    fn compute(&self, operands: Operands) -> Result<i64> {
        let (left, right) = (operands.left.value(), operands.right.value());
        left.checked_mul(right)
            .ok_or_else(|| Error::overflow(self.symbol(), left, right))
    }
}

/// Floored division operator (`//`).
///
/// The quotient is rounded toward negative infinity, so `17 // (-2) = -9`
/// rather than the `-8` that truncating division would give.
#[derive(Debug, Default, Clone, Copy)]
pub struct Division;

impl Operator for Division {
    fn name(&self) -> &'static str {
        "division"
    }

    fn symbol(&self) -> &'static str {
        "//"
    }

    fn compute(&self, operands: Operands) -> Result<i64> {
        let (left, right) = (operands.left.value(), operands.right.value());
        if right == 0 {
            return Err(Error::DivisionByZero { left });
        }

        // i64::MIN / -1 is the single overflowing case.
        let quotient = left
            .checked_div(right)
            .ok_or_else(|| Error::overflow(self.symbol(), left, right))?;
        let remainder = left % right;

        // Truncating division rounds toward zero; adjust toward negative
        // infinity when the remainder and divisor disagree on sign.
        if remainder != 0 && (remainder < 0) != (right < 0) {
            Ok(quotient - 1)
        } else {
            Ok(quotient)
        }
    }
}
