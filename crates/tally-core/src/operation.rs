//! The result record of a computed operation.

use serde::{Deserialize, Serialize};

use crate::types::Operands;

/// A completed arithmetic operation.
///
/// Carries the operands, the operator identity and the computed result,
/// plus a rendered `expression` such as `"3 - (-2) = 5"`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// The operands the operator was applied to.
    pub operands: Operands,
    /// Unique name of the operator, e.g. `"addition"`.
    pub name: String,
    /// Mathematical symbol of the operator, e.g. `"+"`.
    pub symbol: String,
    /// Computed result.
    pub result: i64,
    /// Rendered form of the operation, e.g. `"1 + 2 = 3"`.
    pub expression: String,
}

impl Operation {
    /// Creates a new operation, rendering the `expression` field from the
    /// other components.
    #[must_use]
    pub fn new(operands: Operands, name: &str, symbol: &str, result: i64) -> Self {
        let expression = format!(
            "{} {} {} = {}",
            operands.left, symbol, operands.right, result
        );
        Self {
            operands,
            name: name.to_string(),
            symbol: symbol.to_string(),
            result,
            expression,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_rendering() {
        let cases = [
            (0, 0, "addition", "+", 0, "0 + 0 = 0"),
            (3, 1, "subtraction", "-", 2, "3 - 1 = 2"),
            (3, -2, "subtraction", "-", 5, "3 - (-2) = 5"),
            (-1, -2, "addition", "+", -3, "(-1) + (-2) = -3"),
        ];

        for (left, right, name, symbol, result, expression) in cases {
            let operation = Operation::new(Operands::new(left, right), name, symbol, result);
            assert_eq!(operation.expression, expression);
        }
    }

    #[test]
    fn test_serialization_shape() {
        let operation = Operation::new(Operands::new(1, 2), "addition", "+", 3);
        let json = serde_json::to_value(&operation).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "operands": {"left": 1, "right": 2},
                "name": "addition",
                "symbol": "+",
                "result": 3,
                "expression": "1 + 2 = 3",
            })
        );
    }
}
