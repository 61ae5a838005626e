//! Wire types for the calculator API.
//!
//! These types pin the JSON request/response shapes independently of the
//! core domain types, so the wire format cannot drift by accident.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use tally_core::{Operands, Operation};

// === Requests ===

/// Request body carrying the two operands of a calculation.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OperandsRequest {
    /// Left operand.
    pub left: i64,
    /// Right operand.
    pub right: i64,
}

impl OperandsRequest {
    /// Converts the request body into domain operands.
    #[must_use]
    pub fn into_operands(self) -> Operands {
        Operands::new(self.left, self.right)
    }
}

// === Responses ===

/// Operand pair as serialized in responses.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OperandsBody {
    /// Left operand.
    pub left: i64,
    /// Right operand.
    pub right: i64,
}

/// Response body for a completed calculation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationResponse {
    /// The operands the operator was applied to.
    pub operands: OperandsBody,
    /// Operator name, e.g. `"addition"`.
    pub name: String,
    /// Operator symbol, e.g. `"+"`.
    pub symbol: String,
    /// Computed result.
    pub result: i64,
    /// Rendered expression, e.g. `"1 + 2 = 3"`.
    pub expression: String,
}

impl From<Operation> for OperationResponse {
    fn from(operation: Operation) -> Self {
        Self {
            operands: OperandsBody {
                left: operation.operands.left.value(),
                right: operation.operands.right.value(),
            },
            name: operation.name,
            symbol: operation.symbol,
            result: operation.result,
            expression: operation.expression,
        }
    }
}

/// Server status report for `GET /api/status`.
#[derive(Debug, Clone, Serialize)]
pub struct ServerStatus {
    /// Always `"running"` while the server answers.
    pub status: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
    /// Names of the registered operators.
    pub operators: Vec<String>,
    /// Total calculation requests processed.
    pub requests_total: u64,
    /// Total error responses returned.
    pub errors_total: u64,
}

// === Errors ===

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable machine-readable error key, e.g. `"calculator.error.validation"`.
    pub key: String,
    /// Human-readable message.
    pub message: String,
}

/// An API-level error carrying its HTTP status and wire body.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// Stable machine-readable error key.
    pub key: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ApiError {
    /// Creates a validation error (400).
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            key: "calculator.error.validation",
            message: message.into(),
        }
    }
}

impl From<tally_core::Error> for ApiError {
    fn from(err: tally_core::Error) -> Self {
        let (status, key) = match &err {
            tally_core::Error::DivisionByZero { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "calculator.error.division_by_zero",
            ),
            tally_core::Error::Overflow { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "calculator.error.overflow")
            }
            tally_core::Error::UnknownOperator { .. } => {
                (StatusCode::NOT_FOUND, "calculator.error.unknown_operator")
            }
            tally_core::Error::DuplicateOperator { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "calculator.error.internal",
            ),
        };

        Self {
            status,
            key,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Some(telemetry) = tally_telemetry::Telemetry::global() {
            telemetry.metrics.record_error();
        }

        let body = Json(ErrorBody {
            key: self.key.to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}
