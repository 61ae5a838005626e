//! # Tally Core
//!
//! Core types and operators for the Tally calculator service.
//!
//! This crate provides the foundational pieces used across all Tally components:
//! - Common error types
//! - Operand and operation data models
//! - The [`Operator`] trait and the built-in arithmetic operators
//! - The [`OperatorRegistry`] for name-based operator lookup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod operation;
pub mod operator;
pub mod registry;
pub mod types;

pub use error::{Error, Result};
pub use operation::Operation;
pub use operator::{Addition, Division, Multiplication, Operator, Subtraction};
pub use registry::OperatorRegistry;
pub use types::{Operand, Operands};
