//! # Tally Server
//!
//! HTTP API server exposing the calculator operators as JSON endpoints.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod extract;
pub mod server;

pub use server::{Server, ServerConfig};
