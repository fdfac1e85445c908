//!
//! Common types and utilities shared by the market data client, the price
//! query service and the viewer binary.
//!
//! This crate aggregates:
//! - `error` — unified error type `PriceError` used across the workspace.
//! - `result` — handy `Result<T, PriceError>` alias.
//! - `ids` — parsing of comma-separated coin and currency lists.
//! - `net` — API root and URL helpers.
#![warn(missing_docs)]
pub mod error;
pub mod ids;
pub mod net;
pub mod result;

pub use error::PriceError;
pub use result::Result;
