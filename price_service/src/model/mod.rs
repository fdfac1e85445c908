//! Data model of the price query service.
//!
//! - `query` — caller-supplied parameters and their validation.
//! - `price` — `Price` and `CoinPrice` with their console rendering.
//! - `view` — views returned by the service.
pub mod price;
pub mod query;
pub mod view;
