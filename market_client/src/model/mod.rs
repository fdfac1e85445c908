//! Request and wire types exchanged with the market data API.
//!
//! - `request` — typed request parameters and their validation.
//! - `response` — the success/failure wrapper returned by the client.
//! - `price_matrix` — order-preserving coin → currency → price mapping.
//! - `market_chart` — historical `[timestamp, value]` series.
pub mod market_chart;
pub mod price_matrix;
pub mod request;
pub mod response;
