//! Market data client for the CoinGecko public API.
//!
//! Two operations are exposed through the [`MarketDataClient`] trait:
//! - `get_simple_price` — spot prices for several coins in several currencies
//!   (`/simple/price`);
//! - `get_coin_market_chart` — price, market-cap and volume series for one coin
//!   over a trailing window of days (`/coins/{coin}/market_chart`).
//!
//! Ordinary upstream failures (network errors, non-success status, malformed
//! JSON) never surface as errors from the trait: they are reported as
//! [`ApiResponse::Failed`]. Only caller contract violations (a missing request
//! or a missing required field) are returned as `Err`, before any I/O.
//!
//! [`CoinGeckoClient`] is the `reqwest`-based implementation. Its `try_*`
//! methods keep the underlying cause for callers that want it.
#![warn(missing_docs)]
pub mod client;
pub mod coin_gecko;
pub mod model;

pub use client::MarketDataClient;
pub use coin_gecko::CoinGeckoClient;
pub use model::market_chart::{ChartPoint, MarketChart};
pub use model::price_matrix::{OrderedMap, PriceMatrix};
pub use model::request::{CoinMarketChartRequest, SimplePriceRequest};
pub use model::response::{ApiResponse, CoinMarketChartResponse, SimplePriceResponse};
