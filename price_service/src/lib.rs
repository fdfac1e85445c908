//! Price query service.
//!
//! Validates caller queries, delegates to a [`market_client::MarketDataClient`]
//! and reshapes the raw wire data into presentation views:
//! - `model` — queries, prices and views;
//! - `convert` — wire → view reshaping (matrix flattening, timestamp → date);
//! - `service` — [`PriceQueryService`] tying the two together.
//!
//! "No data" and "upstream failed" are deliberately the same outcome here: an
//! empty coin-price list or three empty series.
#![warn(missing_docs)]
pub mod convert;
pub mod model;
pub mod service;

pub use model::price::{CoinPrice, Price};
pub use model::query::{GetCurrentPriceQuery, GetHistoricalMarketDataQuery};
pub use model::view::{CurrentPriceView, HistoricalMarketDataView, Series, SeriesPoint};
pub use service::PriceQueryService;
