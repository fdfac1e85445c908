//! Caller-supplied query parameters.
use price_common::{PriceError, Result};

/// Current prices of several coins in several currencies.
///
/// Empty lists are accepted; only missing lists are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCurrentPriceQuery {
    /// Coin ids, e.g. `bitcoin`.
    pub coins: Option<Vec<String>>,
    /// Currency codes, e.g. `eur`.
    pub currencies: Option<Vec<String>>,
}

impl GetCurrentPriceQuery {
    /// Creates a query with both lists present.
    pub fn new(coins: Vec<String>, currencies: Vec<String>) -> Self {
        GetCurrentPriceQuery {
            coins: Some(coins),
            currencies: Some(currencies),
        }
    }

    /// Validates a possibly missing query: the query, then `coins`, then `currencies`.
    pub fn checked(query: Option<&Self>) -> Result<(&[String], &[String])> {
        let query = query.ok_or(PriceError::NullArgument("query"))?;
        let coins = query
            .coins
            .as_deref()
            .ok_or(PriceError::InvalidArgument("coins"))?;
        let currencies = query
            .currencies
            .as_deref()
            .ok_or(PriceError::InvalidArgument("currencies"))?;
        Ok((coins, currencies))
    }
}

/// Historical market data of one coin in one currency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetHistoricalMarketDataQuery {
    /// Coin id.
    pub coin: Option<String>,
    /// Currency code.
    pub currency: Option<String>,
    /// Trailing window in days.
    pub days: u32,
}

impl GetHistoricalMarketDataQuery {
    /// Creates a query with coin and currency present.
    pub fn new(coin: impl Into<String>, currency: impl Into<String>, days: u32) -> Self {
        GetHistoricalMarketDataQuery {
            coin: Some(coin.into()),
            currency: Some(currency.into()),
            days,
        }
    }

    /// Validates a possibly missing query: the query, then `coin`, then `currency`.
    pub fn checked(query: Option<&Self>) -> Result<(&str, &str, u32)> {
        let query = query.ok_or(PriceError::NullArgument("query"))?;
        let coin = query
            .coin
            .as_deref()
            .ok_or(PriceError::InvalidArgument("coin"))?;
        let currency = query
            .currency
            .as_deref()
            .ok_or(PriceError::InvalidArgument("currency"))?;
        Ok((coin, currency, query.days))
    }
}
