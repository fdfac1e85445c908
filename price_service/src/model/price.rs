//! Spot prices as shown to the user.
use std::fmt;

/// Price of a coin in one currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    /// Lowercase currency code, e.g. `usd`.
    pub currency: String,
    /// Amount in that currency.
    pub value: f64,
}

impl Price {
    /// Creates a price.
    pub fn new(currency: impl Into<String>, value: f64) -> Self {
        Price {
            currency: currency.into(),
            value,
        }
    }
}

/// All prices returned for one coin, in upstream order.
///
/// Currencies the API did not return are absent, never zero-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinPrice {
    /// Coin id.
    pub id: String,
    /// One entry per returned currency.
    pub prices: Vec<Price>,
}

/// Renders `"{id}\n{cur1}={val1} {cur2}={val2}"` with trailing whitespace trimmed.
impl fmt::Display for CoinPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = format!("{}\n", self.id);
        for price in &self.prices {
            text.push_str(&format!("{}={} ", price.currency, price.value));
        }
        f.write_str(text.trim_end())
    }
}
