//! Price Viewer — prints cryptocurrency prices fetched from the CoinGecko API.
//!
//! Without `--days` it prints the current price of every coin in every currency,
//! one block per coin. With `--days N` it prints the price, market-cap and volume
//! history of every (coin, currency) pair over the last `N` days, one query at a
//! time.
//!
//! Usage example (CLI):
//! ```bash
//! price_viewer bitcoin,ethereum,cardano eur,usd,gbp,jpy
//! price_viewer bitcoin eur --days 7
//! ```
//!
//! Lists are comma-separated; entries are trimmed and empty entries ignored.
//! Errors, including invalid arguments, are printed to stdout and the process
//! exits normally. Log verbosity follows `RUST_LOG` (default `info`, on stderr).
#![warn(missing_docs)]
mod args;
mod render;

use crate::args::Args;
use clap::Parser;
use log::{info, warn};
use market_client::{CoinGeckoClient, MarketDataClient};
use price_common::Result;
use price_common::ids::parse_id_list;
use price_service::{GetCurrentPriceQuery, GetHistoricalMarketDataQuery, PriceQueryService};

#[tokio::main]
async fn main() {
    init_logger();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    let service = PriceQueryService::new(CoinGeckoClient::new());
    if let Err(e) = run(&service, &args).await {
        println!("{}", e);
    }
}

/// Runs the query selected by `args` and prints the result.
async fn run<C: MarketDataClient>(service: &PriceQueryService<C>, args: &Args) -> Result<()> {
    let coins = parse_id_list(&args.coins);
    let currencies = parse_id_list(&args.currencies);

    match args.days {
        None => {
            info!("Fetching current prices: coins={:?} currencies={:?}", coins, currencies);
            let query = GetCurrentPriceQuery::new(coins, currencies);
            let view = service.get_current_price(Some(&query)).await?;
            if view.coin_prices.is_empty() {
                warn!("No prices returned");
            }
            print!("{}", render::current_prices(&view));
        }
        Some(days) => {
            for coin in &coins {
                for currency in &currencies {
                    info!("Fetching market chart: coin={} currency={} days={}", coin, currency, days);
                    let query = GetHistoricalMarketDataQuery::new(coin.as_str(), currency.as_str(), days);
                    let view = service.get_historical_market_data(Some(&query)).await?;
                    if view.is_empty() {
                        warn!("No market data returned for {} in {}", coin, currency);
                    }
                    print!("{}", render::historical(&view, days));
                }
            }
        }
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
