//! Command-line arguments for the price viewer.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Comma-separated coin ids, e.g. `bitcoin,ethereum,cardano`.
    pub coins: String,

    /// Comma-separated currency codes, e.g. `eur,usd`.
    pub currencies: String,

    /// Show the market chart over this many trailing days instead of spot prices.
    #[clap(long)]
    pub days: Option<u32>,
}
