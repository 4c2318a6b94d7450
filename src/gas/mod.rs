//! Ethereum gas price recommendations from a remote oracle
//!
//! - `types`: priorities, raw oracle snapshots, and wei amounts
//! - `units`: oracle unit to wei conversion
//! - `resolver`: picks and converts one priority out of a snapshot
//! - `fetcher` / `eth_gas_station`: where snapshots come from
//! - `manager`: per-priority cache with a max age
//! - `suggester`: whole-snapshot cache, pre-warmed on creation

pub mod eth_gas_station;
pub mod fetcher;
pub mod manager;
pub mod resolver;
pub mod suggester;
pub mod types;
pub mod units;

#[cfg(test)]
pub(crate) mod testing;

pub use eth_gas_station::EthGasStationClient;
pub use fetcher::GasPriceFetcher;
pub use manager::{CacheMetrics, GasPriceManager};
pub use resolver::{resolve_gas_price, resolve_gas_price_str};
pub use suggester::GasPriceSuggester;
pub use types::{GasPriority, RawGasPrices, Wei};
pub use units::{to_wei, ORACLE_UNIT_DECIMALS};

use crate::errors::GasResult;

/// Fetch a fresh snapshot and return the price for `priority`, without caching
pub async fn suggest_gas_price<F>(fetcher: &F, priority: GasPriority) -> GasResult<Wei>
where
    F: GasPriceFetcher + ?Sized,
{
    let prices = fetcher.fetch().await?;
    resolve_gas_price(priority, &prices)
}

pub async fn suggest_fast_gas_price<F>(fetcher: &F) -> GasResult<Wei>
where
    F: GasPriceFetcher + ?Sized,
{
    suggest_gas_price(fetcher, GasPriority::Fast).await
}
