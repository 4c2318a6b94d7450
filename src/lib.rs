//! Client for a remote Ethereum gas price oracle
//!
//! Fetches fast/fastest/safeLow/average recommendations, converts them to
//! wei, and serves them through a cache with a bounded staleness.
//!
//! ```no_run
//! use gasstation::gas::{GasPriceManager, GasPriority};
//! use gasstation::config::GasStationConfig;
//!
//! # async fn run() -> gasstation::errors::GasResult<()> {
//! let manager = GasPriceManager::from_config(&GasStationConfig::default())?;
//! let fast = manager.suggest_default_gas_price().await?;
//! let cheap = manager.suggest_gas_price(GasPriority::SafeLow).await?;
//! println!("fast={} wei, safeLow={} wei", fast, cheap);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod gas;
pub mod logger;

pub use errors::{GasError, GasResult};
pub use gas::{GasPriceManager, GasPriority, Wei};
