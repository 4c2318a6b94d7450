//! Gas price manager with a per-priority cache of recent results
//!
//! Each priority keeps its own entry, created on first request and
//! overwritten on refresh. A request returns the cached price while it is
//! no older than `max_age`; otherwise it fetches, resolves, stores, and
//! returns a fresh one.
//!
//! The lock is held only to read and to write entries, never across the
//! network call. Two callers missing on the same priority may both fetch;
//! whichever stores last wins, and both get a valid price.
use super::eth_gas_station::EthGasStationClient;
use super::fetcher::GasPriceFetcher;
use super::resolver::resolve_gas_price;
use super::types::{GasPriority, RawGasPrices, Wei};
use crate::config::GasStationConfig;
use crate::errors::{GasError, GasResult};
use crate::logger::{self, LogTag};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct PriceEntry {
    price: Wei,
    fetched_at: Instant,
}

impl PriceEntry {
    fn is_fresh(&self, max_age: Duration) -> bool {
        self.fetched_at.elapsed() <= max_age
    }
}

/// Cache metrics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    /// Misses that ended with a stored price
    pub refreshes: u64,
    /// Misses that ended with an error
    pub failures: u64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

pub struct GasPriceManager<F = EthGasStationClient> {
    fetcher: F,
    default_priority: GasPriority,
    max_age: Duration,
    fetch_timeout: Option<Duration>,
    entries: Mutex<HashMap<GasPriority, PriceEntry>>,
    metrics: Mutex<CacheMetrics>,
}

impl GasPriceManager<EthGasStationClient> {
    /// Manager backed by the HTTP client described in `config`
    pub fn from_config(config: &GasStationConfig) -> GasResult<Self> {
        let client = EthGasStationClient::from_config(config)?;
        let manager = Self::with_default(client, config.max_age(), config.default_priority);

        Ok(match config.fetch_timeout() {
            Some(limit) => manager.with_fetch_timeout(limit),
            None => manager,
        })
    }
}

impl<F: GasPriceFetcher> GasPriceManager<F> {
    /// New manager with the default priority set to `Fast`
    ///
    /// Performs no network access; the first request for each priority misses.
    pub fn new(fetcher: F, max_age: Duration) -> Self {
        Self::with_default(fetcher, max_age, GasPriority::Fast)
    }

    pub fn with_default(fetcher: F, max_age: Duration, default_priority: GasPriority) -> Self {
        Self {
            fetcher,
            default_priority,
            max_age,
            fetch_timeout: None,
            entries: Mutex::new(HashMap::new()),
            metrics: Mutex::new(CacheMetrics::default()),
        }
    }

    /// Bound every fetch by `limit`; expiry surfaces as `GasError::Timeout`
    pub fn with_fetch_timeout(mut self, limit: Duration) -> Self {
        self.fetch_timeout = Some(limit);
        self
    }

    pub fn default_priority(&self) -> GasPriority {
        self.default_priority
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Suggested gas price in wei for `priority`, from cache when fresh
    pub async fn suggest_gas_price(&self, priority: GasPriority) -> GasResult<Wei> {
        if let Some(price) = self.fresh_price(priority) {
            self.metrics.lock().hits += 1;
            logger::debug(
                LogTag::Cache,
                &format!("Cache hit for {}: {} wei", priority, price),
            );
            return Ok(price);
        }

        self.metrics.lock().misses += 1;
        logger::debug(
            LogTag::Cache,
            &format!("Cache miss for {}, fetching from {}", priority, self.fetcher.name()),
        );

        match self.fetch_and_resolve(priority).await {
            Ok(price) => {
                self.store(priority, price, Instant::now());
                self.metrics.lock().refreshes += 1;
                logger::debug(
                    LogTag::Cache,
                    &format!("Stored {} price: {} wei", priority, price),
                );
                Ok(price)
            }
            Err(err) => {
                self.metrics.lock().failures += 1;
                logger::warning(
                    LogTag::GasOracle,
                    &format!("Failed to refresh {} gas price: {}", priority, err),
                );
                Err(err)
            }
        }
    }

    /// Same as `suggest_gas_price` with the priority chosen at construction
    pub async fn suggest_default_gas_price(&self) -> GasResult<Wei> {
        self.suggest_gas_price(self.default_priority).await
    }

    /// Parses `priority` first, so unsupported names never reach the network
    pub async fn suggest_gas_price_str(&self, priority: &str) -> GasResult<Wei> {
        let priority: GasPriority = priority.parse()?;
        self.suggest_gas_price(priority).await
    }

    /// Last stored price for `priority`, regardless of age
    pub fn cached_price(&self, priority: GasPriority) -> Option<Wei> {
        self.entries.lock().get(&priority).map(|entry| entry.price)
    }

    /// Drop the entry for `priority`; the next request fetches
    pub fn invalidate(&self, priority: GasPriority) {
        self.entries.lock().remove(&priority);
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn metrics(&self) -> CacheMetrics {
        self.metrics.lock().clone()
    }

    fn fresh_price(&self, priority: GasPriority) -> Option<Wei> {
        self.entries
            .lock()
            .get(&priority)
            .filter(|entry| entry.is_fresh(self.max_age))
            .map(|entry| entry.price)
    }

    fn store(&self, priority: GasPriority, price: Wei, fetched_at: Instant) {
        self.entries
            .lock()
            .insert(priority, PriceEntry { price, fetched_at });
    }

    async fn fetch_and_resolve(&self, priority: GasPriority) -> GasResult<Wei> {
        let prices = self.fetch_prices().await?;
        resolve_gas_price(priority, &prices)
    }

    async fn fetch_prices(&self) -> GasResult<RawGasPrices> {
        match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, self.fetcher.fetch())
                .await
                .map_err(|_| GasError::Timeout {
                    millis: limit.as_millis() as u64,
                })?,
            None => self.fetcher.fetch().await,
        }
    }
}
