use super::fetcher::GasPriceFetcher;
use super::resolver::resolve_gas_price;
use super::types::{GasPriority, RawGasPrices, Wei};
use crate::errors::GasResult;
use crate::logger::{self, LogTag};
use parking_lot::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct Snapshot {
    prices: RawGasPrices,
    fetched_at: Instant,
}

/// Suggests gas prices from one cached oracle snapshot
///
/// Unlike [`GasPriceManager`](super::GasPriceManager), which caches one
/// price per priority, this keeps the whole response, so a refresh for any
/// priority refreshes them all. The first snapshot is fetched on creation.
pub struct GasPriceSuggester<F> {
    fetcher: F,
    max_age: Duration,
    snapshot: Mutex<Snapshot>,
}

impl<F: GasPriceFetcher> GasPriceSuggester<F> {
    /// Fetch an initial snapshot; fails if that fetch fails
    pub async fn new(fetcher: F, max_age: Duration) -> GasResult<Self> {
        let prices = fetcher.fetch().await?;

        Ok(Self {
            fetcher,
            max_age,
            snapshot: Mutex::new(Snapshot {
                prices,
                fetched_at: Instant::now(),
            }),
        })
    }

    /// Price for `priority` from the current snapshot, refreshed first if stale
    pub async fn suggest(&self, priority: GasPriority) -> GasResult<Wei> {
        let prices = self.current_prices().await?;
        resolve_gas_price(priority, &prices)
    }

    pub async fn suggest_fast(&self) -> GasResult<Wei> {
        self.suggest(GasPriority::Fast).await
    }

    /// The cached snapshot, regardless of age
    pub fn snapshot(&self) -> RawGasPrices {
        self.snapshot.lock().prices
    }

    async fn current_prices(&self) -> GasResult<RawGasPrices> {
        let cached = {
            let snapshot = self.snapshot.lock();
            (snapshot.fetched_at.elapsed() <= self.max_age).then_some(snapshot.prices)
        };

        if let Some(prices) = cached {
            return Ok(prices);
        }

        logger::debug(
            LogTag::Cache,
            &format!("Snapshot older than {}ms, refreshing", self.max_age.as_millis()),
        );

        let prices = self.fetcher.fetch().await?;
        *self.snapshot.lock() = Snapshot {
            prices,
            fetched_at: Instant::now(),
        };

        Ok(prices)
    }

    #[cfg(test)]
    fn replace_snapshot(&self, prices: RawGasPrices, fetched_at: Instant) {
        *self.snapshot.lock() = Snapshot { prices, fetched_at };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GasError;
    use crate::gas::testing::{flat_prices, MockFetcher};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_initial_fetch_on_creation() {
        let fetcher = Arc::new(MockFetcher::new(flat_prices(dec!(10))));
        let suggester = GasPriceSuggester::new(fetcher.clone(), Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(fetcher.calls(), 1);

        // Every priority comes from the same snapshot
        for priority in GasPriority::ALL {
            assert_eq!(suggester.suggest(priority).await.unwrap(), Wei::new(1_000_000_000));
        }
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_creation_fails_when_fetch_fails() {
        let fetcher = MockFetcher::new(flat_prices(dec!(10)));
        fetcher.set_failure(Some(GasError::Decode("bad body".to_string())));

        let result = GasPriceSuggester::new(fetcher, Duration::from_secs(60)).await;
        assert!(matches!(result, Err(GasError::Decode(_))));
    }

    #[tokio::test]
    async fn test_cached_snapshot_until_max_age() {
        let fetcher = Arc::new(MockFetcher::new(flat_prices(dec!(10))));
        let suggester = GasPriceSuggester::new(fetcher.clone(), Duration::from_millis(50))
            .await
            .unwrap();

        // Negative sentinel snapshot proves the cache is consulted
        suggester.replace_snapshot(flat_prices(dec!(-1)), Instant::now());
        assert_eq!(
            suggester.suggest_fast().await.unwrap(),
            Wei::new(-100_000_000)
        );

        tokio::time::sleep(Duration::from_millis(60)).await;
        let fresh = suggester.suggest_fast().await.unwrap();
        assert!(fresh.is_positive());
        assert_eq!(fetcher.calls(), 2);
        assert_eq!(suggester.snapshot(), flat_prices(dec!(10)));
    }
}
