//! Test doubles shared by the gas module tests

use super::fetcher::GasPriceFetcher;
use super::types::RawGasPrices;
use crate::errors::{GasError, GasResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

/// Snapshot with every priority set to `value` oracle units
pub(crate) fn flat_prices(value: Decimal) -> RawGasPrices {
    RawGasPrices {
        fast: value,
        fastest: value,
        safe_low: value,
        average: value,
    }
}

/// In-memory fetcher that counts calls
///
/// In incrementing mode the n-th call (starting at 1) reports `base + n`
/// for every priority, so each fetch is distinguishable.
pub(crate) struct MockFetcher {
    prices: Mutex<RawGasPrices>,
    failure: Mutex<Option<GasError>>,
    incrementing: bool,
    delay: Duration,
    calls: AtomicUsize,
}

impl MockFetcher {
    pub(crate) fn new(prices: RawGasPrices) -> Self {
        Self {
            prices: Mutex::new(prices),
            failure: Mutex::new(None),
            incrementing: false,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn incrementing(base: Decimal) -> Self {
        Self {
            incrementing: true,
            ..Self::new(flat_prices(base))
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn set_prices(&self, prices: RawGasPrices) {
        *self.prices.lock() = prices;
    }

    /// Every fetch fails with `err` until cleared with `None`
    pub(crate) fn set_failure(&self, err: Option<GasError>) {
        *self.failure.lock() = err;
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GasPriceFetcher for MockFetcher {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch(&self) -> GasResult<RawGasPrices> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(err) = self.failure.lock().clone() {
            return Err(err);
        }

        let prices = *self.prices.lock();
        if self.incrementing {
            let bump = Decimal::from(call as u64);
            Ok(RawGasPrices {
                fast: prices.fast + bump,
                fastest: prices.fastest + bump,
                safe_low: prices.safe_low + bump,
                average: prices.average + bump,
            })
        } else {
            Ok(prices)
        }
    }
}

/// Serve a canned HTTP response on a local port
///
/// Every connection gets the same `status` line and `body` after `delay`.
/// Returns the endpoint url and a counter of requests served.
pub(crate) async fn spawn_oracle(
    status: &'static str,
    body: &'static str,
    delay: Duration,
) -> (Url, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let served = hits.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let served = served.clone();
            tokio::spawn(async move {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                served.fetch_add(1, Ordering::SeqCst);

                tokio::time::sleep(delay).await;

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    let url = Url::parse(&format!("http://{}/json/ethgasAPI.json", addr)).unwrap();
    (url, hits)
}
