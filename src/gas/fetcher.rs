use super::types::RawGasPrices;
use crate::errors::GasResult;
use async_trait::async_trait;
use std::sync::Arc;

/// A source of gas price snapshots
///
/// Implementations perform one round trip per call and keep no cache;
/// caching is layered on top by [`GasPriceManager`](super::GasPriceManager)
/// and [`GasPriceSuggester`](super::GasPriceSuggester).
#[async_trait]
pub trait GasPriceFetcher: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    async fn fetch(&self) -> GasResult<RawGasPrices>;
}

#[async_trait]
impl<F> GasPriceFetcher for Arc<F>
where
    F: GasPriceFetcher + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn fetch(&self) -> GasResult<RawGasPrices> {
        (**self).fetch().await
    }
}
