//! ETH Gas Station API client
//!
//! API Documentation: https://ethgasstation.info
//!
//! Endpoint used:
//! - /json/ethgasAPI.json - current recommendations (fast, fastest, safeLow, average)
//!   in units of gwei * 10, alongside other fields we ignore
use super::fetcher::GasPriceFetcher;
use super::types::RawGasPrices;
use crate::config::{GasStationConfig, ETH_GAS_STATION_URL};
use crate::errors::{GasError, GasResult};
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use url::Url;

/// Request timeout - the oracle normally answers well under a second
pub const TIMEOUT_SECS: u64 = 10;

pub struct EthGasStationClient {
    http_client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl EthGasStationClient {
    pub fn new(endpoint: Url, timeout: Duration) -> GasResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GasError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint,
            timeout,
        })
    }

    /// Client for the public endpoint with the default timeout
    pub fn public() -> GasResult<Self> {
        let endpoint = Url::parse(ETH_GAS_STATION_URL)
            .map_err(|e| GasError::Config(format!("Invalid endpoint: {}", e)))?;
        Self::new(endpoint, Duration::from_secs(TIMEOUT_SECS))
    }

    pub fn from_config(config: &GasStationConfig) -> GasResult<Self> {
        config.validate()?;
        Self::new(config.endpoint()?, config.request_timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn map_transport_error(&self, err: reqwest::Error) -> GasError {
        if err.is_timeout() {
            GasError::Timeout {
                millis: self.timeout.as_millis() as u64,
            }
        } else {
            GasError::Fetch(err.to_string())
        }
    }
}

#[async_trait]
impl GasPriceFetcher for EthGasStationClient {
    fn name(&self) -> &'static str {
        "eth_gas_station"
    }

    async fn fetch(&self) -> GasResult<RawGasPrices> {
        let start = Instant::now();

        let response = self
            .http_client
            .get(self.endpoint.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GasError::HttpStatus {
                status: status.as_u16(),
                endpoint: self.endpoint.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        logger::verbose(LogTag::GasOracle, &format!("Raw oracle response: {}", body));

        let prices: RawGasPrices = serde_json::from_str(&body)
            .map_err(|e| GasError::Decode(format!("Unexpected oracle response: {}", e)))?;

        logger::debug(
            LogTag::GasOracle,
            &format!(
                "Fetched gas prices in {}ms: fast={} fastest={} safeLow={} average={}",
                start.elapsed().as_millis(),
                prices.fast,
                prices.fastest,
                prices.safe_low,
                prices.average
            ),
        );

        if !prices.is_monotonic() {
            logger::warning(
                LogTag::GasOracle,
                "Oracle returned out-of-order priorities (expected fastest >= fast >= average >= safeLow >= 0)",
            );
        }

        Ok(prices)
    }
}
