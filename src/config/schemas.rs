//! Configuration schema for the gas price client
//!
//! Defined with `config_struct!`, so every field has an embedded default and
//! a TOML file only needs the keys it wants to override:
//!
//! ```toml
//! endpoint_url = "https://ethgasstation.info/json/ethgasAPI.json"
//! max_age_ms = 15000
//! default_priority = "fastest"
//! ```
use crate::config_struct;
use crate::errors::{GasError, GasResult};
use crate::gas::GasPriority;
use std::time::Duration;
use url::Url;

/// Public ETH Gas Station endpoint
pub const ETH_GAS_STATION_URL: &str = "https://ethgasstation.info/json/ethgasAPI.json";

config_struct! {
    /// Gas oracle client configuration
    pub struct GasStationConfig {
        /// Oracle endpoint returning the fast/fastest/safeLow/average JSON object
        endpoint_url: String = ETH_GAS_STATION_URL.to_string(),

        /// Sent as the `api-key` query parameter when set
        api_key: Option<String> = None,

        /// Cached prices older than this are refetched
        max_age_ms: u64 = 30_000,

        default_priority: GasPriority = GasPriority::Fast,

        // HTTP client timeout
        request_timeout_secs: u64 = 10,

        /// Manager-level bound on one fetch; 0 disables it
        fetch_timeout_ms: u64 = 0,
    }
}

impl GasStationConfig {
    pub fn max_age(&self) -> Duration {
        Duration::from_millis(self.max_age_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        if self.fetch_timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.fetch_timeout_ms))
        }
    }

    /// Parsed endpoint with the api key applied
    pub fn endpoint(&self) -> GasResult<Url> {
        let mut url = Url::parse(&self.endpoint_url).map_err(|e| {
            GasError::Config(format!("Invalid endpoint_url '{}': {}", self.endpoint_url, e))
        })?;

        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            url.query_pairs_mut().append_pair("api-key", key);
        }

        Ok(url)
    }

    pub fn validate(&self) -> GasResult<()> {
        self.endpoint()?;

        if self.max_age_ms == 0 {
            return Err(GasError::Config("max_age_ms must be greater than 0".to_string()));
        }

        if self.request_timeout_secs == 0 {
            return Err(GasError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
