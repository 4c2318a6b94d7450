//! Error types for the gas price client
//!
//! Every failure is returned to the immediate caller. Nothing in this crate
//! retries on its own, so the helpers below are advisory for callers that
//! want to schedule their own retries.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GasError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    #[error("Timeout error: gas oracle did not answer within {millis}ms")]
    Timeout { millis: u64 },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unsupported gas priority: {0}")]
    UnsupportedTier(String),

    #[error("Conversion error: cannot express {value} as whole wei ({reason})")]
    Conversion { value: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GasError {
    /// True for failures originating from the network round trip
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            GasError::Fetch(_) | GasError::HttpStatus { .. } | GasError::Timeout { .. }
        )
    }

    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GasError::Config(_))
    }

    pub fn retry_after_seconds(&self) -> Option<u64> {
        match self {
            GasError::Fetch(_) => Some(10),
            GasError::HttpStatus { status, .. } if *status == 429 => Some(60),
            GasError::HttpStatus { .. } => Some(30),
            GasError::Timeout { .. } => Some(5),
            GasError::Decode(_) => Some(30),
            _ => None,
        }
    }
}

pub type GasResult<T> = Result<T, GasError>;
