use crate::errors::GasError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Gas price priority levels reported by the oracle
///
/// The serialized form matches the oracle's JSON keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GasPriority {
    /// Mined in under ~2 minutes
    #[serde(rename = "fast")]
    Fast,

    /// Mined in under ~30 seconds
    #[serde(rename = "fastest")]
    Fastest,

    /// Cheapest price expected to be mined in under ~30 minutes
    #[serde(rename = "safeLow", alias = "safe-low", alias = "safe_low")]
    SafeLow,

    /// Mined in under ~5 minutes
    #[serde(rename = "average")]
    Average,
}

impl GasPriority {
    pub const ALL: [GasPriority; 4] = [
        GasPriority::Fast,
        GasPriority::Fastest,
        GasPriority::SafeLow,
        GasPriority::Average,
    ];

    /// Key used by the oracle response for this priority
    pub fn as_str(&self) -> &'static str {
        match self {
            GasPriority::Fast => "fast",
            GasPriority::Fastest => "fastest",
            GasPriority::SafeLow => "safeLow",
            GasPriority::Average => "average",
        }
    }
}

impl Default for GasPriority {
    fn default() -> Self {
        GasPriority::Fast
    }
}

impl std::fmt::Display for GasPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GasPriority {
    type Err = GasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(GasPriority::Fast),
            "fastest" => Ok(GasPriority::Fastest),
            "safelow" | "safe-low" | "safe_low" => Ok(GasPriority::SafeLow),
            "average" => Ok(GasPriority::Average),
            _ => Err(GasError::UnsupportedTier(s.to_string())),
        }
    }
}

/// One snapshot of oracle prices, in the oracle's own unit (gwei * 10)
///
/// Values are kept exactly as reported. The usual ordering
/// fastest >= fast >= average >= safeLow >= 0 is not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGasPrices {
    #[serde(deserialize_with = "deserialize_decimal")]
    pub fast: Decimal,

    #[serde(deserialize_with = "deserialize_decimal")]
    pub fastest: Decimal,

    #[serde(rename = "safeLow", deserialize_with = "deserialize_decimal")]
    pub safe_low: Decimal,

    #[serde(deserialize_with = "deserialize_decimal")]
    pub average: Decimal,
}

impl RawGasPrices {
    pub fn get(&self, priority: GasPriority) -> Decimal {
        match priority {
            GasPriority::Fast => self.fast,
            GasPriority::Fastest => self.fastest,
            GasPriority::SafeLow => self.safe_low,
            GasPriority::Average => self.average,
        }
    }

    /// Whether the snapshot follows the ordering the oracle normally reports
    pub fn is_monotonic(&self) -> bool {
        self.fastest >= self.fast
            && self.fast >= self.average
            && self.average >= self.safe_low
            && self.safe_low >= Decimal::ZERO
    }
}

/// Accepts a JSON number or a numeric string without going through f64
///
/// JSON numbers arrive with their source text intact (serde_json's
/// `arbitrary_precision`), so `10.1` stays exactly `10.1`.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    let text = match &value {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.trim().to_string(),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected a number or numeric string, got {}",
                other
            )))
        }
    };

    parse_decimal(&text).map_err(serde::de::Error::custom)
}

pub(crate) fn parse_decimal(text: &str) -> Result<Decimal, String> {
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str_exact(text)
    }
    .map_err(|e| format!("invalid decimal '{}': {}", text, e))
}

/// Gas price in wei
///
/// Signed so that sentinel values survive in caches and upstream negatives
/// surface instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Wei(i128);

impl Wei {
    pub const ZERO: Wei = Wei(0);

    pub fn new(value: i128) -> Self {
        Wei(value)
    }

    pub fn as_i128(&self) -> i128 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Whole gwei, truncated
    pub fn to_gwei(&self) -> i128 {
        self.0 / 1_000_000_000
    }
}

impl From<i128> for Wei {
    fn from(value: i128) -> Self {
        Wei(value)
    }
}

impl std::fmt::Display for Wei {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
