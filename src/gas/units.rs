use super::types::Wei;
use crate::errors::{GasError, GasResult};
use rust_decimal::Decimal;

/// Decimal places between the oracle unit and wei
///
/// The oracle reports gwei * 10, so `raw / 10 * 1e9` simplifies to `raw * 1e8`.
pub const ORACLE_UNIT_DECIMALS: u32 = 8;

/// Convert an oracle-reported value into wei
///
/// The result must be a whole number of wei. Values carrying more than eight
/// significant decimal places are rejected instead of truncated.
///
/// Works on the normalized mantissa/scale pair, so no intermediate rounding
/// can occur and the result always fits: a 96-bit mantissa times 10^8 stays
/// below `i128::MAX`.
pub fn to_wei(value: Decimal) -> GasResult<Wei> {
    let normalized = value.normalize();
    let scale = normalized.scale();

    if scale > ORACLE_UNIT_DECIMALS {
        return Err(GasError::Conversion {
            value: value.to_string(),
            reason: format!(
                "{} decimal places, at most {} allowed",
                scale, ORACLE_UNIT_DECIMALS
            ),
        });
    }

    let factor = 10i128.pow(ORACLE_UNIT_DECIMALS - scale);
    normalized
        .mantissa()
        .checked_mul(factor)
        .map(Wei::new)
        .ok_or_else(|| GasError::Conversion {
            value: value.to_string(),
            reason: "overflow".to_string(),
        })
}
