use super::types::{GasPriority, RawGasPrices, Wei};
use super::units::to_wei;
use crate::errors::GasResult;

/// Pick the price for `priority` out of a snapshot and convert it to wei
pub fn resolve_gas_price(priority: GasPriority, prices: &RawGasPrices) -> GasResult<Wei> {
    to_wei(prices.get(priority))
}

/// String form of [`resolve_gas_price`]
///
/// Unknown priority names fail with `GasError::UnsupportedTier`.
pub fn resolve_gas_price_str(priority: &str, prices: &RawGasPrices) -> GasResult<Wei> {
    resolve_gas_price(priority.parse()?, prices)
}
