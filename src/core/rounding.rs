use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{CalcError, Result};

/// Decimal places for monetary values
pub const MONEY_DP: u32 = 2;

/// Decimal places for quantities (gram weights, piece counts)
pub const QUANTITY_DP: u32 = 3;

/// One paisa (0.01), the smallest monetary unit handled by the engine
pub const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Round a monetary value to 2 decimal places, half-up.
///
/// Half-up (midpoint away from zero) matches the manual invoice rounding
/// convention the domain expects: 0.125 -> 0.13, never banker's 0.12.
pub fn quantize_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a quantity to 3 decimal places, half-up.
pub fn quantize_quantity(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(QUANTITY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse user-entered text into an exact decimal.
///
/// Empty or whitespace-only input is treated as zero so blank form fields
/// flow through without a separate check at every call site.
pub fn parse_decimal(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(trimmed)
        .map_err(|_| CalcError::invalid_numeric_value(format!("cannot parse '{}'", trimmed)))
}
