use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{CalcError, Result};

/// Immutable CGST/SGST rate configuration.
///
/// Rates are percentages (e.g. 1.5 for 1.5%), fixed for the lifetime of a
/// calculator instance. Intra-state jewellery sales carry both components on
/// the same taxable base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfig {
    pub cgst_rate: Decimal,
    pub sgst_rate: Decimal,
    /// Combined rate, derived once at construction
    pub total_rate: Decimal,
}

impl TaxConfig {
    /// Create a tax configuration, rejecting negative rates.
    pub fn new(cgst_rate: Decimal, sgst_rate: Decimal) -> Result<Self> {
        if cgst_rate < Decimal::ZERO {
            return Err(CalcError::invalid_numeric_value(format!(
                "CGST rate cannot be negative, got: {}",
                cgst_rate
            )));
        }

        if sgst_rate < Decimal::ZERO {
            return Err(CalcError::invalid_numeric_value(format!(
                "SGST rate cannot be negative, got: {}",
                sgst_rate
            )));
        }

        Ok(Self {
            cgst_rate,
            sgst_rate,
            total_rate: cgst_rate + sgst_rate,
        })
    }

    /// Multiplier that converts a pre-tax amount into its GST-inclusive total
    pub fn gross_up_factor(&self) -> Decimal {
        Decimal::ONE + self.total_rate / Decimal::ONE_HUNDRED
    }
}

impl Default for TaxConfig {
    /// The customary 1.5% + 1.5% split for gold and silver articles
    fn default() -> Self {
        let rate = Decimal::new(15, 1);
        Self {
            cgst_rate: rate,
            sgst_rate: rate,
            total_rate: rate + rate,
        }
    }
}
