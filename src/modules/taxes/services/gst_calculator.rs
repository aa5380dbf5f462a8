use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::quantize_money;
use crate::modules::taxes::models::TaxConfig;

/// CGST/SGST split for a taxable amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstBreakup {
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub total_gst: Decimal,
}

/// GstCalculator handles the dual-rate GST arithmetic shared by every
/// billing operation: splitting tax on a taxable base and moving between
/// pre-tax and GST-inclusive amounts.
#[derive(Debug, Clone, Copy)]
pub struct GstCalculator {
    config: TaxConfig,
}

impl GstCalculator {
    pub fn new(config: TaxConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TaxConfig {
        &self.config
    }

    /// Split GST on a taxable amount.
    ///
    /// CGST and SGST are quantized independently and summed afterwards.
    /// Printed invoices show the two components separately, so the total
    /// must be the sum of the rounded halves, not a single combined rounding.
    pub fn breakup(&self, taxable: Decimal) -> GstBreakup {
        let cgst = quantize_money(taxable * self.config.cgst_rate / Decimal::ONE_HUNDRED);
        let sgst = quantize_money(taxable * self.config.sgst_rate / Decimal::ONE_HUNDRED);

        GstBreakup {
            cgst,
            sgst,
            total_gst: cgst + sgst,
        }
    }

    /// Gross up a pre-tax amount to its GST-inclusive total, unrounded
    pub fn add_gst(&self, amount: Decimal) -> Decimal {
        amount * self.config.gross_up_factor()
    }

    /// Remove embedded GST from an inclusive total, unrounded
    pub fn strip_gst(&self, inclusive: Decimal) -> Decimal {
        inclusive / self.config.gross_up_factor()
    }
}
