use rust_decimal::Decimal;

use crate::core::{quantize_money, Result};
use crate::modules::billing::models::{InvoiceTotals, LineItem};
use crate::modules::taxes::GstCalculator;

/// Aggregates line amounts into invoice-level totals.
#[derive(Debug, Clone, Copy)]
pub struct TotalsCalculator {
    gst: GstCalculator,
}

impl TotalsCalculator {
    pub fn new(gst: GstCalculator) -> Self {
        Self { gst }
    }

    /// Sum line amounts, apply GST on the subtotal, and reconcile an
    /// optional user-entered payable total.
    ///
    /// Amounts are summed raw and the subtotal quantized once, so the GST
    /// base matches what the invoice prints as the subtotal. The rounded-off
    /// figure may be negative when the user rounds the bill down.
    pub fn calculate(
        &self,
        line_items: &[LineItem],
        user_total_inclusive: Option<Decimal>,
    ) -> Result<InvoiceTotals> {
        let raw_subtotal: Decimal = line_items.iter().map(|item| item.amount).sum();
        let subtotal = quantize_money(raw_subtotal);

        let breakup = self.gst.breakup(subtotal);
        let calculated_total = quantize_money(subtotal + breakup.total_gst);

        let (final_total, rounded_off) = match user_total_inclusive {
            Some(user_total) => {
                let target = quantize_money(user_total);
                (target, target - calculated_total)
            }
            None => (calculated_total, Decimal::ZERO),
        };

        Ok(InvoiceTotals {
            subtotal,
            cgst: breakup.cgst,
            sgst: breakup.sgst,
            total_gst: breakup.total_gst,
            calculated_total,
            final_total,
            rounded_off: quantize_money(rounded_off),
        })
    }
}
