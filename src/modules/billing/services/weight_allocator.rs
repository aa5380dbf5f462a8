use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::core::rounding::CENT;
use crate::core::{quantize_money, quantize_quantity, CalcError, Result};
use crate::modules::billing::models::LineItem;
use crate::modules::taxes::GstCalculator;

/// Redistributes line amounts when the user overrides the payable total.
///
/// The override is GST-inclusive; its tax-exclusive equivalent is spread
/// across items in proportion to quantity (the gram weight of each article),
/// then a cent-by-cent correction removes the rounding drift so the new
/// amounts sum to the net subtotal exactly.
#[derive(Debug, Clone, Copy)]
pub struct WeightAllocator {
    gst: GstCalculator,
}

impl WeightAllocator {
    pub fn new(gst: GstCalculator) -> Self {
        Self { gst }
    }

    /// Reallocate amounts proportionally to quantity under an override total.
    ///
    /// Returns new items with updated `rate`/`amount`; `description`,
    /// `hsn_code` and `quantity` are preserved. The input list is untouched.
    pub fn allocate(&self, line_items: &[LineItem], override_total: Decimal) -> Result<Vec<LineItem>> {
        if override_total <= Decimal::ZERO {
            return Err(CalcError::invalid_override_total(
                "override total must be greater than zero",
            ));
        }

        let net_subtotal = quantize_money(self.gst.strip_gst(override_total));

        let quantities: Vec<Decimal> = line_items.iter().map(|item| item.quantity).collect();
        for quantity in &quantities {
            if *quantity < Decimal::ZERO {
                return Err(CalcError::invalid_override_total(
                    "allocation weight cannot be negative",
                ));
            }
        }

        let total_quantity: Decimal = quantities.iter().sum();
        if total_quantity <= Decimal::ZERO {
            return Err(CalcError::invalid_override_total(
                "total allocation weight must be greater than zero",
            ));
        }

        info!(
            items = line_items.len(),
            %override_total,
            %net_subtotal,
            "allocating net subtotal by weight"
        );

        // Raw proportional shares, quantized per item with the signed
        // residual retained for the correction pass.
        let mut shares = Vec::with_capacity(quantities.len());
        let mut residuals = Vec::with_capacity(quantities.len());
        for quantity in &quantities {
            let share = *quantity / total_quantity;
            let raw = net_subtotal * share;
            let quantized = quantize_money(raw);
            shares.push(quantized);
            residuals.push(raw - quantized);
        }

        // Per-item rounding can leave the sum a few cents off the target.
        // Walk the items ranked by residual (largest losers first when
        // adding, largest gainers first when subtracting; stable sort keeps
        // input order on ties) and move one cent per visit until the gap
        // closes.
        let allocated: Decimal = shares.iter().sum();
        let diff = net_subtotal - allocated;
        if !diff.is_zero() {
            let step = if diff > Decimal::ZERO { CENT } else { -CENT };
            let mut cents = (diff.abs() / CENT)
                .to_u64()
                .ok_or_else(|| {
                    CalcError::invalid_override_total("rounding correction out of range")
                })?;

            debug!(%diff, cents, "correcting rounding drift");

            let mut order: Vec<usize> = (0..residuals.len()).collect();
            if diff > Decimal::ZERO {
                order.sort_by(|&left, &right| residuals[right].cmp(&residuals[left]));
            } else {
                order.sort_by(|&left, &right| residuals[left].cmp(&residuals[right]));
            }

            let mut visit = 0usize;
            while cents > 0 {
                let idx = order[visit % order.len()];
                shares[idx] = quantize_money(shares[idx] + step);
                cents -= 1;
                visit += 1;
            }
        }

        let corrected: Decimal = shares.iter().sum();
        debug_assert_eq!(corrected, net_subtotal);

        let updated = line_items
            .iter()
            .zip(shares)
            .map(|(item, amount)| {
                let rate = if item.quantity > Decimal::ZERO {
                    quantize_money(amount / item.quantity)
                } else {
                    Decimal::ZERO
                };

                LineItem {
                    description: item.description.clone(),
                    hsn_code: item.hsn_code.clone(),
                    quantity: quantize_quantity(item.quantity),
                    rate,
                    amount,
                }
            })
            .collect();

        Ok(updated)
    }
}
