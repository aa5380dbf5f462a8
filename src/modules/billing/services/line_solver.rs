use rust_decimal::Decimal;
use tracing::warn;

use crate::core::{quantize_money, quantize_quantity, CalcError, Result};
use crate::modules::billing::models::{LineQuery, LineSolution, SimpleLine};
use crate::modules::taxes::GstCalculator;

/// Consistency tolerance when both amount and inclusive total are supplied
const AMOUNT_TOTAL_TOLERANCE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Solves a single invoice line from any two known parameters.
///
/// All derivations run on raw unrounded intermediates; quantization happens
/// once on the returned fields so repeated solving never accumulates drift.
#[derive(Debug, Clone, Copy)]
pub struct LineSolver {
    gst: GstCalculator,
}

impl LineSolver {
    pub fn new(gst: GstCalculator) -> Self {
        Self { gst }
    }

    /// Derive the full line (values plus GST breakup) from any two of
    /// quantity, rate, amount and GST-inclusive total.
    ///
    /// When three or more parameters are supplied the first matching pair in
    /// the ladder below wins and the remaining values are rederived from it.
    pub fn solve(&self, query: &LineQuery) -> Result<LineSolution> {
        if query.provided() < 2 {
            return Err(CalcError::insufficient_parameters(
                "at least two of quantity, rate, amount and total inclusive are required",
            ));
        }

        let supplied_total = query.total_inclusive.is_some();

        let mut qty = query.quantity;
        let mut rate = query.rate;
        let mut amount = query.amount;
        let mut total_inc = query.total_inclusive;

        if let (Some(q), Some(r)) = (qty, rate) {
            let a = q * r;
            amount = Some(a);
            total_inc = Some(self.gst.add_gst(a));
        } else if let (Some(q), Some(a)) = (qty, amount) {
            if q.is_zero() {
                return Err(CalcError::divide_by_zero(
                    "quantity cannot be zero when deriving rate",
                ));
            }
            rate = Some(a / q);
            total_inc = Some(self.gst.add_gst(a));
        } else if let (Some(q), Some(t)) = (qty, total_inc) {
            if q.is_zero() {
                return Err(CalcError::divide_by_zero(
                    "quantity cannot be zero when deriving rate",
                ));
            }
            let a = self.gst.strip_gst(t);
            amount = Some(a);
            rate = Some(a / q);
        } else if let (Some(r), Some(a)) = (rate, amount) {
            if r.is_zero() {
                return Err(CalcError::divide_by_zero(
                    "rate cannot be zero when deriving quantity",
                ));
            }
            qty = Some(a / r);
            total_inc = Some(self.gst.add_gst(a));
        } else if let (Some(r), Some(t)) = (rate, total_inc) {
            if r.is_zero() {
                return Err(CalcError::divide_by_zero(
                    "rate cannot be zero when deriving quantity",
                ));
            }
            let a = self.gst.strip_gst(t);
            amount = Some(a);
            qty = Some(a / r);
        } else if let (Some(a), Some(t)) = (amount, total_inc) {
            // Quantity and rate are not uniquely determined by this pair.
            // Trust the amount when it agrees with the total, otherwise
            // back-derive it from the total, and fall back to a single-unit
            // line. Callers who know the true quantity should pass it as a
            // third parameter, which routes to a quantity branch above.
            let consistent = (self.gst.add_gst(a) - t).abs() <= AMOUNT_TOTAL_TOLERANCE;
            let a = if consistent { a } else { self.gst.strip_gst(t) };

            warn!(
                amount = %a,
                total_inclusive = %t,
                "amount+total solve cannot determine quantity, defaulting to a single unit"
            );

            amount = Some(a);
            qty = Some(Decimal::ONE);
            rate = Some(a);
        }

        let (Some(q), Some(r), Some(a), Some(t)) = (qty, rate, amount, total_inc) else {
            return Err(CalcError::insufficient_parameters(
                "unsupported parameter combination",
            ));
        };

        let breakup = self.gst.breakup(a);
        let calculated_total = quantize_money(a + breakup.total_gst);

        let (target_total, rounded_off) = if supplied_total {
            let target = quantize_money(t);
            (target, target - calculated_total)
        } else {
            (calculated_total, Decimal::ZERO)
        };

        Ok(LineSolution {
            quantity: quantize_quantity(q),
            rate: quantize_money(r),
            amount: quantize_money(a),
            taxable_amount: quantize_money(a),
            cgst: breakup.cgst,
            sgst: breakup.sgst,
            total_gst: breakup.total_gst,
            total_inclusive: target_total,
            rounded_off: quantize_money(rounded_off),
        })
    }

    /// Derive the missing one of quantity, rate and amount, ignoring tax.
    pub fn solve_simple(
        &self,
        quantity: Option<Decimal>,
        rate: Option<Decimal>,
        amount: Option<Decimal>,
    ) -> Result<SimpleLine> {
        let provided = [quantity, rate, amount]
            .iter()
            .filter(|value| value.is_some())
            .count();

        if provided < 2 {
            return Err(CalcError::insufficient_parameters(
                "at least two of quantity, rate and amount are required",
            ));
        }

        let (q, r, a) = if let (Some(q), Some(r)) = (quantity, rate) {
            (q, r, q * r)
        } else if let (Some(q), Some(a)) = (quantity, amount) {
            if q.is_zero() {
                return Err(CalcError::divide_by_zero("quantity cannot be zero"));
            }
            (q, a / q, a)
        } else if let (Some(r), Some(a)) = (rate, amount) {
            if r.is_zero() {
                return Err(CalcError::divide_by_zero("rate cannot be zero"));
            }
            (a / r, r, a)
        } else {
            return Err(CalcError::insufficient_parameters(
                "unsupported parameter combination",
            ));
        };

        Ok(SimpleLine {
            quantity: quantize_quantity(q),
            rate: quantize_money(r),
            amount: quantize_money(a),
        })
    }
}
