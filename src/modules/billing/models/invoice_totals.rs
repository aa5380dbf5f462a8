use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated invoice-level figures.
///
/// `final_total` equals `calculated_total` unless the user overrode the
/// payable amount, in which case `rounded_off` carries the (possibly
/// negative) difference that reconciles the printed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub total_gst: Decimal,
    pub calculated_total: Decimal,
    pub final_total: Decimal,
    pub rounded_off: Decimal,
}
