// Request/response DTOs for the line solvers. UI layers bind form fields to
// LineQuery (absent field = empty input) and render the fully derived
// LineSolution; no presentation state leaks into the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Partial line parameters for the two-of-four solver.
///
/// At least two fields must be present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineQuery {
    pub quantity: Option<Decimal>,
    /// Per-unit price excluding GST
    pub rate: Option<Decimal>,
    /// Pre-tax line amount
    pub amount: Option<Decimal>,
    /// GST-inclusive total
    pub total_inclusive: Option<Decimal>,
}

impl LineQuery {
    /// Number of supplied parameters
    pub fn provided(&self) -> usize {
        [
            self.quantity.is_some(),
            self.rate.is_some(),
            self.amount.is_some(),
            self.total_inclusive.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Fully derived line parameters with the GST breakup applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSolution {
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
    pub taxable_amount: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub total_gst: Decimal,
    pub total_inclusive: Decimal,
    /// Difference between the caller-supplied inclusive total and the
    /// computed one; zero when no total was supplied
    pub rounded_off: Decimal,
}

/// Quantity/rate/amount triple solved without tax terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleLine {
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
}
