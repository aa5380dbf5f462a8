//! GST Billing Calculation Engine
//!
//! Decimal-precision billing math for jewellery retail invoicing: a
//! two-of-four line solver, invoice totals aggregation with rounded-off
//! reconciliation, and weight-proportional amount reallocation that sums
//! exactly to the target. All operations are pure functions of their inputs
//! and an immutable CGST/SGST configuration; persistence, rendering and UI
//! state belong to the caller.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{CalcError, Result};
pub use crate::modules::billing::{
    BillingCalculator, InvoiceTotals, LineItem, LineQuery, LineSolution, SimpleLine,
};
pub use crate::modules::taxes::{GstBreakup, GstCalculator, TaxConfig};
