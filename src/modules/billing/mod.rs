pub mod models;
pub mod services;

pub use models::{InvoiceTotals, LineItem, LineQuery, LineSolution, SimpleLine};
pub use services::{BillingCalculator, LineSolver, TotalsCalculator, WeightAllocator};
