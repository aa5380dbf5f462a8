use rust_decimal::Decimal;

use crate::core::Result;
use crate::modules::billing::models::{InvoiceTotals, LineItem, LineQuery, LineSolution, SimpleLine};
use crate::modules::billing::services::{LineSolver, TotalsCalculator, WeightAllocator};
use crate::modules::taxes::{GstCalculator, TaxConfig};

/// The billing engine facade: one object, four pure operations.
///
/// Holds only the immutable tax configuration, so a single instance is safe
/// to share across threads and callers can parallelize independent calls
/// freely.
#[derive(Debug, Clone, Copy)]
pub struct BillingCalculator {
    solver: LineSolver,
    totals: TotalsCalculator,
    allocator: WeightAllocator,
}

impl BillingCalculator {
    pub fn new(config: TaxConfig) -> Self {
        let gst = GstCalculator::new(config);
        Self {
            solver: LineSolver::new(gst),
            totals: TotalsCalculator::new(gst),
            allocator: WeightAllocator::new(gst),
        }
    }

    /// Solve a line from any two of quantity, rate, amount and inclusive total.
    pub fn solve(&self, query: &LineQuery) -> Result<LineSolution> {
        self.solver.solve(query)
    }

    /// Solve quantity/rate/amount without tax terms.
    pub fn solve_simple(
        &self,
        quantity: Option<Decimal>,
        rate: Option<Decimal>,
        amount: Option<Decimal>,
    ) -> Result<SimpleLine> {
        self.solver.solve_simple(quantity, rate, amount)
    }

    /// Aggregate line amounts into invoice totals.
    pub fn invoice_totals(
        &self,
        line_items: &[LineItem],
        user_total_inclusive: Option<Decimal>,
    ) -> Result<InvoiceTotals> {
        self.totals.calculate(line_items, user_total_inclusive)
    }

    /// Redistribute line amounts by weight under an override total.
    pub fn allocate_by_weight(
        &self,
        line_items: &[LineItem],
        override_total: Decimal,
    ) -> Result<Vec<LineItem>> {
        self.allocator.allocate(line_items, override_total)
    }
}

impl Default for BillingCalculator {
    fn default() -> Self {
        Self::new(TaxConfig::default())
    }
}
