mod invoice_totals;
mod line_item;
mod line_solution;

pub use invoice_totals::InvoiceTotals;
pub use line_item::LineItem;
pub use line_solution::{LineQuery, LineSolution, SimpleLine};
