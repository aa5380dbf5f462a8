pub mod billing_calculator;
pub mod line_solver;
pub mod totals_calculator;
pub mod weight_allocator;

pub use billing_calculator::BillingCalculator;
pub use line_solver::LineSolver;
pub use totals_calculator::TotalsCalculator;
pub use weight_allocator::WeightAllocator;
