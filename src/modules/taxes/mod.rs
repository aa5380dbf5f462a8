pub mod models;
pub mod services;

pub use models::TaxConfig;
pub use services::{GstBreakup, GstCalculator};
