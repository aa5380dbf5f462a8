pub mod error;
pub mod rounding;

pub use error::{CalcError, Result};
pub use rounding::{parse_decimal, quantize_money, quantize_quantity};
