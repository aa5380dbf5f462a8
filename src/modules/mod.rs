pub mod billing;
pub mod taxes;
