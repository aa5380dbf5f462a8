mod tax_config;

pub use tax_config::TaxConfig;
