// A line item is one row of a jewellery invoice: an article description,
// its HSN classification code, a weight or piece count, a per-gram/per-piece
// rate excluding GST, and the pre-tax amount.
//
// The engine treats line items as plain values. It never mutates a caller's
// list; operations that change amounts return new items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{quantize_money, quantize_quantity};

/// A single invoice line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Article description (e.g. "Gold ring 22K")
    pub description: String,

    /// HSN classification code, opaque to the engine
    pub hsn_code: String,

    /// Physical weight or count, 3 decimal places
    pub quantity: Decimal,

    /// Per-unit price excluding GST, 2 decimal places
    pub rate: Decimal,

    /// Pre-tax line amount (quantity x rate), 2 decimal places
    pub amount: Decimal,
}

impl LineItem {
    /// Build a line item from quantity and rate, deriving the amount.
    pub fn new(
        description: impl Into<String>,
        hsn_code: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            hsn_code: hsn_code.into(),
            quantity: quantize_quantity(quantity),
            rate: quantize_money(rate),
            amount: quantize_money(quantity * rate),
        }
    }

    /// Build a line item with an explicit pre-tax amount.
    pub fn with_amount(
        description: impl Into<String>,
        hsn_code: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
        amount: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            hsn_code: hsn_code.into(),
            quantity: quantize_quantity(quantity),
            rate: quantize_money(rate),
            amount: quantize_money(amount),
        }
    }
}
