/// Application-wide Result type
pub type Result<T> = std::result::Result<T, CalcError>;

/// Billing calculation error type
///
/// Every variant represents invalid caller input. The engine is pure
/// computation, so there are no transient or system failure modes and
/// no retry semantics: an operation either returns a complete result
/// set or exactly one of these errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Fewer solver inputs supplied than the operation requires
    #[error("Insufficient parameters: {0}")]
    InsufficientParameters(String),

    /// A zero quantity or rate was used where division is required
    #[error("Division by zero: {0}")]
    DivideByZero(String),

    /// A supplied value could not be parsed as an exact decimal
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Override total or total allocation weight is not positive
    #[error("Invalid override total: {0}")]
    InvalidOverrideTotal(String),
}

// Helper functions for common error scenarios
impl CalcError {
    pub fn insufficient_parameters(msg: impl Into<String>) -> Self {
        CalcError::InsufficientParameters(msg.into())
    }

    pub fn divide_by_zero(msg: impl Into<String>) -> Self {
        CalcError::DivideByZero(msg.into())
    }

    pub fn invalid_numeric_value(msg: impl Into<String>) -> Self {
        CalcError::InvalidNumericValue(msg.into())
    }

    pub fn invalid_override_total(msg: impl Into<String>) -> Self {
        CalcError::InvalidOverrideTotal(msg.into())
    }
}
