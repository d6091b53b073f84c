// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision decimal operations
// ============================================================================

use thiserror::Error;

/// Errors that can occur while parsing, computing or rounding a [`Decimal`].
///
/// [`Decimal`]: super::Decimal
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Malformed text, a non-finite float, or raw parts that break the invariants
    #[error("[DecimalError] Invalid argument: {0}")]
    InvalidArgument(String),

    /// Attempted division by zero
    #[error("[DecimalError] Division by zero")]
    DivisionByZero,

    /// Group exponent exceeded the representable range
    #[error("[DecimalError] Exponent out of range: {0}")]
    ExponentOutOfRange(i64),
}

impl DecimalError {
    pub(crate) fn invalid(value: impl std::fmt::Display) -> Self {
        DecimalError::InvalidArgument(value.to_string())
    }
}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DecimalError::invalid("1.2.3").to_string(),
            "[DecimalError] Invalid argument: 1.2.3"
        );
        assert_eq!(
            DecimalError::DivisionByZero.to_string(),
            "[DecimalError] Division by zero"
        );
        assert_eq!(
            DecimalError::ExponentOutOfRange(-7).to_string(),
            "[DecimalError] Exponent out of range: -7"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(DecimalError::DivisionByZero, DecimalError::DivisionByZero);
        assert_ne!(DecimalError::invalid("x"), DecimalError::invalid("y"));
    }
}
