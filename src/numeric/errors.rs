// ============================================================================
// Numeric Errors
// Error types for monetary arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during monetary arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the maximum representable amount
    Overflow,
    /// Result below the minimum representable amount
    Underflow,
    /// Attempted division by a divisor that rounds to zero cents
    DivisionByZero,
    /// Input is not a finite number or could not be parsed
    InvalidNumber,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum amount")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum amount")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidNumber => {
                write!(f, "invalid number: input is not a finite numeric value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for monetary operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum amount"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::InvalidNumber, NumericError::InvalidNumber);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
    }
}
