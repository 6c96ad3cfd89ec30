//! Error types for numeric evaluation
//!
//! Every failing operation returns one of these to its immediate caller;
//! nothing is logged or swallowed here.

use thiserror::Error;

use crate::operator::Operator;
use crate::value::Variant;

/// Result alias used throughout the core
pub type Result<T> = std::result::Result<T, NumericError>;

/// Numeric evaluation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// The factory received a native value outside the representable variants
    #[error("Unsupported type: {type_name}")]
    UnsupportedType { type_name: &'static str },

    /// No conversion path between two variants
    #[error("Unsupported promotion from {from} to {to}")]
    UnsupportedPromotion { from: Variant, to: Variant },

    /// The operation is not defined for the operand variant
    #[error("{op} is not supported for {variant}")]
    UnsupportedOperation { op: Operator, variant: Variant },

    /// Quotient divisor is the additive identity
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    /// A conversion produced a value outside the target's range
    #[error("Value {value} does not fit in {target}")]
    ConversionOverflow { value: String, target: Variant },

    /// Checked Integer arithmetic overflowed `i32`
    #[error("Integer overflow in {op}")]
    ArithmeticOverflow { op: Operator },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::DivisionByZero.to_string(),
            "Division by zero is not allowed"
        );
        assert_eq!(
            NumericError::UnsupportedType {
                type_name: "&str"
            }
            .to_string(),
            "Unsupported type: &str"
        );
        assert_eq!(
            NumericError::UnsupportedOperation {
                op: Operator::Product,
                variant: Variant::CharCode,
            }
            .to_string(),
            "operator product is not supported for CharCode"
        );
        assert_eq!(
            NumericError::ConversionOverflow {
                value: "300".to_string(),
                target: Variant::CharCode,
            }
            .to_string(),
            "Value 300 does not fit in CharCode"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::ArithmeticOverflow {
            op: Operator::Sum,
        });
        assert_eq!(err.to_string(), "Integer overflow in operator sum");
    }
}
