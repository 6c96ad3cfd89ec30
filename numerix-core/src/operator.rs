//! Operator definitions
//!
//! Every binary operation the dispatcher understands, with its method name
//! and symbol.

use std::fmt;

/// Binary operator enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // ===== Arithmetic =====
    /// Sum: `a + b`
    Sum,
    /// Difference: `a - b`
    Difference,
    /// Product: `a * b`
    Product,
    /// Quotient: `a / b`
    Quotient,

    // ===== Comparison =====
    /// Less than: `a < b`
    LessThan,
    /// Greater than: `a > b`
    GreaterThan,
    /// Equal: `a == b`
    Equal,
}

impl Operator {
    pub const ARITHMETIC: [Operator; 4] = [
        Operator::Sum,
        Operator::Difference,
        Operator::Product,
        Operator::Quotient,
    ];

    pub const COMPARISON: [Operator; 3] =
        [Operator::LessThan, Operator::GreaterThan, Operator::Equal];

    /// Method name of the operator
    pub fn method_name(&self) -> &'static str {
        match self {
            Operator::Sum => "sum",
            Operator::Difference => "difference",
            Operator::Product => "product",
            Operator::Quotient => "quotient",
            Operator::LessThan => "less_than",
            Operator::GreaterThan => "greater_than",
            Operator::Equal => "equal",
        }
    }

    /// Symbol used in rendered tables and messages
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Sum => "+",
            Operator::Difference => "-",
            Operator::Product => "*",
            Operator::Quotient => "/",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::Equal => "==",
        }
    }

    /// Whether the operator produces a new value
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Operator::Sum | Operator::Difference | Operator::Product | Operator::Quotient
        )
    }

    /// Whether the operator produces a bool
    pub fn is_comparison(&self) -> bool {
        !self.is_arithmetic()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operator {}", self.method_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_method_name() {
        assert_eq!(Operator::Sum.method_name(), "sum");
        assert_eq!(Operator::LessThan.method_name(), "less_than");
    }

    #[test]
    fn test_operator_symbol() {
        assert_eq!(Operator::Quotient.symbol(), "/");
        assert_eq!(Operator::Equal.symbol(), "==");
    }

    #[test]
    fn test_operator_kind() {
        assert!(Operator::Product.is_arithmetic());
        assert!(!Operator::Product.is_comparison());
        assert!(Operator::GreaterThan.is_comparison());
    }
}
