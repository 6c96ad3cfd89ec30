//! Operation dispatcher
//!
//! Arithmetic and comparison over promoted operands. The `Evaluator` carries
//! the configuration explicitly; the inherent methods on `Numeric` and the
//! `std::ops` impls use the default configuration.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Sub};

use num_complex::Complex;
use num_traits::Float;
use numerix_config::{CharOverflowPolicy, NumericConfig};
use tracing::{debug, trace};

use crate::error::{NumericError, Result};
use crate::operator::Operator;
use crate::promotion::{promote, Operands};
use crate::render::render;
use crate::value::{Numeric, Variant};

/// Largest code point a CharCode ⊕ CharCode result may carry
const CHAR_RESULT_MAX: i64 = 0xFF;

/// Evaluates operations under an explicit configuration
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: NumericConfig,
}

impl Evaluator {
    pub fn new(config: NumericConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NumericConfig {
        &self.config
    }

    pub fn sum(&self, a: &Numeric, b: &Numeric) -> Result<Numeric> {
        self.apply(Operator::Sum, a, b)
    }

    pub fn difference(&self, a: &Numeric, b: &Numeric) -> Result<Numeric> {
        self.apply(Operator::Difference, a, b)
    }

    pub fn product(&self, a: &Numeric, b: &Numeric) -> Result<Numeric> {
        self.apply(Operator::Product, a, b)
    }

    pub fn quotient(&self, a: &Numeric, b: &Numeric) -> Result<Numeric> {
        self.apply(Operator::Quotient, a, b)
    }

    /// Apply an arithmetic operator
    ///
    /// Comparison operators fail with `UnsupportedOperation`; use
    /// [`Evaluator::check`] for those.
    pub fn apply(&self, op: Operator, a: &Numeric, b: &Numeric) -> Result<Numeric> {
        if !op.is_arithmetic() {
            return Err(NumericError::UnsupportedOperation {
                op,
                variant: a.variant(),
            });
        }

        trace!(
            target: "numerix::arithmetic",
            op = op.symbol(),
            lhs = %a.variant(),
            rhs = %b.variant(),
            "dispatch"
        );

        let operands = promote(a, b)?;
        let variant = operands.variant();
        match operands {
            Operands::Integer(x, y) => integer_op(op, x, y).map(Numeric::Integer),
            Operands::Float32(x, y) => real_op(op, variant, x, y).map(Numeric::Float32),
            Operands::Float64(x, y) => real_op(op, variant, x, y).map(Numeric::Float64),
            Operands::Complex32(x, y) => complex_op(op, variant, x, y).map(Numeric::Complex32),
            Operands::Complex64(x, y) => complex_op(op, variant, x, y).map(Numeric::Complex64),
            Operands::CharCode(x, y) => self.char_op(op, x, y),
        }
    }

    /// Evaluate a comparison operator
    ///
    /// Arithmetic operators fail with `UnsupportedOperation`.
    pub fn check(&self, op: Operator, a: &Numeric, b: &Numeric) -> Result<bool> {
        if !op.is_comparison() {
            return Err(NumericError::UnsupportedOperation {
                op,
                variant: a.variant(),
            });
        }
        Ok(match op {
            Operator::LessThan => less_than(a, b),
            Operator::GreaterThan => greater_than(a, b),
            _ => equal(a, b),
        })
    }

    /// Render with the configured precision
    pub fn render(&self, value: &Numeric) -> String {
        render(value, &self.config.render)
    }

    fn char_op(&self, op: Operator, x: char, y: char) -> Result<Numeric> {
        let (x, y) = (i64::from(u32::from(x)), i64::from(u32::from(y)));
        let raw = match op {
            Operator::Sum => x + y,
            Operator::Difference => x - y,
            _ => {
                return Err(NumericError::UnsupportedOperation {
                    op,
                    variant: Variant::CharCode,
                })
            }
        };

        let code = match self.config.char_overflow {
            _ if (0..=CHAR_RESULT_MAX).contains(&raw) => raw,
            CharOverflowPolicy::Clamp => {
                let clamped = raw.clamp(0, CHAR_RESULT_MAX);
                debug!(
                    target: "numerix::arithmetic",
                    raw,
                    clamped,
                    "character result clamped into byte range"
                );
                clamped
            }
            CharOverflowPolicy::Reject => {
                return Err(NumericError::ConversionOverflow {
                    value: raw.to_string(),
                    target: Variant::CharCode,
                })
            }
        };
        Ok(Numeric::CharCode(char::from(code as u8)))
    }
}

fn integer_op(op: Operator, x: i32, y: i32) -> Result<i32> {
    let result = match op {
        Operator::Sum => x.checked_add(y),
        Operator::Difference => x.checked_sub(y),
        Operator::Product => x.checked_mul(y),
        Operator::Quotient => {
            if y == 0 {
                return Err(NumericError::DivisionByZero);
            }
            x.checked_div(y)
        }
        _ => {
            return Err(NumericError::UnsupportedOperation {
                op,
                variant: Variant::Integer,
            })
        }
    };
    result.ok_or(NumericError::ArithmeticOverflow { op })
}

fn real_op<T: Float>(op: Operator, variant: Variant, x: T, y: T) -> Result<T> {
    match op {
        Operator::Sum => Ok(x + y),
        Operator::Difference => Ok(x - y),
        Operator::Product => Ok(x * y),
        Operator::Quotient if y.is_zero() => Err(NumericError::DivisionByZero),
        Operator::Quotient => Ok(x / y),
        _ => Err(NumericError::UnsupportedOperation { op, variant }),
    }
}

fn complex_op<T: Float>(
    op: Operator,
    variant: Variant,
    x: Complex<T>,
    y: Complex<T>,
) -> Result<Complex<T>> {
    match op {
        Operator::Sum => Ok(x + y),
        Operator::Difference => Ok(x - y),
        Operator::Product => Ok(x * y),
        Operator::Quotient if y.norm().is_zero() => Err(NumericError::DivisionByZero),
        Operator::Quotient => Ok(x / y),
        _ => Err(NumericError::UnsupportedOperation { op, variant }),
    }
}

// ==================== Comparison ====================

/// Partial ordering after promotion
///
/// Complex values order lexicographically: real part first, then imaginary.
/// `None` when a NaN is involved.
pub fn compare(a: &Numeric, b: &Numeric) -> Option<Ordering> {
    // Promotion over the six variants cannot fail
    let ordering = match promote(a, b).ok()? {
        Operands::Integer(x, y) => Some(x.cmp(&y)),
        Operands::Float32(x, y) => x.partial_cmp(&y),
        Operands::Float64(x, y) => x.partial_cmp(&y),
        Operands::Complex32(x, y) => lexicographic(x, y),
        Operands::Complex64(x, y) => lexicographic(x, y),
        Operands::CharCode(x, y) => Some(x.cmp(&y)),
    };
    trace!(target: "numerix::comparison", ?ordering, "compared");
    ordering
}

fn lexicographic<T: Float>(x: Complex<T>, y: Complex<T>) -> Option<Ordering> {
    match x.re.partial_cmp(&y.re)? {
        Ordering::Equal => x.im.partial_cmp(&y.im),
        ordering => Some(ordering),
    }
}

/// Total ordering for use with `sort_by`
///
/// Every value embeds exactly in `Complex64`, so both sides are compared
/// there rather than in their pairwise promotion target; this keeps the
/// order transitive across variants. Components use IEEE 754 `totalOrder`
/// (NaN after +inf, -0.0 before +0.0). Agrees with [`less_than`] whenever
/// no NaN is involved and promotion of the pair is exact.
pub fn total_cmp(a: &Numeric, b: &Numeric) -> Ordering {
    let (x, y) = (a.to_complex64(), b.to_complex64());
    x.re.total_cmp(&y.re).then_with(|| x.im.total_cmp(&y.im))
}

pub fn less_than(a: &Numeric, b: &Numeric) -> bool {
    compare(a, b) == Some(Ordering::Less)
}

pub fn greater_than(a: &Numeric, b: &Numeric) -> bool {
    compare(a, b) == Some(Ordering::Greater)
}

/// Equality after promotion; complex values need both components equal
pub fn equal(a: &Numeric, b: &Numeric) -> bool {
    compare(a, b) == Some(Ordering::Equal)
}

// ==================== Convenience API ====================

impl Numeric {
    pub fn sum(&self, other: &Numeric) -> Result<Numeric> {
        Evaluator::default().sum(self, other)
    }

    pub fn difference(&self, other: &Numeric) -> Result<Numeric> {
        Evaluator::default().difference(self, other)
    }

    pub fn product(&self, other: &Numeric) -> Result<Numeric> {
        Evaluator::default().product(self, other)
    }

    pub fn quotient(&self, other: &Numeric) -> Result<Numeric> {
        Evaluator::default().quotient(self, other)
    }

    pub fn less_than(&self, other: &Numeric) -> bool {
        less_than(self, other)
    }

    pub fn greater_than(&self, other: &Numeric) -> bool {
        greater_than(self, other)
    }

    pub fn equal(&self, other: &Numeric) -> bool {
        equal(self, other)
    }

    pub fn compare(&self, other: &Numeric) -> Option<Ordering> {
        compare(self, other)
    }

    pub fn total_cmp(&self, other: &Numeric) -> Ordering {
        total_cmp(self, other)
    }
}

macro_rules! impl_binary_op {
    ($($trait:ident :: $method:ident => $op:ident),* $(,)?) => {
        $(
            impl $trait for &Numeric {
                type Output = Result<Numeric>;

                fn $method(self, rhs: Self) -> Self::Output {
                    Evaluator::default().apply(Operator::$op, self, rhs)
                }
            }

            impl $trait for Numeric {
                type Output = Result<Numeric>;

                fn $method(self, rhs: Self) -> Self::Output {
                    Evaluator::default().apply(Operator::$op, &self, &rhs)
                }
            }
        )*
    };
}

impl_binary_op! {
    Add::add => Sum,
    Sub::sub => Difference,
    Mul::mul => Product,
    Div::div => Quotient,
}
