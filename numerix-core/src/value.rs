//! Numeric value representation
//!
//! A closed tagged union over six variants. Values are `Copy` and never
//! mutated; every operation returns a new `Numeric`.

use std::fmt;

use num_complex::{Complex32, Complex64};

/// A dynamically-typed numeric value
///
/// `PartialEq` is structural: `Integer(1) != Float64(1.0)`.
/// Use [`Numeric::equal`] for equality after promotion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i32),
    Float32(f32),
    Float64(f64),
    Complex32(Complex32),
    Complex64(Complex64),
    /// A Unicode scalar; arithmetic works on its code point
    CharCode(char),
}

/// Variant tag of a [`Numeric`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    Integer,
    Float32,
    Float64,
    Complex32,
    Complex64,
    CharCode,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Integer,
        Variant::Float32,
        Variant::Float64,
        Variant::Complex32,
        Variant::Complex64,
        Variant::CharCode,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Integer => "Integer",
            Variant::Float32 => "Float32",
            Variant::Float64 => "Float64",
            Variant::Complex32 => "Complex32",
            Variant::Complex64 => "Complex64",
            Variant::CharCode => "CharCode",
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Variant::Complex32 | Variant::Complex64)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Variant::Float32 | Variant::Float64)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Numeric {
    // ==================== Constructors ====================

    /// Complex32 from real and imaginary parts
    pub fn complex32(re: f32, im: f32) -> Self {
        Numeric::Complex32(Complex32::new(re, im))
    }

    /// Complex64 from real and imaginary parts
    pub fn complex64(re: f64, im: f64) -> Self {
        Numeric::Complex64(Complex64::new(re, im))
    }

    // ==================== Inspection ====================

    pub fn variant(&self) -> Variant {
        match self {
            Numeric::Integer(_) => Variant::Integer,
            Numeric::Float32(_) => Variant::Float32,
            Numeric::Float64(_) => Variant::Float64,
            Numeric::Complex32(_) => Variant::Complex32,
            Numeric::Complex64(_) => Variant::Complex64,
            Numeric::CharCode(_) => Variant::CharCode,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Numeric::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float32(&self) -> Option<f32> {
        match self {
            Numeric::Float32(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_float64(&self) -> Option<f64> {
        match self {
            Numeric::Float64(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_complex32(&self) -> Option<Complex32> {
        match self {
            Numeric::Complex32(z) => Some(*z),
            _ => None,
        }
    }

    pub fn as_complex64(&self) -> Option<Complex64> {
        match self {
            Numeric::Complex64(z) => Some(*z),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Numeric::CharCode(c) => Some(*c),
            _ => None,
        }
    }

    /// Code point of a CharCode value
    pub fn code_point(&self) -> Option<u32> {
        self.as_char().map(u32::from)
    }

    /// Whether the value is the additive identity of its variant
    ///
    /// Complex values test their magnitude.
    pub fn is_zero(&self) -> bool {
        match self {
            Numeric::Integer(n) => *n == 0,
            Numeric::Float32(x) => *x == 0.0,
            Numeric::Float64(x) => *x == 0.0,
            Numeric::Complex32(z) => z.norm() == 0.0,
            Numeric::Complex64(z) => z.norm() == 0.0,
            Numeric::CharCode(c) => *c == '\0',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_tags() {
        assert_eq!(Numeric::Integer(1).variant(), Variant::Integer);
        assert_eq!(Numeric::Float32(1.0).variant(), Variant::Float32);
        assert_eq!(Numeric::Float64(1.0).variant(), Variant::Float64);
        assert_eq!(Numeric::complex32(1.0, 0.0).variant(), Variant::Complex32);
        assert_eq!(Numeric::complex64(1.0, 0.0).variant(), Variant::Complex64);
        assert_eq!(Numeric::CharCode('a').variant(), Variant::CharCode);
    }

    #[test]
    fn test_accessors_match_tag() {
        let v = Numeric::Integer(7);
        assert_eq!(v.as_integer(), Some(7));
        assert_eq!(v.as_float64(), None);
        assert_eq!(v.as_char(), None);

        let c = Numeric::CharCode('A');
        assert_eq!(c.code_point(), Some(65));
        assert_eq!(c.as_integer(), None);
    }

    #[test]
    fn test_complex_keeps_zero_imaginary() {
        let z = Numeric::complex64(3.0, 0.0);
        assert_eq!(z.as_complex64(), Some(Complex64::new(3.0, 0.0)));
    }

    #[test]
    fn test_is_zero() {
        assert!(Numeric::Integer(0).is_zero());
        assert!(Numeric::Float64(-0.0).is_zero());
        assert!(Numeric::complex32(0.0, 0.0).is_zero());
        assert!(!Numeric::complex64(0.0, 1e-300).is_zero());
        assert!(!Numeric::CharCode('0').is_zero());
    }

    #[test]
    fn test_structural_equality() {
        assert_ne!(Numeric::Integer(1), Numeric::Float64(1.0));
        assert_eq!(Numeric::Float32(2.5), Numeric::Float32(2.5));
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::Complex64.to_string(), "Complex64");
        assert!(Variant::Float32.is_float());
        assert!(Variant::Complex32.is_complex());
        assert!(!Variant::CharCode.is_complex());
    }
}
