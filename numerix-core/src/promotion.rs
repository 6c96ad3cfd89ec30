//! Promotion resolver and conversions
//!
//! `promotion_target` is a pure function of two variant tags. Operands are
//! then converted into the target and paired up as [`Operands`], so the
//! dispatcher matches on one already-promoted pair instead of on every
//! combination of variants.

use num_complex::{Complex32, Complex64};
use tracing::trace;

use crate::error::{NumericError, Result};
use crate::value::{Numeric, Variant};

/// Common variant two operands are converted to before an operation
///
/// Symmetric in its arguments. CharCode against any other variant yields
/// that variant, so the code point joins the numeric domain.
pub fn promotion_target(a: Variant, b: Variant) -> Result<Variant> {
    use Variant::*;

    let target = match (a, b) {
        (CharCode, other) | (other, CharCode) => other,
        (Integer, other) | (other, Integer) => other,
        (Float32, Float32) => Float32,
        (Float64, Float64) => Float64,
        (Float32, Float64) | (Float64, Float32) => Float64,
        (Complex32, Complex32) => Complex32,
        (Float32, Complex32) | (Complex32, Float32) => Complex32,
        // Widest precision wins once a double is involved
        (Float64, Complex32) | (Complex32, Float64) => Complex64,
        (Complex64, _) | (_, Complex64) => Complex64,
    };
    Ok(target)
}

/// Both operands, converted into the same variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    Integer(i32, i32),
    Float32(f32, f32),
    Float64(f64, f64),
    Complex32(Complex32, Complex32),
    Complex64(Complex64, Complex64),
    CharCode(char, char),
}

impl Operands {
    /// Pair operands that already share a variant; no conversion happens
    pub fn same(a: &Numeric, b: &Numeric) -> Option<Self> {
        match (*a, *b) {
            (Numeric::Integer(x), Numeric::Integer(y)) => Some(Operands::Integer(x, y)),
            (Numeric::Float32(x), Numeric::Float32(y)) => Some(Operands::Float32(x, y)),
            (Numeric::Float64(x), Numeric::Float64(y)) => Some(Operands::Float64(x, y)),
            (Numeric::Complex32(x), Numeric::Complex32(y)) => Some(Operands::Complex32(x, y)),
            (Numeric::Complex64(x), Numeric::Complex64(y)) => Some(Operands::Complex64(x, y)),
            (Numeric::CharCode(x), Numeric::CharCode(y)) => Some(Operands::CharCode(x, y)),
            _ => None,
        }
    }

    /// Variant the operands share
    pub fn variant(&self) -> Variant {
        match self {
            Operands::Integer(..) => Variant::Integer,
            Operands::Float32(..) => Variant::Float32,
            Operands::Float64(..) => Variant::Float64,
            Operands::Complex32(..) => Variant::Complex32,
            Operands::Complex64(..) => Variant::Complex64,
            Operands::CharCode(..) => Variant::CharCode,
        }
    }
}

/// Promote two operands into their common variant
pub fn promote(a: &Numeric, b: &Numeric) -> Result<Operands> {
    if let Some(operands) = Operands::same(a, b) {
        return Ok(operands);
    }

    let target = promotion_target(a.variant(), b.variant())?;
    trace!(
        target: "numerix::promotion",
        lhs = %a.variant(),
        rhs = %b.variant(),
        to = %target,
        "promoting operands"
    );

    Ok(match target {
        Variant::Integer => Operands::Integer(a.to_i32()?, b.to_i32()?),
        Variant::Float32 => Operands::Float32(a.to_f32()?, b.to_f32()?),
        Variant::Float64 => Operands::Float64(a.to_f64()?, b.to_f64()?),
        Variant::Complex32 => Operands::Complex32(a.to_complex32(), b.to_complex32()),
        Variant::Complex64 => Operands::Complex64(a.to_complex64(), b.to_complex64()),
        Variant::CharCode => Operands::CharCode(a.to_char()?, b.to_char()?),
    })
}

// ==================== Conversion ====================

impl Numeric {
    /// Convert into `target` with native `as` semantics
    ///
    /// Narrowing truncates or rounds (float to Integer saturates, NaN
    /// becomes 0). Complex values have no path to a non-complex variant.
    /// CharCode targets require a valid Unicode scalar.
    pub fn convert_to(&self, target: Variant) -> Result<Numeric> {
        Ok(match target {
            Variant::Integer => Numeric::Integer(self.to_i32()?),
            Variant::Float32 => Numeric::Float32(self.to_f32()?),
            Variant::Float64 => Numeric::Float64(self.to_f64()?),
            Variant::Complex32 => Numeric::Complex32(self.to_complex32()),
            Variant::Complex64 => Numeric::Complex64(self.to_complex64()),
            Variant::CharCode => Numeric::CharCode(self.to_char()?),
        })
    }

    /// Like [`Numeric::convert_to`], but fails with `ConversionOverflow`
    /// when the value lies outside the target's representable range
    pub fn try_convert_to(&self, target: Variant) -> Result<Numeric> {
        let converted = self.convert_to(target)?;
        if self.fits_in(target) {
            Ok(converted)
        } else {
            Err(NumericError::ConversionOverflow {
                value: self.to_string(),
                target,
            })
        }
    }

    fn fits_in(&self, target: Variant) -> bool {
        match (self, target) {
            (Numeric::Float32(x), Variant::Integer) => f64_fits_i32(f64::from(*x)),
            (Numeric::Float64(x), Variant::Integer) => f64_fits_i32(*x),
            (Numeric::Float64(x), Variant::Float32) => f64_fits_f32(*x),
            (Numeric::Complex64(z), Variant::Complex32) => {
                f64_fits_f32(z.re) && f64_fits_f32(z.im)
            }
            _ => true,
        }
    }

    fn unsupported(&self, to: Variant) -> NumericError {
        NumericError::UnsupportedPromotion {
            from: self.variant(),
            to,
        }
    }

    pub(crate) fn to_i32(&self) -> Result<i32> {
        match self {
            Numeric::Integer(n) => Ok(*n),
            Numeric::Float32(x) => Ok(*x as i32),
            Numeric::Float64(x) => Ok(*x as i32),
            Numeric::CharCode(c) => Ok(u32::from(*c) as i32),
            Numeric::Complex32(_) | Numeric::Complex64(_) => Err(self.unsupported(Variant::Integer)),
        }
    }

    pub(crate) fn to_f32(&self) -> Result<f32> {
        match self {
            Numeric::Integer(n) => Ok(*n as f32),
            Numeric::Float32(x) => Ok(*x),
            Numeric::Float64(x) => Ok(*x as f32),
            Numeric::CharCode(c) => Ok(u32::from(*c) as f32),
            Numeric::Complex32(_) | Numeric::Complex64(_) => Err(self.unsupported(Variant::Float32)),
        }
    }

    pub(crate) fn to_f64(&self) -> Result<f64> {
        match self {
            Numeric::Integer(n) => Ok(f64::from(*n)),
            Numeric::Float32(x) => Ok(f64::from(*x)),
            Numeric::Float64(x) => Ok(*x),
            Numeric::CharCode(c) => Ok(f64::from(u32::from(*c))),
            Numeric::Complex32(_) | Numeric::Complex64(_) => Err(self.unsupported(Variant::Float64)),
        }
    }

    pub(crate) fn to_complex32(&self) -> Complex32 {
        match self {
            Numeric::Integer(n) => Complex32::new(*n as f32, 0.0),
            Numeric::Float32(x) => Complex32::new(*x, 0.0),
            Numeric::Float64(x) => Complex32::new(*x as f32, 0.0),
            Numeric::Complex32(z) => *z,
            Numeric::Complex64(z) => Complex32::new(z.re as f32, z.im as f32),
            Numeric::CharCode(c) => Complex32::new(u32::from(*c) as f32, 0.0),
        }
    }

    pub(crate) fn to_complex64(&self) -> Complex64 {
        match self {
            Numeric::Integer(n) => Complex64::new(f64::from(*n), 0.0),
            Numeric::Float32(x) => Complex64::new(f64::from(*x), 0.0),
            Numeric::Float64(x) => Complex64::new(*x, 0.0),
            Numeric::Complex32(z) => Complex64::new(f64::from(z.re), f64::from(z.im)),
            Numeric::Complex64(z) => *z,
            Numeric::CharCode(c) => Complex64::new(f64::from(u32::from(*c)), 0.0),
        }
    }

    pub(crate) fn to_char(&self) -> Result<char> {
        let code = match self {
            Numeric::CharCode(c) => return Ok(*c),
            Numeric::Integer(n) => i64::from(*n),
            Numeric::Float32(x) => *x as i64,
            Numeric::Float64(x) => *x as i64,
            Numeric::Complex32(_) | Numeric::Complex64(_) => {
                return Err(self.unsupported(Variant::CharCode))
            }
        };
        u32::try_from(code)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| NumericError::ConversionOverflow {
                value: code.to_string(),
                target: Variant::CharCode,
            })
    }
}

fn f64_fits_i32(x: f64) -> bool {
    let t = x.trunc();
    t >= f64::from(i32::MIN) && t <= f64::from(i32::MAX)
}

fn f64_fits_f32(x: f64) -> bool {
    !x.is_finite() || (x as f32).is_finite()
}
