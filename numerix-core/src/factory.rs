//! Factory: native values to `Numeric`
//!
//! Statically known inputs go through `From`/`TryFrom`. [`Numeric::create`]
//! accepts any `'static` value and resolves its type at runtime.

use std::any::{type_name, Any};

use num_complex::{Complex32, Complex64};

use crate::error::{NumericError, Result};
use crate::value::{Numeric, Variant};

macro_rules! impl_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Numeric {
                fn from(value: $t) -> Self {
                    Numeric::$variant(value.into())
                }
            }
        )*
    };
}

impl_from! {
    i32 => Integer,
    i16 => Integer,
    i8 => Integer,
    u16 => Integer,
    u8 => Integer,
    f32 => Float32,
    f64 => Float64,
    Complex32 => Complex32,
    Complex64 => Complex64,
    char => CharCode,
}

macro_rules! impl_try_from_wide {
    ($($t:ty),* $(,)?) => {
        $(
            impl TryFrom<$t> for Numeric {
                type Error = NumericError;

                fn try_from(value: $t) -> Result<Self> {
                    i32::try_from(value)
                        .map(Numeric::Integer)
                        .map_err(|_| NumericError::ConversionOverflow {
                            value: value.to_string(),
                            target: Variant::Integer,
                        })
                }
            }
        )*
    };
}

impl_try_from_wide!(i64, i128, isize, u32, u64, u128, usize);

impl Numeric {
    /// Create a value from any native input, resolving its type at runtime
    ///
    /// Integral types become `Integer` (failing with `ConversionOverflow`
    /// outside `i32`), `f32`/`f64` the matching float, complex inputs the
    /// matching complex variant and `char` a `CharCode`. Everything else
    /// fails with `UnsupportedType`.
    pub fn create<T: Any>(value: T) -> Result<Numeric> {
        let any = &value as &dyn Any;

        macro_rules! exact {
            ($($t:ty),*) => {
                $(
                    if let Some(v) = any.downcast_ref::<$t>() {
                        return Ok(Numeric::from(*v));
                    }
                )*
            };
        }

        macro_rules! checked {
            ($($t:ty),*) => {
                $(
                    if let Some(v) = any.downcast_ref::<$t>() {
                        return Numeric::try_from(*v);
                    }
                )*
            };
        }

        exact!(i32, f64, f32, char, Complex32, Complex64, i8, i16, u8, u16);
        checked!(i64, u32, u64, usize, isize, i128, u128);

        Err(NumericError::UnsupportedType {
            type_name: type_name::<T>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_maps_native_types() {
        assert_eq!(Numeric::create(10).unwrap(), Numeric::Integer(10));
        assert_eq!(Numeric::create(5.5f32).unwrap(), Numeric::Float32(5.5));
        assert_eq!(Numeric::create(3.75).unwrap(), Numeric::Float64(3.75));
        assert_eq!(
            Numeric::create(Complex32::new(1.0, 2.0)).unwrap(),
            Numeric::complex32(1.0, 2.0)
        );
        assert_eq!(
            Numeric::create(Complex64::new(3.0, 4.0)).unwrap(),
            Numeric::complex64(3.0, 4.0)
        );
        assert_eq!(Numeric::create('A').unwrap(), Numeric::CharCode('A'));
        assert_eq!(Numeric::create(7u8).unwrap(), Numeric::Integer(7));
    }

    #[test]
    fn test_create_wide_integers() {
        assert_eq!(Numeric::create(42i64).unwrap(), Numeric::Integer(42));
        assert_eq!(Numeric::create(-3isize).unwrap(), Numeric::Integer(-3));

        let err = Numeric::create(u32::MAX).unwrap_err();
        assert_eq!(
            err,
            NumericError::ConversionOverflow {
                value: u32::MAX.to_string(),
                target: Variant::Integer,
            }
        );
    }

    #[test]
    fn test_create_unsupported_type() {
        let err = Numeric::create("UnsupportedType").unwrap_err();
        assert_eq!(
            err,
            NumericError::UnsupportedType {
                type_name: "&str"
            }
        );

        assert!(matches!(
            Numeric::create(true),
            Err(NumericError::UnsupportedType { type_name: "bool" })
        ));
        assert!(matches!(
            Numeric::create(String::from("1")),
            Err(NumericError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Numeric::from(-8i8), Numeric::Integer(-8));
        assert_eq!(Numeric::from('z'), Numeric::CharCode('z'));
        assert!(Numeric::try_from(1u64 << 40).is_err());
    }
}
