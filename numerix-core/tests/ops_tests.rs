//! Dispatcher tests over the public API
//!
//! Exercise promotion, arithmetic, comparison and rendering together.

mod common;
use common::{assert_non_decreasing, sample_values};

use std::cmp::Ordering;

use numerix_core::{
    promotion_target, CharOverflowPolicy, Complex64, Evaluator, Numeric, NumericConfig,
    NumericError, Operator, RenderConfig, Variant,
};

// ===== Promotion =====

#[test]
fn test_promotion_symmetry_over_all_pairs() {
    for a in Variant::ALL {
        for b in Variant::ALL {
            assert_eq!(promotion_target(a, b), promotion_target(b, a));
        }
    }
}

#[test]
fn test_result_variant_follows_promotion() {
    let ev = Evaluator::default();
    for a in sample_values() {
        for b in sample_values() {
            let expected = promotion_target(a.variant(), b.variant()).unwrap();
            match ev.sum(&a, &b) {
                Ok(result) => assert_eq!(result.variant(), expected, "{a} + {b}"),
                Err(e) => panic!("{a} + {b} failed: {e}"),
            }
        }
    }
}

// ===== Arithmetic =====

#[test]
fn test_promotion_correctness() {
    let r = Numeric::Integer(3).sum(&Numeric::Float64(0.5)).unwrap();
    assert_eq!(r, Numeric::Float64(3.5));

    let r = Numeric::Integer(5).sum(&Numeric::complex64(1.0, 2.0)).unwrap();
    assert_eq!(r, Numeric::complex64(6.0, 2.0));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        Numeric::Integer(10).quotient(&Numeric::Integer(0)),
        Err(NumericError::DivisionByZero)
    );
    assert_eq!(
        Numeric::complex64(1.0, 1.0).quotient(&Numeric::complex64(0.0, 0.0)),
        Err(NumericError::DivisionByZero)
    );
    assert_eq!(
        Numeric::CharCode('a').quotient(&Numeric::Integer(0)),
        Err(NumericError::DivisionByZero)
    );
}

#[test]
fn test_char_restrictions() {
    let a = Numeric::CharCode('a');
    let b = Numeric::CharCode('b');
    assert!(matches!(
        a.product(&b),
        Err(NumericError::UnsupportedOperation {
            op: Operator::Product,
            ..
        })
    ));
    assert!(matches!(
        a.quotient(&b),
        Err(NumericError::UnsupportedOperation {
            op: Operator::Quotient,
            ..
        })
    ));

    let sum = a.sum(&b).unwrap();
    assert_eq!(sum.variant(), Variant::CharCode);
    assert_eq!(sum.code_point(), Some(u32::from('a') + u32::from('b')));
}

#[test]
fn test_char_overflow_rejected_when_configured() {
    let ev = Evaluator::new(NumericConfig {
        char_overflow: CharOverflowPolicy::Reject,
        render: RenderConfig::default(),
    });
    let err = ev
        .difference(&Numeric::CharCode('a'), &Numeric::CharCode('b'))
        .unwrap_err();
    assert_eq!(
        err,
        NumericError::ConversionOverflow {
            value: "-1".to_string(),
            target: Variant::CharCode,
        }
    );
}

#[test]
fn test_failed_operations_leave_operands_unchanged() {
    let a = Numeric::CharCode('x');
    let b = Numeric::CharCode('y');
    let rendered = (a.to_string(), b.to_string());

    assert!(a.product(&b).is_err());
    assert!(a.sum(&b).is_ok());

    assert_eq!((a.to_string(), b.to_string()), rendered);
    assert!(a.equal(&Numeric::CharCode('x')));
    assert!(b.equal(&Numeric::CharCode('y')));
}

// ===== Comparison =====

#[test]
fn test_complex_lexicographic_order() {
    assert!(Numeric::complex64(1.0, 5.0).less_than(&Numeric::complex64(1.0, 9.0)));
    assert!(!Numeric::complex64(2.0, 0.0).less_than(&Numeric::complex64(1.0, 9.0)));
}

#[test]
fn test_comparisons_never_fail() {
    let ev = Evaluator::default();
    for a in sample_values() {
        for b in sample_values() {
            for op in Operator::COMPARISON {
                assert!(ev.check(op, &a, &b).is_ok());
            }
            let lt = a.less_than(&b);
            let gt = a.greater_than(&b);
            let eq = a.equal(&b);
            assert_eq!(u8::from(lt) + u8::from(gt) + u8::from(eq), 1, "{a} vs {b}");
        }
    }
}

#[test]
fn test_sort_with_less_than() {
    let mut values = sample_values();
    values.sort_by(|a, b| {
        if a.less_than(b) {
            Ordering::Less
        } else if b.less_than(a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    assert_non_decreasing(&values);
    assert_eq!(values.first(), Some(&Numeric::complex64(-2.0, 0.5)));
    assert_eq!(values.last(), Some(&Numeric::CharCode('A')));
}

#[test]
fn test_sort_with_total_cmp() {
    let mut values = sample_values();
    values.push(Numeric::Float64(f64::NAN));
    values.push(Numeric::Integer(-100));
    values.sort_by(Numeric::total_cmp);

    assert_eq!(values[0], Numeric::Integer(-100));
    assert!(values.last().unwrap().as_float64().unwrap().is_nan());
    assert_non_decreasing(&values[..values.len() - 1]);
}

#[test]
fn test_sort_near_f32_precision_limit() {
    // Integers past 2^24 round when promoted to Float32
    let mut values: Vec<Numeric> = (0..600)
        .map(|i: i32| {
            let n = 16_777_200 + (i * 37) % 40;
            match i % 3 {
                0 => Numeric::Integer(n),
                1 => Numeric::Float32(n as f32),
                _ => Numeric::Float64(f64::from(n) + 0.5),
            }
        })
        .collect();
    values.sort_by(Numeric::total_cmp);
    assert_non_decreasing(&values);

    for w in values.windows(3) {
        if w[0].total_cmp(&w[1]).is_le() && w[1].total_cmp(&w[2]).is_le() {
            assert!(w[0].total_cmp(&w[2]).is_le());
        }
    }
}

// ===== Rendering =====

#[test]
fn test_round_trip_rendering() {
    assert_eq!(Numeric::create(42).unwrap().to_string(), "42");
    assert_eq!(
        Numeric::create(Complex64::new(3.0, 4.0)).unwrap().to_string(),
        "(3 + 4i)"
    );
}

#[test]
fn test_evaluator_renders_with_precision() {
    let ev = Evaluator::new(NumericConfig {
        render: RenderConfig::fixed(3),
        ..Default::default()
    });
    let q = ev
        .quotient(&Numeric::Float64(1.0), &Numeric::Integer(8))
        .unwrap();
    assert_eq!(ev.render(&q), "0.125");
    assert_eq!(ev.render(&Numeric::Float32(2.0)), "2.000");
}
