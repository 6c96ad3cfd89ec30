//! Shared helpers for the integration tests

use numerix_core::{Complex32, Numeric};

/// One value of every variant, in the order the demo driver builds them
pub fn sample_values() -> Vec<Numeric> {
    vec![
        Numeric::create(10).unwrap(),
        Numeric::create(5.5f32).unwrap(),
        Numeric::create(3.75).unwrap(),
        Numeric::create(Complex32::new(1.0, 2.0)).unwrap(),
        Numeric::create('A').unwrap(),
        Numeric::complex64(-2.0, 0.5),
    ]
}

/// Assert a slice is non-decreasing under `less_than`
pub fn assert_non_decreasing(values: &[Numeric]) {
    for pair in values.windows(2) {
        assert!(
            !pair[1].less_than(&pair[0]),
            "{} sorted after {}",
            pair[1],
            pair[0]
        );
    }
}
