//! String rendering
//!
//! Floats are rendered in positional notation, never scientific.

use std::fmt::{self, Display};

use numerix_config::RenderConfig;
use tracing::trace;

use crate::value::Numeric;

/// Render a value under the given configuration
pub fn render(value: &Numeric, config: &RenderConfig) -> String {
    let precision = config.precision;
    trace!(target: "numerix::render", variant = %value.variant(), ?precision, "render");
    match value {
        Numeric::Integer(n) => n.to_string(),
        Numeric::Float32(x) => real(x, precision),
        Numeric::Float64(x) => real(x, precision),
        Numeric::Complex32(z) => complex(&z.re, &z.im, precision),
        Numeric::Complex64(z) => complex(&z.re, &z.im, precision),
        Numeric::CharCode(c) => c.to_string(),
    }
}

fn real<T: Display>(x: &T, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{x:.digits$}"),
        None => format!("{x}"),
    }
}

fn complex<T: Display>(re: &T, im: &T, precision: Option<usize>) -> String {
    format!("({} + {}i)", real(re, precision), real(im, precision))
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &RenderConfig::default()))
    }
}
