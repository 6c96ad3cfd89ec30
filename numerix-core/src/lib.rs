//! Numerix Core - dynamically-typed numeric values (pure logic, no IO)
//!
//! A `Numeric` holds an integer, a single- or double-precision float, a
//! complex number or a character code. Mixed-variant operations promote
//! both operands to a common variant first.
//!
//! Configuration is passed explicitly via [`Evaluator`], not via global state.
//!
//! ```
//! use numerix_core::Numeric;
//!
//! let sum = Numeric::Integer(3).sum(&Numeric::Float64(0.5)).unwrap();
//! assert_eq!(sum, Numeric::Float64(3.5));
//! assert_eq!(sum.to_string(), "3.5");
//! ```

pub mod error;
pub mod factory;
pub mod operator;
pub mod ops;
pub mod promotion;
pub mod render;
pub mod value;

// Re-export common types
pub use error::{NumericError, Result};
pub use operator::Operator;
pub use ops::{compare, equal, greater_than, less_than, total_cmp, Evaluator};
pub use promotion::{promote, promotion_target, Operands};
pub use render::render;
pub use value::{Numeric, Variant};

pub use num_complex::{Complex32, Complex64};

// Re-export config types from numerix-config
pub use numerix_config::{CharOverflowPolicy, NumericConfig, Phase, RenderConfig};
