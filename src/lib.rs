//! Numerix - dynamically-typed numeric values
//!
//! One `Numeric` type holds an integer, a single- or double-precision float,
//! a complex number or a character code, with arithmetic, ordering,
//! equality and rendering across all of them. Mixed-variant operations
//! promote both operands to a common variant.
//!
//! # Architecture
//!
//! ```text
//! numerix-config/  - Pure configuration data
//! numerix-core/    - Value, promotion, dispatch, rendering (no IO)
//! src/             - Facade: global config, logger setup
//! numerix-cli/     - Demo driver
//! ```
//!
//! # Quick Start
//!
//! ```
//! use numerix::{evaluator, Numeric};
//!
//! let ev = evaluator();
//! let sum = ev.sum(&Numeric::Integer(5), &Numeric::complex64(1.0, 2.0)).unwrap();
//! assert_eq!(ev.render(&sum), "(6 + 2i)");
//! ```

pub mod config;
pub mod error;
pub mod logger;

// Re-export common types
pub use config::{Config, LogConfig};
pub use error::SetupError;
pub use logger::LogFormat;
pub use numerix_core::{
    compare, equal, greater_than, less_than, promotion_target, render, total_cmp,
    CharOverflowPolicy, Complex32, Complex64, Evaluator, Numeric, NumericConfig, NumericError,
    Operator, Phase, RenderConfig, Variant,
};

/// Initialise the global config
pub fn init(config: Config) -> Result<(), SetupError> {
    config::init(config)
}

/// Initialise the global config and the logger
///
/// # Example
/// ```ignore
/// use numerix::{init_with_logger, Config, LogFormat};
///
/// init_with_logger(Config::default(), LogFormat::Compact)?;
/// ```
pub fn init_with_logger(config: Config, format: LogFormat) -> Result<(), SetupError> {
    config::init(config)?;
    logger::init_with_format(format)
}

/// An evaluator for the global numeric config
///
/// Uses the defaults when the config was never initialised.
pub fn evaluator() -> Evaluator {
    Evaluator::new(config::config().numeric.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluator_defaults() {
        let ev = evaluator();
        assert_eq!(ev.config().char_overflow, CharOverflowPolicy::Clamp);
        let q = ev
            .quotient(&Numeric::Integer(10), &Numeric::Integer(4))
            .unwrap();
        assert_eq!(q, Numeric::Integer(2));
    }

    #[test]
    fn test_init_twice_fails() {
        let first = init(Config::default());
        let second = init(Config::default());
        // Another test may have initialised first; either way the second call fails
        assert!(first.is_ok() || matches!(first, Err(SetupError::AlreadyInitialized)));
        assert!(matches!(second, Err(SetupError::AlreadyInitialized)));
    }
}
