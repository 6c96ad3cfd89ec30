//! Global configuration
//!
//! A process-wide config singleton holding the log levels and the numeric
//! evaluation config. The core never reads it; it is turned into an
//! [`Evaluator`](numerix_core::Evaluator) at the edge.
//!
//! # Example
//! ```
//! use numerix::config::{Config, LogConfig, init, config};
//! use tracing::Level;
//!
//! let cfg = Config {
//!     log: LogConfig {
//!         global: Level::DEBUG,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! init(cfg).unwrap();
//! assert_eq!(config().log.global, Level::DEBUG);
//! ```

use std::path::Path;

use numerix_config::{NumericConfig, Phase};
use once_cell::sync::{Lazy, OnceCell};
use tracing::Level;

use crate::error::SetupError;

static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();
static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Initialise the global configuration (once per process)
pub fn init(config: Config) -> Result<(), SetupError> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| SetupError::AlreadyInitialized)
}

/// Get the global configuration
///
/// Falls back to the defaults when `init` was never called.
pub fn config() -> &'static Config {
    GLOBAL_CONFIG.get().unwrap_or(&*DEFAULT_CONFIG)
}

/// Check whether `init` has been called
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// Global configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Log configuration
    pub log: LogConfig,
    /// Numeric evaluation configuration
    pub numeric: NumericConfig,
}

/// Log configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Global default level
    pub global: Level,
    /// Promotion level (None falls back to global)
    pub promotion: Option<Level>,
    /// Arithmetic level
    pub arithmetic: Option<Level>,
    /// Comparison level
    pub comparison: Option<Level>,
    /// Render level
    pub render: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            promotion: None,
            arithmetic: None,
            comparison: None,
            render: None,
        }
    }
}

impl LogConfig {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> Level {
        let specific = match phase {
            Phase::Promotion => self.promotion,
            Phase::Arithmetic => self.arithmetic,
            Phase::Comparison => self.comparison,
            Phase::Render => self.render,
        };
        specific.unwrap_or(self.global)
    }
}

impl Config {
    /// Read the numeric part of the config from a JSON file
    pub fn load_numeric(path: &Path) -> Result<NumericConfig, SetupError> {
        let text = std::fs::read_to_string(path).map_err(|source| SetupError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(NumericConfig::from_json(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numerix_config::CharOverflowPolicy;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.log.global, Level::WARN);
        assert_eq!(cfg.numeric.char_overflow, CharOverflowPolicy::Clamp);
    }

    #[test]
    fn test_log_level_for() {
        let cfg = LogConfig {
            global: Level::WARN,
            promotion: Some(Level::TRACE),
            ..Default::default()
        };

        assert_eq!(cfg.level_for(Phase::Promotion), Level::TRACE);
        assert_eq!(cfg.level_for(Phase::Render), Level::WARN);
    }

    #[test]
    fn test_load_numeric_missing_file() {
        let err = Config::load_numeric(Path::new("/nonexistent/numerix.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/numerix.json"));
    }
}
