//! Setup errors for the facade
//!
//! Numeric evaluation errors live in `numerix_core::NumericError`; these only
//! cover configuration and logger initialisation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Error raised while initialising config or logging
#[derive(Error, Debug)]
pub enum SetupError {
    /// `init` was called twice
    #[error("Config already initialized")]
    AlreadyInitialized,

    /// The log file could not be opened
    #[error("Cannot open log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The numeric config file could not be read
    #[error("Cannot read config file '{}': {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global subscriber is already installed
    #[error("Logger already installed: {0}")]
    Subscriber(#[from] TryInitError),

    /// The numeric config file is malformed
    #[error("Invalid numeric config: {0}")]
    Config(#[from] serde_json::Error),
}
