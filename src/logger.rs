//! Logger initialisation
//!
//! Built on `tracing` and `tracing-subscriber`, with per-phase filtering.
//! Log output goes to stderr so it never mixes with rendered values on stdout.
//!
//! # Example
//! ```ignore
//! use numerix::config::{init, Config};
//! use numerix::logger::init_logger;
//!
//! init(Config::default())?;
//! init_logger()?;
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use numerix_config::Phase;
use tracing_subscriber::{
    filter::Targets, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, Layer,
    Registry,
};

use crate::config::{self, LogConfig};
use crate::error::SetupError;

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Coloured multi-line output (development)
    #[default]
    Pretty,
    /// One line per event
    Compact,
    /// JSON (tool integration)
    Json,
}

impl LogFormat {
    /// Parse a format name (`pretty`, `compact`, `json`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pretty" => Some(LogFormat::Pretty),
            "compact" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Initialise logging from the global config with the default format
pub fn init_logger() -> Result<(), SetupError> {
    init_with_format(LogFormat::default())
}

/// Initialise logging from the global config with the given format
pub fn init_with_format(format: LogFormat) -> Result<(), SetupError> {
    init_with_file(format, None::<&Path>)
}

/// Initialise logging from the global config, optionally also writing to a file
///
/// # Arguments
/// * `format` - log format
/// * `file` - log file path, `None` logs to the console only
pub fn init_with_file<P: AsRef<Path>>(format: LogFormat, file: Option<P>) -> Result<(), SetupError> {
    let targets = targets_for(&config::config().log);

    let mut layers = vec![format_layer(format, io::stderr, true)
        .with_filter(targets.clone())
        .boxed()];

    if let Some(path) = file {
        let path = path.as_ref();
        let handle = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SetupError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        layers.push(
            format_layer(format, Mutex::new(handle), false)
                .with_filter(targets)
                .boxed(),
        );
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(())
}

/// Build the per-phase target filter
pub fn targets_for(log: &LogConfig) -> Targets {
    Phase::ALL.iter().fold(
        Targets::new().with_default(log.global),
        |targets, phase| targets.with_target(phase.target(), log.level_for(*phase)),
    )
}

/// One formatting layer over `make_writer`; `ansi` is off for files
fn format_layer<M>(
    format: LogFormat,
    make_writer: M,
    ansi: bool,
) -> Box<dyn Layer<Registry> + Send + Sync>
where
    M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = fmt::layer().with_writer(make_writer).with_ansi(ansi);
    match format {
        LogFormat::Pretty => base.pretty().boxed(),
        LogFormat::Compact => base.compact().without_time().with_target(false).boxed(),
        LogFormat::Json => base
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .boxed(),
    }
}

/// Whether debug events for a phase are enabled
#[inline]
pub fn is_enabled(phase: Phase) -> bool {
    match phase {
        Phase::Promotion => tracing::enabled!(target: "numerix::promotion", tracing::Level::DEBUG),
        Phase::Arithmetic => tracing::enabled!(target: "numerix::arithmetic", tracing::Level::DEBUG),
        Phase::Comparison => tracing::enabled!(target: "numerix::comparison", tracing::Level::DEBUG),
        Phase::Render => tracing::enabled!(target: "numerix::render", tracing::Level::DEBUG),
    }
}
