//! Numerix CLI - demo driver
//!
//! Builds vectors of numeric values, prints every pairwise operation,
//! sorts them and times sorting. Numbers are never parsed from text.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use numerix::{
    config, logger, CharOverflowPolicy, Config, LogConfig, LogFormat, NumericConfig, RenderConfig,
    SetupError,
};
use tracing::{info, Level};

mod driver;
mod output;

#[derive(Parser)]
#[command(
    name = "numerix",
    about = "Numerix - dynamically-typed numeric values with implicit promotion",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Numeric config file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Global log level
    #[arg(long, global = true, default_value_t = Level::WARN)]
    log_level: Level,

    /// Log level for the promotion phase
    #[arg(long, global = true, value_name = "LEVEL")]
    log_promotion: Option<Level>,

    /// Log level for the arithmetic phase
    #[arg(long, global = true, value_name = "LEVEL")]
    log_arithmetic: Option<Level>,

    /// Log format: pretty, compact or json
    #[arg(long, global = true, default_value = "compact", value_parser = parse_format)]
    log_format: LogFormat,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Render floats with exactly this many fractional digits
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Fail character sums and differences outside 0..=255 instead of clamping
    #[arg(long, global = true)]
    reject_char_overflow: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Pairwise operation table over the demo values, then sort them
    Demo {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Per-variant walkthrough: same-variant ops, errors, unsupported types
    Showcase,
    /// Time sorting a generated mixed sequence
    Bench {
        /// Number of values to sort
        #[arg(long, default_value_t = 100_000)]
        count: usize,
        /// Generator seed
        #[arg(long, default_value_t = 0x5EED)]
        seed: u64,
    },
}

fn parse_format(name: &str) -> Result<LogFormat, String> {
    LogFormat::from_name(name).ok_or_else(|| format!("unknown log format '{name}'"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup(&cli) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let ev = numerix::evaluator();
    let command = cli.command.unwrap_or(Command::Demo { json: false });
    match command {
        Command::Demo { json } => driver::demo(&ev, json),
        Command::Showcase => driver::showcase(&ev),
        Command::Bench { count, seed } => driver::bench(&ev, count, seed),
    }

    ExitCode::SUCCESS
}

/// Build the global config from the flags and start logging
fn setup(cli: &Cli) -> Result<(), SetupError> {
    let numeric = build_numeric_config(cli)?;
    let log = LogConfig {
        global: cli.log_level,
        promotion: cli.log_promotion,
        arithmetic: cli.log_arithmetic,
        ..Default::default()
    };

    config::init(Config { log, numeric })?;
    logger::init_with_file(cli.log_format, cli.log_file.as_ref())?;

    info!(target: "numerix::cli", config = ?config::config().numeric, "configured");
    Ok(())
}

/// Config file first, then command-line overrides
fn build_numeric_config(cli: &Cli) -> Result<NumericConfig, SetupError> {
    let mut numeric = match &cli.config {
        Some(path) => Config::load_numeric(path)?,
        None => NumericConfig::default(),
    };
    if let Some(digits) = cli.precision {
        numeric.render = RenderConfig::fixed(digits);
    }
    if cli.reject_char_overflow {
        numeric.char_overflow = CharOverflowPolicy::Reject;
    }
    Ok(numeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from(["numerix", "--precision", "4", "--reject-char-overflow", "showcase"]);
        let numeric = build_numeric_config(&cli).unwrap();
        assert_eq!(numeric.render, RenderConfig::fixed(4));
        assert_eq!(numeric.char_overflow, CharOverflowPolicy::Reject);
        assert!(matches!(cli.command, Some(Command::Showcase)));
    }

    #[test]
    fn test_parse_bench_and_format() {
        let cli = Cli::parse_from(["numerix", "bench", "--count", "10", "--log-format", "json"]);
        assert!(matches!(cli.command, Some(Command::Bench { count: 10, .. })));
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(Cli::try_parse_from(["numerix", "--log-format", "xml"]).is_err());
    }
}
