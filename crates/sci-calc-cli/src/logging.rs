//! Logging setup using `tracing-subscriber`
//!
//! The window owns the terminal, so while it is open logs can only go to a
//! file; without `--log-file` they are dropped. Headless `eval` logs to
//! stderr. `SCICALC_LOG` overrides the filter derived from `-q`/`-v`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{CliConfig, LogFormat, Verbosity};
use crate::error::{CliError, CliResult};

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "SCICALC_LOG";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Appended to a file
    File(PathBuf),
    /// Nowhere; no subscriber is installed
    Discard,
}

impl LogTarget {
    /// Target while the window owns the terminal
    #[must_use]
    pub fn for_window(config: &CliConfig) -> Self {
        config.log_file.clone().map_or(Self::Discard, Self::File)
    }

    /// Target for headless evaluation
    #[must_use]
    pub fn for_eval(config: &CliConfig) -> Self {
        config.log_file.clone().map_or(Self::Stderr, Self::File)
    }
}

/// Builds the filter from an optional override, falling back to the
/// verbosity default when the override is absent or malformed.
#[must_use]
pub fn filter_from(directive: Option<&str>, verbosity: Verbosity) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity.filter_directive()))
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    let directive = std::env::var(LOG_ENV).ok();
    filter_from(directive.as_deref(), verbosity)
}

/// Installs the global subscriber. Call once at startup.
pub fn init_logging(config: &CliConfig, target: &LogTarget) -> CliResult<()> {
    match target {
        LogTarget::Discard => Ok(()),
        LogTarget::Stderr => install(config, std::io::stderr, config.color.should_color()),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            install(config, Mutex::new(file), false)
        }
    }
}

fn install<W>(config: &CliConfig, writer: W, ansi: bool) -> CliResult<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config.verbosity);
    let layer = fmt::layer().with_writer(writer).with_target(false);

    let result = match config.log_format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_ansi(ansi))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init(),
    };
    result.map_err(|e| CliError::logging(e.to_string()))
}
