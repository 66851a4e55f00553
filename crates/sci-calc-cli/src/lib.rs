//! Scientific calculator CLI
//!
//! Opens the terminal window, or evaluates expressions headlessly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod eval;
pub mod logging;
pub mod terminal;

pub use commands::{mode_from_flag, Cli, ColorArg, Commands, EvalArgs, LogFormatArg, RunArgs};
pub use config::{CliConfig, ColorChoice, LogFormat, Verbosity};
pub use error::{CliError, CliResult};
