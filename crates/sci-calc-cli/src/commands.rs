//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use sci_calc::core::AngleMode;
use std::path::PathBuf;

/// Scientific calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "scicalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log line format
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormatArg,

    /// Subcommand to run (defaults to opening the window)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the calculator window
    Run(RunArgs),

    /// Evaluate expressions without opening the window
    ///
    /// Each expression is evaluated in order as if typed and `=` pressed;
    /// `Ans` refers to the previous result. Put `--` before expressions
    /// that start with a minus sign.
    Eval(EvalArgs),
}

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Start in radians mode
    #[arg(long)]
    pub radians: bool,
}

/// Arguments for the eval command
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Interpret trigonometric arguments as radians
    #[arg(long)]
    pub radians: bool,

    /// Print the history of successful evaluations as JSON
    #[arg(long)]
    pub json: bool,

    /// Expressions to evaluate
    #[arg(required = true, value_name = "EXPR")]
    pub expressions: Vec<String>,
}

/// Angle mode selected by a `--radians` flag
#[must_use]
pub const fn mode_from_flag(radians: bool) -> AngleMode {
    if radians {
        AngleMode::Radians
    } else {
        AngleMode::Degrees
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Log format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormatArg {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl From<LogFormatArg> for crate::config::LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => Self::Text,
            LogFormatArg::Json => Self::Json,
        }
    }
}
