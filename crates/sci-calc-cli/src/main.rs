//! scicalc: scientific calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! scicalc                          # Open the window (degrees)
//! scicalc run --radians            # Open the window in radians
//! scicalc eval "2+2" "sin(Ans)"    # Evaluate headlessly, one result per line
//! scicalc eval --json "1/3"        # Print the history as JSON
//! ```

use clap::Parser;
use sci_calc_cli::{
    eval::run_eval,
    logging::{init_logging, LogTarget},
    mode_from_flag,
    terminal::run_window,
    Cli, CliConfig, CliResult, ColorChoice, Commands, RunArgs, Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            let config = config.with_mode(mode_from_flag(args.radians));
            init_logging(&config, &LogTarget::for_window(&config))?;
            run_window(&config)
        }
        Commands::Eval(args) => {
            let config = config.with_mode(mode_from_flag(args.radians));
            init_logging(&config, &LogTarget::for_eval(&config))?;
            let mut stdout = std::io::stdout().lock();
            run_eval(&config, &args.expressions, args.json, &mut stdout)
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let color: ColorChoice = cli.color.into();

    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(color)
        .with_log_file(cli.log_file.clone())
        .with_log_format(cli.log_format.into())
}
