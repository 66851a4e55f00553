//! Headless evaluation (`scicalc eval`)

use std::io::Write;

use console::Style;
use sci_calc::core::AngleMode;
use sci_calc::session::Session;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Result of one expression, as the display would show it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalLine {
    /// The expression as given
    pub expression: String,
    /// Formatted result, or `Error`
    pub display: String,
    /// Whether evaluation failed
    pub failed: bool,
}

/// Results of a whole `eval` run
#[derive(Debug)]
pub struct EvalReport {
    /// One line per expression, in order
    pub lines: Vec<EvalLine>,
    /// Session after the last expression
    pub session: Session,
}

impl EvalReport {
    /// Number of expressions that failed
    #[must_use]
    pub fn failures(&self) -> usize {
        self.lines.iter().filter(|line| line.failed).count()
    }
}

/// Evaluates expressions in order within one session, so `Ans` chains
#[must_use]
pub fn evaluate_all<S: AsRef<str>>(mode: AngleMode, expressions: &[S]) -> EvalReport {
    let mut session = Session::with_mode(mode);
    let mut lines = Vec::with_capacity(expressions.len());

    for expression in expressions {
        let expression = expression.as_ref();
        session.clear();
        session.insert(expression);
        session.evaluate();

        // A blank expression leaves the display empty; report it as an error
        let failed = session.is_error() || session.display().trim().is_empty();
        let shown = if failed {
            sci_calc::session::ERROR_DISPLAY.to_string()
        } else {
            session.display().to_string()
        };
        debug!(expression, display = %shown, "evaluated");
        lines.push(EvalLine {
            expression: expression.to_string(),
            display: shown,
            failed,
        });
    }

    EvalReport { lines, session }
}

/// Writes the report: one line per result, or the history as JSON
pub fn write_report<W: Write>(
    out: &mut W,
    report: &EvalReport,
    json: bool,
    color: bool,
) -> CliResult<()> {
    if json {
        writeln!(out, "{}", report.session.history().to_json()?)?;
        return Ok(());
    }

    let ok_style = Style::new().green().bold().force_styling(color);
    let err_style = Style::new().red().bold().force_styling(color);
    for line in &report.lines {
        let style = if line.failed { &err_style } else { &ok_style };
        writeln!(out, "{}", style.apply_to(&line.display))?;
    }
    Ok(())
}

/// Runs `scicalc eval`
pub fn run_eval<W: Write>(
    config: &CliConfig,
    expressions: &[String],
    json: bool,
    out: &mut W,
) -> CliResult<()> {
    info!(mode = %config.mode, count = expressions.len(), "evaluating");
    let report = evaluate_all(config.mode, expressions);
    write_report(out, &report, json, config.color.should_color())?;

    match report.failures() {
        0 => Ok(()),
        failed => Err(CliError::evaluation(failed, report.lines.len())),
    }
}
