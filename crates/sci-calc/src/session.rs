//! Calculator session: the expression buffer, the display and `Ans`
//!
//! Button presses and typed text land here. The session never fails: any
//! evaluation error collapses into the `Error` display and an empty buffer.

use tracing::{debug, info};

use crate::core::evaluator::Evaluator;
use crate::core::history::History;
use crate::core::{format_result, AngleMode};
use crate::keypad::ButtonAction;

/// Text shown on the display after a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

/// Window title prefix; the angle mode is appended
pub const TITLE: &str = "Scientific Calculator";

/// Expression-building state machine behind the window
#[derive(Debug, Clone, Default)]
pub struct Session {
    expression: String,
    error: bool,
    last_answer: Option<f64>,
    evaluator: Evaluator,
    history: History,
}

impl Session {
    /// Creates an empty session in degrees mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session in the given mode
    #[must_use]
    pub fn with_mode(mode: AngleMode) -> Self {
        Self {
            evaluator: Evaluator::with_mode(mode),
            ..Self::default()
        }
    }

    /// Applies a keypad button
    pub fn press(&mut self, action: &ButtonAction) {
        match *action {
            ButtonAction::Insert(text) => self.insert(text),
            ButtonAction::Function(function) => {
                self.insert(function.name());
                self.insert("(");
            }
            ButtonAction::Constant(constant) => self.insert(constant.name()),
            ButtonAction::Answer => {
                let text = self.answer_text();
                self.insert(&text);
            }
            ButtonAction::Clear => self.clear(),
            ButtonAction::Evaluate => self.evaluate(),
        }
    }

    /// Appends text to the buffer, leaving the error state
    pub fn insert(&mut self, text: &str) {
        self.error = false;
        self.expression.push_str(text);
    }

    /// Removes the last character of the buffer
    pub fn backspace(&mut self) {
        self.error = false;
        self.expression.pop();
    }

    /// Empties the buffer and the display
    pub fn clear(&mut self) {
        self.error = false;
        self.expression.clear();
    }

    /// Evaluates the buffer.
    ///
    /// On success the formatted result replaces the buffer so the next
    /// input continues from it. An empty buffer does nothing.
    pub fn evaluate(&mut self) {
        if self.expression.trim().is_empty() {
            return;
        }

        self.evaluator.set_answer(self.last_answer);
        match self.evaluator.evaluate_str(&self.expression) {
            Ok(value) => {
                debug!(expression = %self.expression, value, "evaluated");
                self.history
                    .record(&self.expression, value, self.evaluator.mode());
                self.last_answer = Some(value);
                self.expression = format_result(value);
                self.error = false;
            }
            Err(err) => {
                debug!(expression = %self.expression, error = %err, "evaluation failed");
                self.expression.clear();
                self.error = true;
            }
        }
    }

    /// Changes the angle mode
    pub fn set_mode(&mut self, mode: AngleMode) {
        if self.evaluator.mode() != mode {
            info!(%mode, "angle mode changed");
            self.evaluator.set_mode(mode);
        }
    }

    /// Switches between degrees and radians
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode().toggled());
    }

    /// Current angle mode
    #[must_use]
    pub fn mode(&self) -> AngleMode {
        self.evaluator.mode()
    }

    /// Window title, e.g. `Scientific Calculator - Degrees`
    #[must_use]
    pub fn title(&self) -> String {
        format!("{TITLE} - {}", self.mode())
    }

    /// What the numeric display shows
    #[must_use]
    pub fn display(&self) -> &str {
        if self.error {
            ERROR_DISPLAY
        } else {
            &self.expression
        }
    }

    /// The expression buffer
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Result of the last successful evaluation
    #[must_use]
    pub fn last_answer(&self) -> Option<f64> {
        self.last_answer
    }

    /// Successful evaluations of this session
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether the display currently shows `Error`
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Text the `Ans` button inserts
    fn answer_text(&self) -> String {
        self.last_answer
            .map_or_else(|| "0".to_string(), |value| value.to_string())
    }
}
