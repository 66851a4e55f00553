//! Expression engine: tokenizer, parser, evaluator and result formatting
//!
//! Everything here is toolkit-free. The window and the session layer only
//! ever see a string going in and a `CalcResult<f64>` coming out.

pub mod evaluator;
mod format;
pub mod history;
mod operations;
pub mod parser;

pub use format::format_result;
pub use operations::{Constant, Function, Operation};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Everything that can go wrong while evaluating an expression.
///
/// The user only ever sees a generic `Error`; the variants exist for logs
/// and tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Nothing to evaluate
    #[error("Empty expression")]
    EmptyExpression,
    /// Malformed expression
    #[error("Invalid expression: {0}")]
    Parse(String),
    /// Name that is neither a function nor a constant
    #[error("Unknown name: '{0}'")]
    UnknownName(String),
    /// Function called with the wrong number of arguments
    #[error("{name}() takes {expected} argument(s), got {found}")]
    Arity {
        /// Function name
        name: &'static str,
        /// Accepted argument count, e.g. "1" or "1 or 2"
        expected: &'static str,
        /// Arguments supplied
        found: usize,
    },
    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Argument outside a function's domain
    #[error("Math domain error: {function}({value})")]
    Domain {
        /// Function name
        function: &'static str,
        /// Offending argument
        value: f64,
    },
    /// Result is not a finite number
    #[error("Overflow: result is not a finite number")]
    Overflow,
}

impl CalcError {
    /// Creates a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// How trigonometric functions interpret their argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AngleMode {
    /// Arguments are degrees, converted before calling the function
    #[default]
    Degrees,
    /// Arguments are used directly
    Radians,
}

impl AngleMode {
    /// Human readable name, as shown in the title bar and the mode radios
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Degrees => "Degrees",
            Self::Radians => "Radians",
        }
    }

    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }

    /// Converts a trigonometric argument to radians
    #[must_use]
    pub fn to_radians(self, x: f64) -> f64 {
        match self {
            Self::Degrees => x.to_radians(),
            Self::Radians => x,
        }
    }
}

impl std::fmt::Display for AngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
