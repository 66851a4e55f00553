//! Scientific Calculator
//!
//! A keypad-driven scientific calculator: an expression buffer built from
//! button presses, evaluated on demand with sine, cosine and tangent in
//! degrees or radians, square root, logarithms, absolute value, `pi`, `e`,
//! percent and the previous answer.
//!
//! - [`core`]: tokenizer, parser, evaluator, result formatting, history
//! - [`keypad`]: the 6x5 button grid
//! - [`session`]: buffer/display state machine the window drives
//! - [`tui`]: the terminal window (feature `tui`)
//! - [`driver`]: one behavioral test suite for every front end
//!
//! # Example
//!
//! ```rust
//! use sci_calc::prelude::*;
//!
//! // Evaluate an expression directly
//! let eval = Evaluator::new();
//! assert_eq!(eval.evaluate_str("42 * (3 + 7)").unwrap(), 420.0);
//!
//! // Or drive a session the way the keypad does
//! let mut session = Session::new();
//! session.press(&ButtonAction::Function(Function::Sin));
//! session.insert("30)");
//! session.press(&ButtonAction::Evaluate);
//! assert_eq!(session.display(), "0.5");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{
        format_result, AngleMode, CalcError, CalcResult, Constant, Function, Operation,
    };
    pub use crate::driver::{CalculatorDriver, HistoryItem, SessionDriver};
    pub use crate::keypad::{ButtonAction, ButtonKind, Keypad, KeypadButton};
    pub use crate::session::Session;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction};
}
