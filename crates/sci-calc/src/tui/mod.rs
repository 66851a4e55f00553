//! Terminal window for the calculator
//!
//! Draws with `ratatui`, reads input through `crossterm`. The terminal
//! lifecycle itself (raw mode, alternate screen) belongs to the binary.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{button_center, hit_test, KeypadWidget};
pub use ui::{render, CalculatorLayout, CalculatorUI};
