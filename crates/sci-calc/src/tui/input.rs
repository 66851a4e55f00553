//! Keyboard and mouse input mapping

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Actions that can be triggered by keyboard or mouse input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a character to the expression
    InsertChar(char),
    /// Delete the last character
    Backspace,
    /// Evaluate the expression
    Evaluate,
    /// Clear the expression and the display
    Clear,
    /// Switch between degrees and radians
    ToggleMode,
    /// Left click at a terminal cell
    Click {
        /// Column
        x: u16,
        /// Row
        y: u16,
    },
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('d') => KeyAction::ToggleMode,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Evaluate,
            KeyCode::Char(c) if Self::is_valid_char(c) => KeyAction::InsertChar(c),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Esc => KeyAction::Clear,
            _ => KeyAction::None,
        }
    }

    /// Maps a mouse event to an action; only left button presses count
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => KeyAction::Click {
                x: event.column,
                y: event.row,
            },
            _ => KeyAction::None,
        }
    }

    /// Returns true if the character may be typed into the expression
    #[must_use]
    pub fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                '.' | '+' | '-' | '*' | '/' | '%' | '^' | '(' | ')' | ',' | ' '
            )
    }
}
