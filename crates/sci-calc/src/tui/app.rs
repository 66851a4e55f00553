//! Window application state

use ratatui::layout::Rect;
use tracing::trace;

use super::input::KeyAction;
use super::keypad::{button_center, hit_test};
use super::ui::CalculatorLayout;
use crate::core::AngleMode;
use crate::keypad::Keypad;
use crate::session::Session;

/// Calculator window state: the session, the keypad and the terminal size
#[derive(Debug)]
pub struct CalculatorApp {
    session: Session,
    keypad: Keypad,
    /// Last known terminal area, used to map clicks
    area: Rect,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Terminal size assumed until the first resize
    pub const DEFAULT_AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    /// Creates a new app in degrees mode
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(AngleMode::default())
    }

    /// Creates a new app in the given angle mode
    #[must_use]
    pub fn with_mode(mode: AngleMode) -> Self {
        Self {
            session: Session::with_mode(mode),
            keypad: Keypad::new(),
            area: Self::DEFAULT_AREA,
            should_quit: false,
        }
    }

    /// Returns the calculator session
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the terminal area clicks are mapped against
    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Records the terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
    }

    /// Layout for the current terminal area
    #[must_use]
    pub fn layout(&self) -> CalculatorLayout {
        CalculatorLayout::new(self.area)
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies an input action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::InsertChar(c) => {
                let mut text = [0; 4];
                let text = c.encode_utf8(&mut text);
                self.highlight_label(text);
                self.session.insert(text);
            }
            KeyAction::Backspace => {
                self.keypad.release_all();
                self.session.backspace();
            }
            KeyAction::Evaluate => {
                self.highlight_label("=");
                self.session.evaluate();
            }
            KeyAction::Clear => {
                self.highlight_label("C");
                self.session.clear();
            }
            KeyAction::ToggleMode => self.session.toggle_mode(),
            KeyAction::Click { x, y } => {
                self.click(x, y);
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a left click; returns whether it hit a button or a radio
    pub fn click(&mut self, x: u16, y: u16) -> bool {
        let layout = self.layout();
        if let Some(index) = hit_test(&self.keypad, layout.keypad, x, y) {
            trace!(x, y, index, "keypad click");
            self.press_index(index);
            return true;
        }
        if let Some(mode) = layout.mode_at(x, y) {
            self.session.set_mode(mode);
            return true;
        }
        false
    }

    /// Presses the button with the given label; returns false if none exists
    pub fn press_label(&mut self, label: &str) -> bool {
        match self.keypad.find_button_by_label(label) {
            Some(index) => {
                self.press_index(index);
                true
            }
            None => false,
        }
    }

    /// Screen cell at the center of the labelled button
    #[must_use]
    pub fn button_position(&self, label: &str) -> Option<(u16, u16)> {
        let index = self.keypad.find_button_by_label(label)?;
        button_center(&self.keypad, self.layout().keypad, index)
    }

    fn press_index(&mut self, index: usize) {
        let Some(action) = self.keypad.get_button(index).map(|b| b.action) else {
            return;
        };
        self.keypad.highlight(index);
        self.session.press(&action);
    }

    fn highlight_label(&mut self, label: &str) {
        match self.keypad.find_button_by_label(label) {
            Some(index) => self.keypad.highlight(index),
            None => self.keypad.release_all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(app: &mut CalculatorApp, text: &str) {
        for c in text.chars() {
            app.handle_action(KeyAction::InsertChar(c));
        }
    }

    fn click_label(app: &mut CalculatorApp, label: &str) {
        let (x, y) = app.button_position(label).unwrap();
        assert!(app.click(x, y), "click on {label} missed");
    }

    fn pressed_labels(app: &CalculatorApp) -> Vec<&'static str> {
        app.keypad()
            .buttons()
            .filter(|b| b.pressed)
            .map(|b| b.label)
            .collect()
    }

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.session().display(), "");
        assert_eq!(app.session().mode(), AngleMode::Degrees);
        assert_eq!(app.area(), CalculatorApp::DEFAULT_AREA);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_app_with_mode() {
        let app = CalculatorApp::with_mode(AngleMode::Radians);
        assert_eq!(app.session().mode(), AngleMode::Radians);
    }

    // ===== Keyboard action tests =====

    #[test]
    fn test_typing_and_evaluate() {
        let mut app = CalculatorApp::default();
        type_str(&mut app, "2+2");
        app.handle_action(KeyAction::Evaluate);
        assert_eq!(app.session().display(), "4");
    }

    #[test]
    fn test_typing_highlights_matching_button() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::InsertChar('7'));
        assert_eq!(pressed_labels(&app), vec!["7"]);
        app.handle_action(KeyAction::InsertChar('s'));
        assert!(pressed_labels(&app).is_empty());
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut app = CalculatorApp::new();
        type_str(&mut app, "123");
        app.handle_action(KeyAction::Backspace);
        assert_eq!(app.session().expression(), "12");
        app.handle_action(KeyAction::Clear);
        assert_eq!(app.session().expression(), "");
        assert_eq!(pressed_labels(&app), vec!["C"]);
    }

    #[test]
    fn test_toggle_mode_action() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::ToggleMode);
        assert_eq!(app.session().mode(), AngleMode::Radians);
    }

    #[test]
    fn test_quit_action() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::None);
        assert!(!app.should_quit());
        app.handle_action(KeyAction::Quit);
        assert!(app.should_quit());
    }

    // ===== Mouse tests =====

    #[test]
    fn test_click_buttons() {
        let mut app = CalculatorApp::new();
        for label in ["sqrt", "8", "1", ")", "="] {
            click_label(&mut app, label);
        }
        assert_eq!(app.session().display(), "9");
        assert_eq!(pressed_labels(&app), vec!["="]);
    }

    #[test]
    fn test_click_action_routes_to_click() {
        let mut app = CalculatorApp::new();
        let (x, y) = app.button_position("5").unwrap();
        app.handle_action(KeyAction::Click { x, y });
        assert_eq!(app.session().expression(), "5");
    }

    #[test]
    fn test_click_mode_radios() {
        let mut app = CalculatorApp::new();
        let layout = app.layout();
        assert!(app.click(layout.radians.x, layout.radians.y));
        assert_eq!(app.session().mode(), AngleMode::Radians);
        assert!(app.click(layout.degrees.x + 4, layout.degrees.y));
        assert_eq!(app.session().mode(), AngleMode::Degrees);
    }

    #[test]
    fn test_click_outside_does_nothing() {
        let mut app = CalculatorApp::new();
        assert!(!app.click(0, 0));
        assert!(!app.click(79, 23));
        assert_eq!(app.session().expression(), "");
    }

    #[test]
    fn test_click_after_resize() {
        let mut app = CalculatorApp::new();
        app.resize(120, 40);
        assert_eq!(app.area(), Rect::new(0, 0, 120, 40));
        click_label(&mut app, "pi");
        assert_eq!(app.session().expression(), "pi");
    }

    // ===== press_label tests =====

    #[test]
    fn test_press_label() {
        let mut app = CalculatorApp::new();
        assert!(app.press_label("cos"));
        assert!(app.press_label("0"));
        assert!(app.press_label(")"));
        assert!(app.press_label("="));
        assert_eq!(app.session().display(), "1");
        assert!(!app.press_label("nope"));
    }
}
