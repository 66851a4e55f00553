//! One behavioral suite, several front ends
//!
//! [`CalculatorDriver`] abstracts "press buttons, read the display". The
//! `verify_*` functions are written once against it and run against the bare
//! [`Session`] and against the terminal window, which goes through real key
//! events and mouse clicks.

use crate::core::AngleMode;
use crate::keypad::Keypad;
use crate::session::Session;

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses the keypad button with the given label.
    ///
    /// Returns false if no such button exists.
    fn press_label(&mut self, label: &str) -> bool;

    /// Replaces the buffer with `expr` and presses `=`
    fn enter_expression(&mut self, expr: &str);

    /// Text on the numeric display
    fn get_display(&self) -> String;

    /// Current expression buffer
    fn get_expression(&self) -> String;

    /// Selects an angle mode
    fn set_mode(&mut self, mode: AngleMode);

    /// Presses `C`
    fn clear(&mut self);

    /// History entries, newest first
    fn get_history(&self) -> Vec<HistoryItem>;
}

/// A simplified history item for driver results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// The expression that was evaluated
    pub expression: String,
    /// The result as displayed
    pub result: String,
}

fn history_items(session: &Session) -> Vec<HistoryItem> {
    session
        .history()
        .iter_rev()
        .map(|entry| HistoryItem {
            expression: entry.expression.clone(),
            result: entry.display.clone(),
        })
        .collect()
}

/// Driver working directly on a [`Session`]
#[derive(Debug, Default)]
pub struct SessionDriver {
    session: Session,
    keypad: Keypad,
}

impl SessionDriver {
    /// Creates a driver over a fresh session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying session
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl CalculatorDriver for SessionDriver {
    fn press_label(&mut self, label: &str) -> bool {
        let Some(action) = self
            .keypad
            .find_button_by_label(label)
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|btn| btn.action)
        else {
            return false;
        };
        self.session.press(&action);
        true
    }

    fn enter_expression(&mut self, expr: &str) {
        self.session.clear();
        self.session.insert(expr);
        self.session.evaluate();
    }

    fn get_display(&self) -> String {
        self.session.display().to_string()
    }

    fn get_expression(&self) -> String {
        self.session.expression().to_string()
    }

    fn set_mode(&mut self, mode: AngleMode) {
        self.session.set_mode(mode);
    }

    fn clear(&mut self) {
        self.session.clear();
    }

    fn get_history(&self) -> Vec<HistoryItem> {
        history_items(&self.session)
    }
}

/// Terminal window driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{history_items, CalculatorDriver, HistoryItem};
    use crate::core::AngleMode;
    use crate::tui::{CalculatorApp, InputHandler, KeyAction};

    /// Driver feeding key events and mouse clicks to a [`CalculatorApp`]
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
        input: InputHandler,
    }

    impl TuiDriver {
        /// Creates a new window driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a window driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                input: InputHandler::new(),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }

        fn key(&mut self, code: KeyCode) {
            let action = self
                .input
                .handle_key(KeyEvent::new(code, KeyModifiers::NONE));
            self.app.handle_action(action);
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press_label(&mut self, label: &str) -> bool {
            match self.app.button_position(label) {
                Some((x, y)) => self.app.click(x, y),
                None => false,
            }
        }

        fn enter_expression(&mut self, expr: &str) {
            self.key(KeyCode::Esc);
            for c in expr.chars() {
                self.key(KeyCode::Char(c));
            }
            self.key(KeyCode::Enter);
        }

        fn get_display(&self) -> String {
            self.app.session().display().to_string()
        }

        fn get_expression(&self) -> String {
            self.app.session().expression().to_string()
        }

        fn set_mode(&mut self, mode: AngleMode) {
            let layout = self.app.layout();
            let radio = match mode {
                AngleMode::Degrees => layout.degrees,
                AngleMode::Radians => layout.radians,
            };
            self.app.handle_action(KeyAction::Click {
                x: radio.x,
                y: radio.y,
            });
        }

        fn clear(&mut self) {
            self.press_label("C");
        }

        fn get_history(&self) -> Vec<HistoryItem> {
            history_items(self.app.session())
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behavioral suites =====
// These run against ANY CalculatorDriver implementation

/// The four documented examples plus the error case
pub fn verify_documented_examples<D: CalculatorDriver>(driver: &mut D) {
    driver.set_mode(AngleMode::Degrees);

    driver.enter_expression("2+2");
    assert_eq!(driver.get_display(), "4");

    driver.enter_expression("sin(30)");
    assert_eq!(driver.get_display(), "0.5");

    driver.set_mode(AngleMode::Radians);
    driver.enter_expression("sin(30)");
    assert_eq!(driver.get_display(), "-0.988031624093");
    driver.set_mode(AngleMode::Degrees);

    driver.enter_expression("50%");
    assert_eq!(driver.get_display(), "0.5");

    driver.enter_expression("2+*3");
    assert_eq!(driver.get_display(), "Error");
    assert_eq!(driver.get_expression(), "");
    driver.clear();
}

/// Buttons build the expression text that gets evaluated
pub fn verify_keypad_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    for label in ["7", "*", "6", "="] {
        assert!(driver.press_label(label), "no button {label}");
    }
    assert_eq!(driver.get_display(), "42");

    driver.clear();
    for label in ["sqrt", "1", "6", ")"] {
        driver.press_label(label);
    }
    assert_eq!(driver.get_expression(), "sqrt(16)");
    driver.press_label("=");
    assert_eq!(driver.get_display(), "4");

    driver.clear();
    for label in ["1", "0", "0", "/", "5", "0", "%", "="] {
        driver.press_label(label);
    }
    assert_eq!(driver.get_display(), "0.02");

    driver.clear();
    for label in ["2", "*", "pi"] {
        driver.press_label(label);
    }
    assert_eq!(driver.get_display(), "2*pi");
    driver.clear();
    assert_eq!(driver.get_display(), "");
}

/// Operator precedence and associativity
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) {
    driver.enter_expression("2+3*4");
    assert_eq!(driver.get_display(), "14");

    driver.enter_expression("(2+3)*4");
    assert_eq!(driver.get_display(), "20");

    driver.enter_expression("2^3^2");
    assert_eq!(driver.get_display(), "512");

    driver.enter_expression("-2^2");
    assert_eq!(driver.get_display(), "-4");

    driver.enter_expression("200*10%");
    assert_eq!(driver.get_display(), "20");
    driver.clear();
}

/// Every failure shows `Error` and empties the buffer
pub fn verify_error_state<D: CalculatorDriver>(driver: &mut D) {
    for expr in ["1/0", "sqrt(-1)", "log(0)", "ln(-1)", "foo(2)", "(1+2", "10^400"] {
        driver.enter_expression(expr);
        assert_eq!(driver.get_display(), "Error", "{expr}");
        assert_eq!(driver.get_expression(), "", "{expr}");
    }
    driver.clear();
}

/// `Ans` recalls the previous result and results chain
pub fn verify_answer_recall<D: CalculatorDriver>(driver: &mut D) {
    driver.enter_expression("6*7");
    assert_eq!(driver.get_display(), "42");

    driver.press_label("/");
    driver.press_label("2");
    driver.press_label("=");
    assert_eq!(driver.get_display(), "21");

    driver.clear();
    driver.press_label("Ans");
    driver.press_label("+");
    driver.press_label("1");
    assert_eq!(driver.get_expression(), "21+1");
    driver.press_label("=");
    assert_eq!(driver.get_display(), "22");
    driver.clear();
}

/// Trigonometry follows the selected mode
pub fn verify_angle_modes<D: CalculatorDriver>(driver: &mut D) {
    driver.set_mode(AngleMode::Degrees);
    driver.enter_expression("cos(180)");
    assert_eq!(driver.get_display(), "-1");

    driver.set_mode(AngleMode::Radians);
    driver.enter_expression("cos(pi)");
    assert_eq!(driver.get_display(), "-1");

    driver.enter_expression("tan(0)");
    assert_eq!(driver.get_display(), "0");

    driver.set_mode(AngleMode::Degrees);
    driver.clear();
}

/// History lists successful evaluations, newest first
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    let before = driver.get_history().len();

    driver.enter_expression("1+1");
    driver.enter_expression("1/0");
    driver.enter_expression("3+3");

    let history = driver.get_history();
    assert_eq!(history.len(), before + 2);
    assert_eq!(
        history[0],
        HistoryItem {
            expression: "3+3".into(),
            result: "6".into(),
        }
    );
    assert_eq!(history[1].expression, "1+1");
    driver.clear();
}

/// Complete verification suite
pub fn run_all_suites<D: CalculatorDriver>(driver: &mut D) {
    verify_documented_examples(driver);
    verify_keypad_entry(driver);
    verify_precedence(driver);
    verify_error_state(driver);
    verify_answer_recall(driver);
    verify_angle_modes(driver);
    verify_history(driver);
}
