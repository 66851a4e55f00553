//! The calculator's button grid
//!
//! Toolkit-free: labels, what each button does, and how it should be
//! colored. The terminal window draws it and hit-tests clicks against it.
//!
//! ```text
//! [  C  ] [  (  ] [  )  ] [  /  ] [sqrt ]
//! [  7  ] [  8  ] [  9  ] [  *  ] [ log ]
//! [  4  ] [  5  ] [  6  ] [  -  ] [ ln  ]
//! [  1  ] [  2  ] [  3  ] [  +  ] [ abs ]
//! [  0  ] [  .  ] [  =  ] [  %  ] [ pi  ]
//! [ sin ] [ cos ] [ tan ] [  e  ] [ Ans ]
//! ```

use crate::core::{Constant, Function};

/// What pressing a button does to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Append literal text (digits, operators, parentheses, `.` and `%`)
    Insert(&'static str),
    /// Append the function name and an opening parenthesis
    Function(Function),
    /// Append the constant's name
    Constant(Constant),
    /// Append the previous answer
    Answer,
    /// Empty the buffer and the display
    Clear,
    /// Evaluate the buffer
    Evaluate,
}

/// Visual category of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// `C`
    Clear,
    /// `=`
    Evaluate,
    /// `pi`, `e`
    Constant,
    /// `sin`, `sqrt`, ...
    Function,
    /// `Ans`
    Answer,
    /// Digits and operators
    Plain,
}

impl ButtonKind {
    /// Background color as RGB
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Clear => (0xFF, 0x6B, 0x6B),
            Self::Evaluate => (0x4E, 0xCD, 0xC4),
            Self::Constant => (0xF6, 0xE0, 0x5E),
            Self::Function => (0x57, 0xF2, 0x87),
            Self::Answer => (0x9F, 0xA8, 0xDA),
            Self::Plain => (0x99, 0xAA, 0xB5),
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: &'static str,
    /// What it does
    pub action: ButtonAction,
    /// Whether it is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Button inserting its own label
    #[must_use]
    pub const fn insert(label: &'static str) -> Self {
        Self::new(label, ButtonAction::Insert(label))
    }

    /// Button inserting `name(`
    #[must_use]
    pub const fn function(function: Function) -> Self {
        Self::new(function.name(), ButtonAction::Function(function))
    }

    /// Button inserting a constant's name
    #[must_use]
    pub const fn constant(constant: Constant) -> Self {
        Self::new(constant.name(), ButtonAction::Constant(constant))
    }

    const fn new(label: &'static str, action: ButtonAction) -> Self {
        Self {
            label,
            action,
            pressed: false,
        }
    }

    /// Visual category, derived from the action
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        match self.action {
            ButtonAction::Insert(_) => ButtonKind::Plain,
            ButtonAction::Function(_) => ButtonKind::Function,
            ButtonAction::Constant(_) => ButtonKind::Constant,
            ButtonAction::Answer => ButtonKind::Answer,
            ButtonAction::Clear => ButtonKind::Clear,
            ButtonAction::Evaluate => ButtonKind::Evaluate,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The fixed 6x5 grid of buttons
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Row-major
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of rows
    pub const ROWS: usize = 6;
    /// Number of columns
    pub const COLS: usize = 5;

    /// Creates the standard scientific keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadButton as B;

        let buttons = vec![
            B::new("C", ButtonAction::Clear),
            B::insert("("),
            B::insert(")"),
            B::insert("/"),
            B::function(Function::Sqrt),
            //
            B::insert("7"),
            B::insert("8"),
            B::insert("9"),
            B::insert("*"),
            B::function(Function::Log),
            //
            B::insert("4"),
            B::insert("5"),
            B::insert("6"),
            B::insert("-"),
            B::function(Function::Ln),
            //
            B::insert("1"),
            B::insert("2"),
            B::insert("3"),
            B::insert("+"),
            B::function(Function::Abs),
            //
            B::insert("0"),
            B::insert("."),
            B::new("=", ButtonAction::Evaluate),
            B::insert("%"),
            B::constant(Constant::Pi),
            //
            B::function(Function::Sin),
            B::function(Function::Cos),
            B::function(Function::Tan),
            B::constant(Constant::E),
            B::new("Ans", ButtonAction::Answer),
        ];

        Self {
            buttons,
            cols: Self::COLS,
            rows: Self::ROWS,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button index by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Highlights a button by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button at `index`
    pub fn highlight(&mut self, index: usize) {
        self.release_all();
        self.press_button(index);
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons
            .iter()
            .enumerate()
            .map(move |(i, btn)| ((i / self.cols, i % self.cols), btn))
    }
}
