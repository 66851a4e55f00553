//! Arithmetic operators, the scientific function table and named constants

use crate::core::{AngleMode, CalcError, CalcResult};

/// Binary operators understood by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Power (^ or **)
    Power,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        }
    }

    /// Returns the precedence level (higher = evaluated first)
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
            Self::Power => 3,
        }
    }

    /// Returns true if this operation is left-associative
    #[must_use]
    pub const fn is_left_associative(&self) -> bool {
        !matches!(self, Self::Power)
    }

    /// Applies the operator to two operands
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
            Self::Power => {
                if a == 0.0 && b < 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a.powf(b)
            }
        };
        check_finite(result, "pow", a)
    }
}

/// Functions reachable from the keypad (plus `round`, which can be typed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// Sine, argument interpreted per angle mode
    Sin,
    /// Cosine, argument interpreted per angle mode
    Cos,
    /// Tangent, argument interpreted per angle mode
    Tan,
    /// Square root
    Sqrt,
    /// Base-10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    /// Absolute value
    Abs,
    /// Round half to even, optionally to a number of decimal digits
    Round,
}

impl Function {
    /// Every function, in keypad order
    pub const ALL: [Self; 8] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Log,
        Self::Ln,
        Self::Abs,
        Self::Round,
    ];

    /// The name used in expressions
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Abs => "abs",
            Self::Round => "round",
        }
    }

    /// Looks a function up by name (case-sensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// True for sin/cos/tan
    #[must_use]
    pub const fn is_trigonometric(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    const fn arity(self) -> (usize, usize, &'static str) {
        match self {
            Self::Round => (1, 2, "1 or 2"),
            _ => (1, 1, "1"),
        }
    }

    /// Applies the function to its arguments
    pub fn apply(self, args: &[f64], mode: AngleMode) -> CalcResult<f64> {
        let (min, max, expected) = self.arity();
        if args.len() < min || args.len() > max {
            return Err(CalcError::Arity {
                name: self.name(),
                expected,
                found: args.len(),
            });
        }
        let x = args[0];

        let result = match self {
            Self::Sin => mode.to_radians(x).sin(),
            Self::Cos => mode.to_radians(x).cos(),
            Self::Tan => mode.to_radians(x).tan(),
            Self::Sqrt => {
                if x < 0.0 {
                    return Err(self.domain_error(x));
                }
                x.sqrt()
            }
            Self::Log => {
                if x <= 0.0 {
                    return Err(self.domain_error(x));
                }
                x.log10()
            }
            Self::Ln => {
                if x <= 0.0 {
                    return Err(self.domain_error(x));
                }
                x.ln()
            }
            Self::Abs => x.abs(),
            Self::Round => match args.get(1) {
                None => x.round_ties_even(),
                Some(&digits) => round_to_digits(x, digits)?,
            },
        };

        check_finite(result, self.name(), x)
    }

    const fn domain_error(self, value: f64) -> CalcError {
        CalcError::Domain {
            function: self.name(),
            value,
        }
    }
}

fn round_to_digits(x: f64, digits: f64) -> CalcResult<f64> {
    if digits.fract() != 0.0 {
        return Err(CalcError::Domain {
            function: "round",
            value: digits,
        });
    }
    let factor = 10f64.powi(digits as i32);
    let scaled = x * factor;
    if factor == 0.0 {
        return Ok(0.0);
    }
    // Past the precision of f64 there is nothing left to round
    if !scaled.is_finite() {
        return Ok(x);
    }
    Ok(scaled.round_ties_even() / factor)
}

/// Named constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// Archimedes' constant
    Pi,
    /// Euler's number
    E,
}

impl Constant {
    /// The name used in expressions
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// Looks a constant up by name (case-sensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    /// The constant's value
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

/// Rejects NaN and infinities
fn check_finite(result: f64, function: &'static str, value: f64) -> CalcResult<f64> {
    if result.is_nan() {
        Err(CalcError::Domain { function, value })
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(result)
    }
}
