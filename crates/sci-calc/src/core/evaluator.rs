//! AST evaluator
//!
//! Holds the two pieces of context an expression can depend on: the angle
//! mode for trigonometric functions and the previous answer bound to `Ans`.

use tracing::trace;

use crate::core::parser::{AstNode, Parser};
use crate::core::{AngleMode, CalcResult};

/// Evaluator for AST expressions
#[derive(Debug, Default, Clone)]
pub struct Evaluator {
    mode: AngleMode,
    answer: Option<f64>,
}

impl Evaluator {
    /// Creates a new evaluator in degrees mode with no previous answer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with the given angle mode
    #[must_use]
    pub fn with_mode(mode: AngleMode) -> Self {
        Self { mode, answer: None }
    }

    /// Returns the current angle mode
    #[must_use]
    pub fn mode(&self) -> AngleMode {
        self.mode
    }

    /// Changes the angle mode
    pub fn set_mode(&mut self, mode: AngleMode) {
        self.mode = mode;
    }

    /// Returns the value bound to `Ans`
    #[must_use]
    pub fn answer(&self) -> Option<f64> {
        self.answer
    }

    /// Binds `Ans` to a value (`None` makes it evaluate to 0)
    pub fn set_answer(&mut self, answer: Option<f64>) {
        self.answer = answer;
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Constant(c) => Ok(c.value()),
            AstNode::Answer => Ok(self.answer.unwrap_or(0.0)),
            AstNode::Negate(inner) => Ok(-self.evaluate(inner)?),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                op.apply(left_val, right_val)
            }
            AstNode::Call { function, args } => {
                let values = args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<CalcResult<Vec<f64>>>()?;
                let result = function.apply(&values, self.mode)?;
                trace!(function = function.name(), ?values, result, "function applied");
                Ok(result)
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Constant, Function, Operation};

    fn eval(input: &str) -> CalcResult<f64> {
        Evaluator::new().evaluate_str(input)
    }

    fn assert_close(actual: CalcResult<f64>, expected: f64) {
        let value = actual.unwrap();
        assert!(
            (value - expected).abs() < 1e-9,
            "expected {expected}, got {value}"
        );
    }

    // ===== Node evaluation tests =====

    #[test]
    fn test_evaluate_number() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate(&AstNode::number(42.0)), Ok(42.0));
    }

    #[test]
    fn test_evaluate_negate() {
        let eval = Evaluator::new();
        let ast = AstNode::negate(AstNode::negate(AstNode::number(5.0)));
        assert_eq!(eval.evaluate(&ast), Ok(5.0));
    }

    #[test]
    fn test_evaluate_constant() {
        let eval = Evaluator::new();
        assert_eq!(
            eval.evaluate(&AstNode::Constant(Constant::Pi)),
            Ok(std::f64::consts::PI)
        );
    }

    #[test]
    fn test_evaluate_call() {
        let eval = Evaluator::with_mode(AngleMode::Radians);
        let ast = AstNode::call(Function::Sqrt, vec![AstNode::number(81.0)]);
        assert_eq!(eval.evaluate(&ast), Ok(9.0));
    }

    #[test]
    fn test_evaluate_error_propagates_from_argument() {
        let eval = Evaluator::new();
        let ast = AstNode::call(
            Function::Abs,
            vec![AstNode::binary(
                AstNode::number(1.0),
                Operation::Divide,
                AstNode::number(0.0),
            )],
        );
        assert_eq!(eval.evaluate(&ast), Err(CalcError::DivisionByZero));
    }

    // ===== String evaluation: the documented behaviours =====

    #[test]
    fn test_two_plus_two() {
        assert_eq!(eval("2+2"), Ok(4.0));
    }

    #[test]
    fn test_sin_30_degrees() {
        assert_close(eval("sin(30)"), 0.5);
    }

    #[test]
    fn test_sin_30_radians() {
        let eval = Evaluator::with_mode(AngleMode::Radians);
        let value = eval.evaluate_str("sin(30)").unwrap();
        assert!((value - -0.988_031_624_092_861_8).abs() < 1e-12);
    }

    #[test]
    fn test_fifty_percent() {
        assert_eq!(eval("50%"), Ok(0.5));
    }

    #[test]
    fn test_malformed_expression() {
        assert!(matches!(eval("2+*3"), Err(CalcError::Parse(_))));
    }

    // ===== Further behaviour =====

    #[test]
    fn test_precedence_and_parens() {
        assert_eq!(eval("2 + 3 * 4"), Ok(14.0));
        assert_eq!(eval("(2 + 3) * 4"), Ok(20.0));
        assert_eq!(eval("2 ^ 3 ^ 2"), Ok(512.0));
        assert_eq!(eval("2 ** 10"), Ok(1024.0));
        assert_eq!(eval("-2 ^ 2"), Ok(-4.0));
        assert_eq!(eval("2 ^ -1"), Ok(0.5));
    }

    #[test]
    fn test_percent_in_context() {
        assert_eq!(eval("200 * 10%"), Ok(20.0));
        assert_eq!(eval("2 + 50%"), Ok(2.5));
        assert_eq!(eval("(30 + 20)%"), Ok(0.5));
    }

    #[test]
    fn test_percent_divides_whatever_precedes_it() {
        assert_close(eval("100/50%"), 0.02);
        assert_close(eval("2**3%"), 0.08);
        assert_close(eval("2^3%"), 0.08);
        assert_close(eval("sqrt(16)%"), 0.04);
    }

    #[test]
    fn test_percent_followed_by_digits() {
        assert_close(eval("50%2"), 50.0 / 1002.0);
        assert_close(eval("1%%"), 0.0001);
        assert!(eval("50%pi").is_err());
    }

    #[test]
    fn test_deep_nesting_is_an_error() {
        let parens = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert!(matches!(eval(&parens), Err(CalcError::Parse(_))));
        let signs = format!("{}1", "-".repeat(10_000));
        assert!(matches!(eval(&signs), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_trig_follows_mode() {
        let mut eval = Evaluator::new();
        assert_close(eval.evaluate_str("cos(180)"), -1.0);
        eval.set_mode(AngleMode::Radians);
        assert_close(eval.evaluate_str("cos(pi)"), -1.0);
        assert_eq!(eval.mode(), AngleMode::Radians);
    }

    #[test]
    fn test_scientific_functions() {
        assert_eq!(eval("sqrt(16)"), Ok(4.0));
        assert_close(eval("log(1000)"), 3.0);
        assert_close(eval("ln(e)"), 1.0);
        assert_eq!(eval("abs(-7.5)"), Ok(7.5));
        assert_eq!(eval("round(2.5)"), Ok(2.0));
        assert_close(eval("round(pi, 3)"), 3.142);
    }

    #[test]
    fn test_answer_binding() {
        let mut eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("Ans + 1"), Ok(1.0));
        eval.set_answer(Some(41.0));
        assert_eq!(eval.answer(), Some(41.0));
        assert_eq!(eval.evaluate_str("Ans + 1"), Ok(42.0));
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(eval("1 / 0"), Err(CalcError::DivisionByZero));
        assert_eq!(eval("5 / (50% - 0.5)"), Err(CalcError::DivisionByZero));
        assert!(matches!(eval("sqrt(-1)"), Err(CalcError::Domain { .. })));
        assert!(matches!(eval("log(-10)"), Err(CalcError::Domain { .. })));
        assert!(matches!(eval("ln(0)"), Err(CalcError::Domain { .. })));
        assert_eq!(eval("10 ^ 400"), Err(CalcError::Overflow));
    }

    #[test]
    fn test_name_and_arity_errors() {
        assert_eq!(eval("x + 1"), Err(CalcError::UnknownName("x".into())));
        assert!(matches!(eval("sin(1, 2)"), Err(CalcError::Arity { .. })));
    }

    #[test]
    fn test_empty() {
        assert_eq!(eval(""), Err(CalcError::EmptyExpression));
    }

    #[test]
    fn test_evaluator_clone_keeps_context() {
        let mut eval = Evaluator::with_mode(AngleMode::Radians);
        eval.set_answer(Some(3.0));
        let cloned = eval.clone();
        assert_eq!(cloned.mode(), AngleMode::Radians);
        assert_eq!(cloned.answer(), Some(3.0));
    }
}
