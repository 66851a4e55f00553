//! Expression tokenizer and recursive descent parser

use std::borrow::Cow;

use crate::core::{CalcError, CalcResult, Constant, Function, Operation};

/// Name that evaluates to the previous answer
pub const ANSWER_NAME: &str = "Ans";

/// Text every `%` stands for, spliced in before tokenizing
pub const PERCENT_REWRITE: &str = "/100";

/// Deepest nesting of parentheses, signs, powers and operator chains
pub const MAX_DEPTH: usize = 256;

/// Replaces each `%` with `/100`, as text.
///
/// A digit after the sign joins the divisor: `50%2` reads as `50/1002`.
#[must_use]
pub fn expand_percent(input: &str) -> Cow<'_, str> {
    if input.contains('%') {
        Cow::Owned(input.replace('%', PERCENT_REWRITE))
    } else {
        Cow::Borrowed(input)
    }
}

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Function, constant or `Ans`
    Name(String),
    /// Binary operator
    Operator(Operation),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
    /// Argument separator
    Comma,
}

impl Token {
    /// Returns true if this token is an operator
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this token is a number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Named constant
    Constant(Constant),
    /// The previous answer
    Answer,
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
    /// Function call
    Call {
        /// Function being called
        function: Function,
        /// Argument expressions
        args: Vec<AstNode>,
    },
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }

    /// Creates a new function call node
    #[must_use]
    pub fn call(function: Function, args: Vec<AstNode>) -> Self {
        Self::Call { function, args }
    }
}

/// Tokenizer for converting expression strings to tokens
///
/// Works on the text after [`expand_percent`], so `%` never appears as a
/// token of its own.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: Cow<'a, str>,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input: expand_percent(input),
            pos: 0,
        }
    }

    /// Returns the remaining input
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            c if c.is_ascii_alphabetic() || c == '_' => self.read_name(),
            '*' => {
                self.advance();
                if self.current_char() == Some('*') {
                    self.advance();
                    Token::Operator(Operation::Power)
                } else {
                    Token::Operator(Operation::Multiply)
                }
            }
            _ => {
                let token = match ch {
                    '+' => Token::Operator(Operation::Add),
                    '-' => Token::Operator(Operation::Subtract),
                    '/' => Token::Operator(Operation::Divide),
                    '^' => Token::Operator(Operation::Power),
                    '(' => Token::LeftParen,
                    ')' => Token::RightParen,
                    ',' => Token::Comma,
                    _ => {
                        return Err(CalcError::parse(format!(
                            "Unexpected character: '{ch}'"
                        )));
                    }
                };
                self.advance();
                token
            }
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn skip_digits(&mut self) {
        while self.peek_byte(0).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;

        self.skip_digits();
        if self.peek_byte(0) == Some(b'.') {
            self.pos += 1;
            self.skip_digits();
        }

        // Exponent only when digits follow, so `2e` stays number + name
        if matches!(self.peek_byte(0), Some(b'e' | b'E')) {
            let digits_at = match self.peek_byte(1) {
                Some(b'+' | b'-') => 2,
                _ => 1,
            };
            if self.peek_byte(digits_at).is_some_and(|b| b.is_ascii_digit()) {
                self.pos += digits_at;
                self.skip_digits();
            }
        }

        let num_str = &self.input[start..self.pos];
        let value: f64 = num_str
            .parse()
            .map_err(|_| CalcError::parse(format!("Invalid number: '{num_str}'")))?;

        Ok(Token::Number(value))
    }

    fn read_name(&mut self) -> Token {
        let start = self.pos;
        while self
            .peek_byte(0)
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            self.pos += 1;
        }
        Token::Name(self.input[start..self.pos].to_string())
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('-' | '+') unary | power
/// power      ::= primary ('^' unary)?        // Right associative
/// primary    ::= NUMBER | NAME | NAME '(' args ')' | '(' expression ')'
/// args       ::= expression (',' expression)*
/// ```
///
/// `%` is rewritten to `/100` by the tokenizer before parsing. Nesting past
/// [`MAX_DEPTH`] is a parse error rather than unbounded recursion.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let tokens = Tokenizer::new(trimmed).tokenize()?;
        let mut parser = Self::new(tokens);
        parser.parse()
    }

    /// Parses all tokens into an AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(CalcError::parse(format!(
                "Unexpected {token:?} at position {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> CalcResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(CalcError::parse("Expression nested too deeply"));
        }
        self.depth += 1;
        Ok(())
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.current() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let depth = self.depth;
        let mut left = self.parse_term()?;

        // Each link deepens the left-leaning tree
        while let Some(Token::Operator(op @ (Operation::Add | Operation::Subtract))) =
            self.current()
        {
            let op = *op;
            self.advance();
            self.descend()?;
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        self.depth = depth;
        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let depth = self.depth;
        let mut left = self.parse_unary()?;

        while let Some(Token::Operator(op @ (Operation::Multiply | Operation::Divide))) =
            self.current()
        {
            let op = *op;
            self.advance();
            self.descend()?;
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }

        self.depth = depth;
        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        self.descend()?;
        let node = self.parse_signed();
        self.depth -= 1;
        node
    }

    fn parse_signed(&mut self) -> CalcResult<AstNode> {
        match self.current() {
            Some(Token::Operator(Operation::Subtract)) => {
                self.advance();
                Ok(AstNode::negate(self.parse_unary()?))
            }
            Some(Token::Operator(Operation::Add)) => {
                self.advance();
                self.parse_unary()
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> CalcResult<AstNode> {
        let base = self.parse_primary()?;

        if self.eat(&Token::Operator(Operation::Power)) {
            // Exponent may itself carry a sign: 2^-1
            let exponent = self.parse_unary()?;
            return Ok(AstNode::binary(base, Operation::Power, exponent));
        }

        Ok(base)
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        let token = self
            .advance()
            .ok_or_else(|| CalcError::parse("Unexpected end of expression"))?;

        match token {
            Token::Number(n) => Ok(AstNode::number(n)),
            Token::Name(name) => self.parse_name(name),
            Token::LeftParen => {
                let expr = self.parse_expression()?;
                self.expect_close_paren()?;
                Ok(expr)
            }
            _ => Err(CalcError::parse(format!("Unexpected token: {token:?}"))),
        }
    }

    fn parse_name(&mut self, name: String) -> CalcResult<AstNode> {
        if self.eat(&Token::LeftParen) {
            let Some(function) = Function::from_name(&name) else {
                return Err(CalcError::UnknownName(name));
            };
            let args = self.parse_args()?;
            return Ok(AstNode::call(function, args));
        }

        if name == ANSWER_NAME {
            return Ok(AstNode::Answer);
        }
        if let Some(constant) = Constant::from_name(&name) {
            return Ok(AstNode::Constant(constant));
        }
        if Function::from_name(&name).is_some() {
            return Err(CalcError::parse(format!("'{name}' must be called")));
        }
        Err(CalcError::UnknownName(name))
    }

    fn parse_args(&mut self) -> CalcResult<Vec<AstNode>> {
        let mut args = Vec::new();
        if self.eat(&Token::RightParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expression()?);
            if !self.eat(&Token::Comma) {
                break;
            }
        }
        self.expect_close_paren()?;
        Ok(args)
    }

    fn expect_close_paren(&mut self) -> CalcResult<()> {
        match self.advance() {
            Some(Token::RightParen) => Ok(()),
            Some(t) => Err(CalcError::parse(format!("Expected ')' but found {t:?}"))),
            None => Err(CalcError::parse("Unclosed parenthesis")),
        }
    }
}
