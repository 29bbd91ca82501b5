use crate::error::{InvalidReason, Result};
use crate::evaluator::IntegerStack;

use std::fmt;

/// The four binary operators of a postfix expression
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Matches a token consisting of exactly one of `+ - * /`.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    /// Run the matching fused operation on `stack`.
    pub fn apply(self, stack: &mut IntegerStack) -> Result<()> {
        match self {
            Operator::Add => stack.add(),
            Operator::Sub => stack.sub(),
            Operator::Mul => stack.mul(),
            Operator::Div => stack.div(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => write!(f, "+")?,
            Operator::Sub => write!(f, "-")?,
            Operator::Mul => write!(f, "*")?,
            Operator::Div => write!(f, "/")?,
        }

        Ok(())
    }
}

/// What a single token of an expression turned out to be
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// An integer literal, already parsed
    Integer(i32),
    /// One of the four operators
    Operator(Operator),
    /// Anything else
    Invalid,
}

impl Token {
    /// Classify a single whitespace free token.
    ///
    /// Integer literals take precedence over operators, so `-0` is the
    /// number zero while `-` on its own is subtraction. A literal that is
    /// well formed but does not fit in an `i32` is an error rather than
    /// [`Token::Invalid`].
    pub fn classify(s: &str) -> Result<Self> {
        if is_integer_literal(s) {
            let value = s
                .parse::<i32>()
                .map_err(|_| InvalidReason::LiteralOutOfRange(s.to_string()))?;

            Ok(Token::Integer(value))
        } else if let Some(op) = Operator::from_token(s) {
            Ok(Token::Operator(op))
        } else {
            Ok(Token::Invalid)
        }
    }
}

/// An optional `-` followed by either a lone `0` or a non-zero digit and
/// any number of further digits.
pub fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s).as_bytes();

    match digits {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

/// Space, tab, newline, vertical tab, form feed and carriage return.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Iterator over the non-empty tokens of an expression.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.trim_start_matches(is_separator);
        let end = start.find(is_separator).unwrap_or(start.len());

        let (token, rest) = start.split_at(end);
        self.rest = rest;

        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }
}

/// Split an expression on runs of separator characters.
pub fn tokenize(expr: &str) -> Tokens<'_> {
    Tokens { rest: expr }
}
