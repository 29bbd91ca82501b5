/// Errors produced while evaluating an expression
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The token stream is not a well formed postfix expression
    #[error("invalid expression: {0}")]
    InvalidExpression(InvalidReason),
    /// An operator ran out of operands
    #[error("stack empty: operator applied with too few operands")]
    StackEmpty,
    /// The divisor of a `/` was zero
    #[error("division by zero")]
    DivisionByZero,
}

/// Why an expression was rejected as invalid
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidReason {
    /// Neither an integer literal nor an operator
    #[error("unrecognised token {0:?}")]
    InvalidToken(String),
    /// An integer literal that does not fit in 32 bits
    #[error("integer literal {0} is out of range")]
    LiteralOutOfRange(String),
    /// Evaluation finished with other than exactly one value on the stack
    #[error("expected exactly one value left on the stack, found {0}")]
    FinalStackSize(usize),
}

impl From<InvalidReason> for Error {
    fn from(reason: InvalidReason) -> Self {
        Error::InvalidExpression(reason)
    }
}

/// Result type of every fallible operation in this crate
pub type Result<T> = std::result::Result<T, Error>;
