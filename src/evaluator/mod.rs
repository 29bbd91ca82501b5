use crate::error::{Error, InvalidReason, Result};
use crate::token::{tokenize, Token, Tokens};

mod stack;
pub use stack::IntegerStack;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Evaluates a single postfix expression, one token at a time.
///
/// The evaluator owns its stack, so every expression starts from an empty
/// stack and nothing carries over between evaluations.
#[derive(Debug)]
pub struct Evaluator<'a> {
    tokens: Tokens<'a>,
    stack: IntegerStack,
    step_no: usize,
}

impl<'a> Evaluator<'a> {
    /// Prepare `expr` for evaluation on an empty stack.
    pub fn new(expr: &'a str) -> Self {
        Self {
            tokens: tokenize(expr),
            stack: IntegerStack::new(),
            step_no: 0,
        }
    }

    /// The stack as left by the last step.
    pub fn stack(&self) -> &IntegerStack {
        &self.stack
    }

    /// Consume the next token.
    ///
    /// Returns `Ok(false)` once there are no tokens left. An error leaves the
    /// evaluator in an unspecified state and it should not be stepped again.
    pub fn step(&mut self) -> Result<bool> {
        let token = match self.tokens.next() {
            Some(token) => token,
            None => return Ok(false),
        };

        trace!(
            "step {:}  token {:?}  depth {}",
            self.step_no,
            token,
            self.stack.size()
        );

        match Token::classify(token)? {
            Token::Integer(v) => {
                trace!("action: push, value {:?}", v);

                self.stack.push(v);
            }
            Token::Operator(op) => {
                if let Err(e) = op.apply(&mut self.stack) {
                    info!("{} failed at step {}: {}", op, self.step_no, e);

                    return Err(e);
                }
            }
            Token::Invalid => {
                info!("invalid token {:?} at step {}", token, self.step_no);

                return Err(InvalidReason::InvalidToken(token.to_string()).into());
            }
        }

        self.step_no += 1;

        Ok(true)
    }

    /// Step through every token and return the single value left behind.
    pub fn run(mut self) -> Result<i32> {
        while self.step()? {}

        match self.stack.size() {
            1 => {
                let result = self.stack.top()?;
                debug!("evaluated {} tokens to {}", self.step_no, result);

                Ok(result)
            }
            n => {
                debug!("evaluation left {} values on the stack", n);

                Err(Error::InvalidExpression(InvalidReason::FinalStackSize(n)))
            }
        }
    }
}

/// Evaluate a postfix expression over 32 bit integers.
///
/// ```
/// assert_eq!(Ok(-7), postfix::evaluate("1 2 - 3 4 + *"));
/// ```
pub fn evaluate(expr: &str) -> Result<i32> {
    Evaluator::new(expr).run()
}
