#![warn(missing_docs)]

//! Evaluation of integer arithmetic written in postfix (reverse Polish)
//! notation, e.g. `1 2 - 3 4 + *` for `(1 - 2) * (3 + 4)`.
//!
//! Arithmetic is on `i32` and wraps on overflow.

/// Errors produced by this library
pub mod error;
pub use error::{Error, InvalidReason, Result};

/// Token classification
pub mod token;
pub use token::{Operator, Token};

/// The stack machine driving an evaluation
pub mod evaluator;
pub use evaluator::{evaluate, Evaluator, IntegerStack};
