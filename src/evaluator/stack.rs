use crate::error::{Error, Result};

use std::collections::VecDeque;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use num_traits::Zero;

/// A LIFO of 32 bit integers whose arithmetic operations each consume the
/// top two values and push the result.
#[derive(Debug, Default, Clone)]
pub struct IntegerStack {
    store: VecDeque<i32>,
}

impl IntegerStack {
    /// An empty stack
    pub fn new() -> Self {
        Default::default()
    }

    /// Place `v` on top
    pub fn push(&mut self, v: i32) {
        self.store.push_back(v)
    }

    /// Remove and return the top value, or `StackEmpty`
    pub fn pop(&mut self) -> Result<i32> {
        self.store.pop_back().ok_or(Error::StackEmpty)
    }

    /// The top value without removing it, or `StackEmpty`
    pub fn top(&self) -> Result<i32> {
        self.store.back().copied().ok_or(Error::StackEmpty)
    }

    /// Alias of [`IntegerStack::top`].
    pub fn peek(&self) -> Result<i32> {
        self.top()
    }

    /// Number of values held
    pub fn size(&self) -> usize {
        self.store.len()
    }

    /// Whether no values are held
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Replace the top two values with their sum.
    pub fn add(&mut self) -> Result<()> {
        trace!("action: add");

        let a = self.pop()?;
        let b = self.pop()?;

        self.push(a.wrapping_add(b));

        Ok(())
    }

    /// Replace the top two values with the second minus the top.
    pub fn sub(&mut self) -> Result<()> {
        trace!("action: subtract");

        let a = self.pop()?;
        let b = self.pop()?;

        self.push(b.wrapping_sub(a));

        Ok(())
    }

    /// Replace the top two values with their product.
    pub fn mul(&mut self) -> Result<()> {
        trace!("action: multiply");

        let a = self.pop()?;
        let b = self.pop()?;

        self.push(a.wrapping_mul(b));

        Ok(())
    }

    /// Truncating division of the second value by the top value.
    ///
    /// Both operands are consumed even when the divisor is zero.
    pub fn div(&mut self) -> Result<()> {
        trace!("action: divide");

        let a = self.pop()?;
        let b = self.pop()?;

        if a.is_zero() {
            info!("divide failed: division by zero");

            return Err(Error::DivisionByZero);
        }

        // i32::MIN / -1 wraps back to i32::MIN
        self.push(b.wrapping_div(a));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(values: &[i32]) -> IntegerStack {
        let mut stack = IntegerStack::new();
        for v in values {
            stack.push(*v);
        }
        stack
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = stack_of(&[1, 2, 3]);
        assert_eq!(3, stack.size());
        assert_eq!(Ok(3), stack.pop());
        assert_eq!(Ok(2), stack.pop());
        assert_eq!(Ok(1), stack.pop());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_stack() {
        let mut stack = IntegerStack::new();
        assert_eq!(Err(Error::StackEmpty), stack.pop());
        assert_eq!(Err(Error::StackEmpty), stack.top());
        assert_eq!(Err(Error::StackEmpty), stack.peek());
        assert_eq!(0, stack.size());
    }

    #[test]
    fn test_top_does_not_remove() {
        let stack = stack_of(&[7, 9]);
        assert_eq!(Ok(9), stack.top());
        assert_eq!(Ok(9), stack.peek());
        assert_eq!(2, stack.size());
    }

    #[test]
    fn test_operand_order() {
        let mut stack = stack_of(&[1, 2]);
        stack.sub().unwrap();
        assert_eq!(Ok(-1), stack.top());

        let mut stack = stack_of(&[7, 2]);
        stack.div().unwrap();
        assert_eq!(Ok(3), stack.top());

        let mut stack = stack_of(&[-7, 2]);
        stack.div().unwrap();
        assert_eq!(Ok(-3), stack.top());
    }

    #[test]
    fn test_fused_ops_replace_two_with_one() {
        let mut stack = stack_of(&[5, 3, 4]);
        stack.add().unwrap();
        assert_eq!(2, stack.size());
        stack.mul().unwrap();
        assert_eq!(1, stack.size());
        assert_eq!(Ok(35), stack.top());
    }

    #[test]
    fn test_underflow() {
        let mut stack = IntegerStack::new();
        assert_eq!(Err(Error::StackEmpty), stack.add());

        // the first operand is consumed before the second pop fails
        let mut stack = stack_of(&[1]);
        assert_eq!(Err(Error::StackEmpty), stack.mul());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_division_by_zero() {
        let mut stack = stack_of(&[5, 0]);
        assert_eq!(Err(Error::DivisionByZero), stack.div());

        let mut stack = stack_of(&[0]);
        assert_eq!(Err(Error::StackEmpty), stack.div());
    }

    #[test]
    fn test_wrapping() {
        let mut stack = stack_of(&[i32::MAX, 1]);
        stack.add().unwrap();
        assert_eq!(Ok(i32::MIN), stack.top());

        let mut stack = stack_of(&[i32::MIN, 1]);
        stack.sub().unwrap();
        assert_eq!(Ok(i32::MAX), stack.top());

        let mut stack = stack_of(&[65536, 65536]);
        stack.mul().unwrap();
        assert_eq!(Ok(0), stack.top());

        let mut stack = stack_of(&[i32::MIN, -1]);
        stack.div().unwrap();
        assert_eq!(Ok(i32::MIN), stack.top());
    }
}
