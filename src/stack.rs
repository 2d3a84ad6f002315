use std::fmt;

use crate::error::{Error, Result};

/// A LIFO stack, optionally bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
    limit: Option<usize>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: vec![],
            limit: None,
        }
    }

    /// A stack that refuses to grow past `limit` elements.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            items: Vec::with_capacity(limit),
            limit: Some(limit),
        }
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        if self.limit.is_some_and(|limit| self.items.len() >= limit) {
            return Err(Error::StackOverflow);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::StackUnderflow)
    }

    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyStack)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

impl<T: Clone> Stack<T> {
    /// Copy of the elements, bottom to top.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack([")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "])")
    }
}

/// A stack that reports its minimum in constant time.
///
/// `mins` holds every pushed value that was `<=` the minimum at the time,
/// so its top is always the minimum of `items`.
#[derive(Debug, Clone)]
pub struct MinStack<T> {
    items: Vec<T>,
    mins: Vec<T>,
}

impl<T: Ord + Clone> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> MinStack<T> {
    pub fn new() -> Self {
        Self {
            items: vec![],
            mins: vec![],
        }
    }

    pub fn push(&mut self, item: T) {
        if self.mins.last().map_or(true, |min| item <= *min) {
            self.mins.push(item.clone());
        }
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Result<T> {
        let popped = self.items.pop().ok_or(Error::EmptyStack)?;
        if self.mins.last() == Some(&popped) {
            self.mins.pop();
        }
        Ok(popped)
    }

    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyStack)
    }

    pub fn min(&self) -> Result<&T> {
        self.mins.last().ok_or(Error::EmptyStack)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Whether every `(`, `[` and `{` in `expression` is closed in order.
/// Other characters are ignored.
pub fn balanced_parentheses(expression: &str) -> bool {
    let mut stack = Stack::new();
    for c in expression.chars() {
        match c {
            '(' | '[' | '{' => stack.items.push(c),
            ')' | ']' | '}' => {
                let expected = match stack.pop() {
                    Ok('(') => ')',
                    Ok('[') => ']',
                    Ok('{') => '}',
                    _ => return false,
                };
                if c != expected {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Evaluates a whitespace separated postfix expression over `+ - * /`.
pub fn evaluate_postfix(expression: &str) -> Result<f64> {
    let mut stack: Stack<f64> = Stack::new();

    for token in expression.split_whitespace() {
        match token {
            "+" | "-" | "*" | "/" => {
                if stack.len() < 2 {
                    return Err(Error::InvalidPostfix);
                }
                let rhs = stack.pop()?;
                let lhs = stack.pop()?;
                let value = match token {
                    "+" => lhs + rhs,
                    "-" => lhs - rhs,
                    "*" => lhs * rhs,
                    _ => {
                        if rhs == 0.0 {
                            return Err(Error::DivisionByZero);
                        }
                        lhs / rhs
                    }
                };
                stack.push(value)?;
            }
            _ => {
                let value = token
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| Error::InvalidToken(token.to_string()))?;
                stack.push(value)?;
            }
        }
    }

    if stack.len() != 1 {
        return Err(Error::InvalidPostfix);
    }
    stack.pop()
}

#[cfg(test)]
#[path = "stack_tests.rs"]
mod tests;
