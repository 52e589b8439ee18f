//! Stack with O(1) minimum query.
//!
//! # Algorithm
//!
//! Every entry stores the pushed value together with the minimum of
//! itself and everything beneath it. The top entry therefore always
//! carries the minimum of the whole stack, and popping restores the
//! previous minimum for free because it is still recorded one entry
//! down. A plain stack would need an O(n) scan to answer the same query.
//!
//! # Complexity
//! Time: O(1) for every operation (push amortized), Space: O(n)

use std::fmt;

use crate::collections::Stack;
use crate::error::{StackError, StackResult};

/// One `MinStack` slot: the pushed value and the running minimum at the
/// moment it was pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinEntry<T> {
    pub value: T,
    pub running_min: T,
}

/// Stack answering "current minimum" in O(1).
///
/// # Examples
/// ```
/// use u_stackkit::collections::MinStack;
///
/// let mut s = MinStack::new();
/// let mut minima = Vec::new();
/// for v in [3, 5, 2, 1, 4] {
///     s.push(v);
///     minima.push(s.get_min().unwrap());
/// }
/// assert_eq!(minima, vec![3, 3, 2, 1, 1]);
///
/// assert_eq!(s.pop(), Ok(4));
/// assert_eq!(s.pop(), Ok(1));
/// assert_eq!(s.get_min(), Ok(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinStack<T> {
    entries: Stack<MinEntry<T>>,
}

impl<T: Ord + Copy> MinStack<T> {
    /// Creates an empty min-stack.
    pub fn new() -> Self {
        Self {
            entries: Stack::new(),
        }
    }

    /// Pushes `value`, recording `min(value, current minimum)` alongside it.
    pub fn push(&mut self, value: T) {
        let running_min = match self.entries.peek() {
            Ok(top) => value.min(top.running_min),
            Err(_) => value,
        };
        self.entries.push(MinEntry { value, running_min });
    }

    /// Removes the top entry and returns its value.
    ///
    /// # Errors
    /// [`StackError::Underflow`] if the stack is empty.
    pub fn pop(&mut self) -> StackResult<T> {
        self.entries
            .pop()
            .map(|entry| entry.value)
            .map_err(|_| StackError::underflow("pop"))
    }

    /// Returns the top value without removing it.
    ///
    /// # Errors
    /// [`StackError::Underflow`] if the stack is empty.
    pub fn top(&self) -> StackResult<T> {
        self.entries
            .peek()
            .map(|entry| entry.value)
            .map_err(|_| StackError::underflow("top"))
    }

    /// Returns the minimum of all values currently held.
    ///
    /// # Errors
    /// [`StackError::Underflow`] if the stack is empty.
    pub fn get_min(&self) -> StackResult<T> {
        self.entries
            .peek()
            .map(|entry| entry.running_min)
            .map_err(|_| StackError::underflow("get_min"))
    }

    /// Returns `true` if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of values held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T: Ord + Copy> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for MinStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinStack: [")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, min={})", entry.value, entry.running_min)?;
        }
        write!(f, "]")
    }
}
