//! Generic LIFO stack.
//!
//! A thin owner of a `Vec<T>` that exposes only the top of the sequence.
//! Every algorithm in this crate builds on it, so the contract is kept
//! small and strict: inspecting or removing from an empty stack is an
//! [`StackError::Underflow`], never a silent default.
//!
//! # Complexity
//!
//! `push` is amortized O(1) (the backing vector doubles on growth);
//! `pop`, `peek`, `len` and `is_empty` are O(1).

use std::fmt;

use crate::error::{StackError, StackResult};

/// Last-in, first-out container.
///
/// # Examples
/// ```
/// use u_stackkit::collections::Stack;
///
/// let mut s = Stack::new();
/// s.push(1);
/// s.push(2);
/// assert_eq!(s.peek(), Ok(&2));
/// assert_eq!(s.pop(), Ok(2));
/// assert_eq!(s.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `value` as the new top.
    pub fn push(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    /// [`StackError::Underflow`] if the stack is empty.
    pub fn pop(&mut self) -> StackResult<T> {
        self.elements.pop().ok_or(StackError::underflow("pop"))
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    /// [`StackError::Underflow`] if the stack is empty.
    pub fn peek(&self) -> StackResult<&T> {
        self.elements.last().ok_or(StackError::underflow("peek"))
    }

    /// Removes and returns the top element if `predicate` accepts it.
    ///
    /// Returns `None` when the stack is empty or the top is rejected; the
    /// stack is left untouched in both cases. This is the building block
    /// for monotonic-stack loops: `while let Some(top) = s.pop_if(..)`.
    pub fn pop_if(&mut self, predicate: impl FnOnce(&T) -> bool) -> Option<T> {
        if predicate(self.elements.last()?) {
            self.elements.pop()
        } else {
            None
        }
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Iterates from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the stack, returning its elements bottom to top.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes items in iteration order, so the last item ends on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack: [")?;
        for (i, value) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let s: Stack<i32> = Stack::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_push_pop_lifo() {
        let mut s = Stack::new();
        for v in 1..=5 {
            s.push(v);
            assert_eq!(s.peek(), Ok(&v));
        }
        for v in (1..=5).rev() {
            assert_eq!(s.pop(), Ok(v));
        }
        assert!(s.is_empty());
    }

    #[test]
    fn test_pop_empty_underflows() {
        let mut s: Stack<i32> = Stack::new();
        assert_eq!(s.pop(), Err(StackError::Underflow { op: "pop" }));
    }

    #[test]
    fn test_peek_empty_underflows() {
        let s: Stack<char> = Stack::new();
        assert_eq!(s.peek(), Err(StackError::Underflow { op: "peek" }));
    }

    #[test]
    fn test_pop_if() {
        let mut s: Stack<_> = [1, 5, 3].into_iter().collect();
        assert_eq!(s.pop_if(|&top| top > 4), None);
        assert_eq!(s.len(), 3);
        assert_eq!(s.pop_if(|&top| top == 3), Some(3));
        assert_eq!(s.pop_if(|&top| top > 4), Some(5));
        assert_eq!(s.peek(), Ok(&1));

        let mut empty: Stack<i32> = Stack::new();
        assert_eq!(empty.pop_if(|_| true), None);
    }

    #[test]
    fn test_duplicates_permitted() {
        let mut s = Stack::new();
        s.push(7);
        s.push(7);
        assert_eq!(s.len(), 2);
        assert_eq!(s.pop(), Ok(7));
        assert_eq!(s.pop(), Ok(7));
    }

    #[test]
    fn test_clear() {
        let mut s: Stack<_> = [10, 20, 30].into_iter().collect();
        assert_eq!(s.len(), 3);
        s.clear();
        assert!(s.is_empty());
        assert!(s.pop().is_err());
    }

    #[test]
    fn test_from_iter_last_on_top() {
        let s: Stack<_> = vec!['a', 'b', 'c'].into_iter().collect();
        assert_eq!(s.peek(), Ok(&'c'));
        assert_eq!(s.into_vec(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_display() {
        let mut s = Stack::new();
        assert_eq!(s.to_string(), "Stack: []");
        s.extend([1, 2, 3]);
        assert_eq!(s.to_string(), "Stack: [1, 2, 3]");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn pops_reverse_pushes(data in proptest::collection::vec(any::<i32>(), 0..64)) {
            let mut s = Stack::new();
            for &v in &data {
                s.push(v);
            }
            prop_assert_eq!(s.len(), data.len());

            let mut popped = Vec::with_capacity(data.len());
            while let Ok(v) = s.pop() {
                popped.push(v);
            }
            popped.reverse();
            prop_assert_eq!(popped, data);
        }

        #[test]
        fn interleaved_ops_match_vec_model(
            ops in proptest::collection::vec(proptest::option::of(0_i32..100), 0..100),
        ) {
            let mut s = Stack::new();
            let mut model: Vec<i32> = Vec::new();
            for op in ops {
                match op {
                    Some(v) => {
                        s.push(v);
                        model.push(v);
                    }
                    None => {
                        prop_assert_eq!(s.pop().ok(), model.pop());
                    }
                }
                prop_assert_eq!(s.peek().ok(), model.last());
                prop_assert_eq!(s.len(), model.len());
            }
        }
    }
}
