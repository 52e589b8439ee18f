//! Small utilities driven purely by stack discipline.
//!
//! - [`reverse_string`]: push every char, pop them back out
//! - [`decimal_to_binary`]: remainders of repeated halving, read top-down
//! - [`evaluate_postfix`]: reverse Polish notation over `+ - * /`
//! - [`sort_stack`]: insertion sort using one auxiliary stack

use crate::collections::Stack;
use crate::error::{StackError, StackResult};

/// Reverses `text` by Unicode scalar value.
///
/// # Examples
/// ```
/// use u_stackkit::stack_ops::reverse_string;
/// assert_eq!(reverse_string("stack"), "kcats");
/// ```
pub fn reverse_string(text: &str) -> String {
    let mut chars: Stack<char> = text.chars().collect();
    let mut reversed = String::with_capacity(text.len());
    while let Ok(c) = chars.pop() {
        reversed.push(c);
    }
    reversed
}

/// Binary representation of `value`, with a leading `-` for negatives.
///
/// # Examples
/// ```
/// use u_stackkit::stack_ops::decimal_to_binary;
/// assert_eq!(decimal_to_binary(10), "1010");
/// assert_eq!(decimal_to_binary(0), "0");
/// assert_eq!(decimal_to_binary(-42), "-101010");
/// ```
pub fn decimal_to_binary(value: i64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut bits = Stack::with_capacity(64);
    let mut rest = value.unsigned_abs();
    while rest > 0 {
        bits.push(if rest % 2 == 1 { '1' } else { '0' });
        rest /= 2;
    }

    let mut binary = String::with_capacity(bits.len() + 1);
    if value < 0 {
        binary.push('-');
    }
    while let Ok(bit) = bits.pop() {
        binary.push(bit);
    }
    binary
}

/// Evaluates a whitespace-separated postfix expression.
///
/// An empty expression evaluates to `0.0`.
///
/// # Errors
/// - [`StackError::InvalidToken`] for a token that is neither a number
///   nor one of `+ - * /`.
/// - [`StackError::MissingOperands`] when an operator finds fewer than two
///   values.
/// - [`StackError::DivisionByZero`] for `x 0 /`.
/// - [`StackError::MalformedExpression`] when more than one value remains.
///
/// # Examples
/// ```
/// use u_stackkit::stack_ops::evaluate_postfix;
/// assert_eq!(evaluate_postfix("10 5 2 * -"), Ok(0.0));
/// assert_eq!(evaluate_postfix("1 2 + 3 4 + *"), Ok(21.0));
/// assert!(evaluate_postfix("1 0 /").is_err());
/// ```
pub fn evaluate_postfix(expression: &str) -> StackResult<f64> {
    let mut operands: Stack<f64> = Stack::new();
    let mut seen_token = false;

    for token in expression.split_whitespace() {
        seen_token = true;
        let operator = match token {
            "+" | "-" | "*" | "/" => token.chars().next(),
            _ => None,
        };

        let Some(operator) = operator else {
            let value = token
                .parse::<f64>()
                .map_err(|_| StackError::InvalidToken(token.to_string()))?;
            operands.push(value);
            continue;
        };

        if operands.len() < 2 {
            return Err(StackError::MissingOperands { operator });
        }
        let rhs = operands.pop()?;
        let lhs = operands.pop()?;
        let value = match operator {
            '+' => lhs + rhs,
            '-' => lhs - rhs,
            '*' => lhs * rhs,
            _ => {
                if rhs == 0.0 {
                    return Err(StackError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        operands.push(value);
    }

    if !seen_token {
        return Ok(0.0);
    }
    if operands.len() != 1 {
        return Err(StackError::MalformedExpression {
            remaining: operands.len(),
        });
    }
    operands.pop()
}

/// Sorts `input` so that the largest element ends on top, using only
/// stack operations and one auxiliary stack.
///
/// # Complexity
/// Time: O(n²), Space: O(n)
///
/// # Examples
/// ```
/// use u_stackkit::collections::Stack;
/// use u_stackkit::stack_ops::sort_stack;
/// let unsorted: Stack<_> = [34, 3, 31, 98, 92, 23].into_iter().collect();
/// let sorted = sort_stack(unsorted);
/// assert_eq!(sorted.into_vec(), vec![3, 23, 31, 34, 92, 98]);
/// ```
pub fn sort_stack<T: Ord>(mut input: Stack<T>) -> Stack<T> {
    let mut sorted = Stack::with_capacity(input.len());
    while let Ok(value) = input.pop() {
        while let Some(moved) = sorted.pop_if(|top| *top > value) {
            input.push(moved);
        }
        sorted.push(value);
    }
    sorted
}
