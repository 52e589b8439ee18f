//! Error hierarchy for stack operations and the case-table harness.
//!
//! Only genuine misuse is an error. Unbalanced brackets, a missing next
//! greater element, zero trapped water and total asteroid annihilation are
//! ordinary return values and never surface here.

use thiserror::Error;

/// Root error type for all `u-stackkit` failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    /// `pop`, `peek`, `top` or `get_min` on an empty stack.
    #[error("stack underflow: {op} on empty stack")]
    Underflow { op: &'static str },

    /// Postfix token that is neither a number nor a supported operator.
    #[error("invalid postfix token: {0:?}")]
    InvalidToken(String),

    /// Operator encountered with fewer than two operands on the stack.
    #[error("operator '{operator}' needs two operands")]
    MissingOperands { operator: char },

    /// Postfix division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Postfix expression left more than one value on the stack.
    #[error("malformed expression: {remaining} values left on stack")]
    MalformedExpression { remaining: usize },

    /// Harness suite file could not be parsed.
    #[error("suite parse error: {0}")]
    SuiteParse(String),

    /// Harness algorithm name not recognised.
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// Harness case whose input or expectation does not fit its algorithm.
    #[error("invalid case {name:?}: {reason}")]
    InvalidCase { name: String, reason: String },
}

impl StackError {
    pub(crate) fn underflow(op: &'static str) -> Self {
        Self::Underflow { op }
    }

    pub(crate) fn invalid_case(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCase {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type StackResult<T> = Result<T, StackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_message_names_operation() {
        let err = StackError::underflow("pop");
        assert_eq!(err.to_string(), "stack underflow: pop on empty stack");
    }

    #[test]
    fn test_invalid_case_message() {
        let err = StackError::invalid_case("classic", "negative height");
        assert_eq!(
            err.to_string(),
            "invalid case \"classic\": negative height"
        );
    }
}
