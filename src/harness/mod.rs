//! Case-table runner.
//!
//! A [`Suite`] is a named list of [`Case`]s, each naming an
//! [`Algorithm`], its input and the expected result. Suites come either
//! from [`builtin_suites`] or from TOML files:
//!
//! ```toml
//! name = "regressions"
//!
//! [[case]]
//! algorithm = "histogram"
//! name = "classic"
//! input = [2, 1, 5, 6, 2, 3]
//! expected = 10
//!
//! [[case]]
//! algorithm = "brackets"
//! text = "([)]"
//! expected = false
//! ```
//!
//! Running a suite never stops at the first mismatch; every case yields a
//! [`CaseOutcome`] and the [`Report`] tallies them.

mod builtin;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::asteroids::resolve_asteroid_collisions;
use crate::brackets::validate_brackets;
use crate::collections::MinStack;
use crate::error::{StackError, StackResult};
use crate::histogram::max_rectangle_area;
use crate::next_greater::next_greater_elements;
use crate::rain_water::{trapped_water_boundary_arrays, trapped_water_two_pointer};
use crate::subarray::sum_of_subarray_minimums;

pub use builtin::builtin_suites;

/// Algorithms a case can exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Brackets,
    MinStack,
    NextGreater,
    Histogram,
    RainWater,
    Asteroids,
    SubarrayMin,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Brackets,
        Algorithm::MinStack,
        Algorithm::NextGreater,
        Algorithm::Histogram,
        Algorithm::RainWater,
        Algorithm::Asteroids,
        Algorithm::SubarrayMin,
    ];

    /// Kebab-case name, as used in suite files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Brackets => "brackets",
            Algorithm::MinStack => "min-stack",
            Algorithm::NextGreater => "next-greater",
            Algorithm::Histogram => "histogram",
            Algorithm::RainWater => "rain-water",
            Algorithm::Asteroids => "asteroids",
            Algorithm::SubarrayMin => "subarray-min",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = StackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| StackError::UnknownAlgorithm(s.to_string()))
    }
}

/// A case result: boolean, scalar or sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    List(Vec<i64>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::List(items) => write!(f, "{items:?}"),
        }
    }
}

/// One row of a case table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub algorithm: Algorithm,
    #[serde(default)]
    pub name: String,
    /// Character input, used by [`Algorithm::Brackets`] only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub input: Vec<i64>,
    pub expected: Value,
}

impl Case {
    pub fn new(algorithm: Algorithm, name: &str, input: &[i64], expected: Value) -> Self {
        Self {
            algorithm,
            name: name.to_string(),
            text: None,
            input: input.to_vec(),
            expected,
        }
    }

    pub fn brackets(text: &str, expected: bool) -> Self {
        Self {
            algorithm: Algorithm::Brackets,
            name: format!("{text:?}"),
            text: Some(text.to_string()),
            input: Vec::new(),
            expected: Value::Bool(expected),
        }
    }

    /// Runs the case and compares against its expectation.
    ///
    /// # Errors
    /// [`StackError::InvalidCase`] when the input does not fit the
    /// algorithm (negative heights, missing bracket text).
    pub fn run(&self) -> StackResult<CaseOutcome> {
        let Evaluation { actual, note } =
            evaluate(self.algorithm, self.text.as_deref(), &self.input, &self.name)?;
        let passed = note.is_none() && actual == self.expected;
        Ok(CaseOutcome {
            name: self.name.clone(),
            algorithm: self.algorithm,
            expected: self.expected.clone(),
            actual,
            passed,
            note,
        })
    }
}

/// What an algorithm produced for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub actual: Value,
    /// Set when a cross-check inside the evaluation failed.
    pub note: Option<String>,
}

/// Runs `algorithm` on `text` (brackets) or `input` (everything else).
///
/// `label` only names the input in error messages.
///
/// # Errors
/// [`StackError::InvalidCase`] when the input does not fit the algorithm,
/// or when a numeric result cannot be represented as an `i64`.
pub fn evaluate(
    algorithm: Algorithm,
    text: Option<&str>,
    input: &[i64],
    label: &str,
) -> StackResult<Evaluation> {
    let mut note = None;
    let actual = match algorithm {
        Algorithm::Brackets => {
            let text = text
                .ok_or_else(|| StackError::invalid_case(label, "brackets case needs `text`"))?;
            Value::Bool(validate_brackets(text))
        }
        Algorithm::MinStack => {
            let mut stack = MinStack::new();
            let mut minima = Vec::with_capacity(input.len());
            for &v in input {
                stack.push(v);
                minima.push(stack.get_min()?);
            }
            Value::List(minima)
        }
        Algorithm::NextGreater => Value::List(next_greater_elements(input)),
        Algorithm::Histogram => scalar(max_rectangle_area(&non_negative(input, label)?), label)?,
        Algorithm::RainWater => {
            let heights = non_negative(input, label)?;
            let two_pointer = trapped_water_two_pointer(&heights);
            let boundary = trapped_water_boundary_arrays(&heights);
            if two_pointer != boundary {
                note = Some(format!(
                    "strategies disagree: two-pointer {two_pointer}, boundary arrays {boundary}"
                ));
            }
            scalar(two_pointer, label)?
        }
        Algorithm::Asteroids => Value::List(resolve_asteroid_collisions(input)),
        Algorithm::SubarrayMin => {
            let total = sum_of_subarray_minimums(&non_negative(input, label)?)
                .ok_or_else(|| StackError::invalid_case(label, "sum overflows u128"))?;
            scalar(total, label)?
        }
    };
    Ok(Evaluation { actual, note })
}

fn non_negative(input: &[i64], label: &str) -> StackResult<Vec<u64>> {
    input
        .iter()
        .map(|&v| {
            u64::try_from(v)
                .map_err(|_| StackError::invalid_case(label, format!("negative value {v}")))
        })
        .collect()
}

fn scalar(value: u128, label: &str) -> StackResult<Value> {
    i64::try_from(value)
        .map(Value::Int)
        .map_err(|_| StackError::invalid_case(label, format!("result {value} exceeds i64")))
}

/// Result of running one [`Case`].
#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    pub name: String,
    pub algorithm: Algorithm,
    pub expected: Value,
    pub actual: Value,
    pub passed: bool,
    pub note: Option<String>,
}

/// A named collection of cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    pub name: String,
    #[serde(default, rename = "case")]
    pub cases: Vec<Case>,
}

impl Suite {
    pub fn new(name: impl Into<String>, cases: Vec<Case>) -> Self {
        Self {
            name: name.into(),
            cases,
        }
    }

    /// Parses a suite from TOML.
    ///
    /// # Errors
    /// [`StackError::SuiteParse`] if the document is not a valid suite.
    pub fn from_toml_str(source: &str) -> StackResult<Self> {
        toml::from_str(source).map_err(|e| StackError::SuiteParse(e.to_string()))
    }

    /// Serializes the suite back to TOML.
    ///
    /// # Errors
    /// [`StackError::SuiteParse`] if serialization fails.
    pub fn to_toml_string(&self) -> StackResult<String> {
        toml::to_string(self).map_err(|e| StackError::SuiteParse(e.to_string()))
    }

    /// Keeps only the cases for `algorithm`.
    pub fn only(&self, algorithm: Algorithm) -> Suite {
        Suite {
            name: self.name.clone(),
            cases: self
                .cases
                .iter()
                .filter(|c| c.algorithm == algorithm)
                .cloned()
                .collect(),
        }
    }

    /// Runs every case.
    ///
    /// # Errors
    /// The first [`StackError::InvalidCase`] encountered; mismatches are
    /// reported in the [`Report`], not as errors.
    pub fn run(&self) -> StackResult<Report> {
        let outcomes = self
            .cases
            .iter()
            .map(Case::run)
            .collect::<StackResult<Vec<_>>>()?;
        Ok(Report {
            suite: self.name.clone(),
            outcomes,
        })
    }
}

/// Outcomes of one suite run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub suite: String,
    pub outcomes: Vec<CaseOutcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}
