//! # u-stackkit
//!
//! Stack-based array algorithms for the U-Engine ecosystem.
//!
//! Every algorithm here is a single deterministic pass (two for the
//! boundary-array water variant) over an in-memory slice, built on one
//! generic LIFO container. Nothing is retained between calls.
//!
//! ## Modules
//!
//! - [`collections`] — [`Stack`](collections::Stack) and
//!   [`MinStack`](collections::MinStack)
//! - [`brackets`] — bracket-sequence validation
//! - [`next_greater`] — next strictly greater element to the right
//! - [`histogram`] — largest rectangle in a histogram
//! - [`rain_water`] — trapped rain water (boundary arrays and two pointers)
//! - [`asteroids`] — asteroid collision resolution
//! - [`subarray`] — sum of subarray minimums
//! - [`stack_ops`] — string reversal, binary conversion, postfix
//!   evaluation, stack sorting
//! - [`random`] — seeded workload generators
//! - [`harness`] — case tables and TOML suites
//!
//! ## Design Philosophy
//!
//! - **Monotonic stacks**: each element pushed and popped at most once,
//!   giving amortized O(n) passes
//! - **Errors only for misuse**: underflow is an error; "no answer" is an
//!   ordinary value (`false`, `-1`/`None`, `0`, empty vector)
//! - **Property-based testing**: every fast algorithm is checked against a
//!   quadratic oracle via proptest

pub mod asteroids;
pub mod brackets;
pub mod collections;
pub mod error;
pub mod harness;
pub mod histogram;
pub mod next_greater;
pub mod rain_water;
pub mod random;
pub mod stack_ops;
pub mod subarray;

pub use error::{StackError, StackResult};
