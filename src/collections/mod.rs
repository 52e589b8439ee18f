//! Stack containers shared by the algorithm modules.
//!
//! - [`Stack`]: generic LIFO with underflow errors
//! - [`MinStack`]: stack with O(1) minimum query

mod min_stack;
mod stack;

pub use min_stack::{MinEntry, MinStack};
pub use stack::Stack;
