//! Largest rectangle under a histogram of unit-width bars.
//!
//! # Algorithm
//!
//! Keep a stack of bar indices whose heights are non-decreasing from
//! bottom to top. When bar `i` is lower than the bar on top, that top bar
//! has just found its right boundary (`i`), and its left boundary is the
//! index now beneath it on the stack (or the start of the histogram when
//! the stack empties). Its widest rectangle is therefore fully known and
//! is measured exactly once, at the moment it is popped. Bars still on
//! the stack after the scan extend to the right edge `n`.
//!
//! Reference: the "all nearest smaller values" technique,
//! Berkman, Schieber & Vishkin (1993), *J. Algorithms* 14(3).
//!
//! # Variants
//!
//! - [`max_rectangle_area`]: explicit drain phase after the scan.
//! - [`max_rectangle_area_sentinel`]: pads both ends with zero-height bars
//!   so that the left sentinel is never popped and the right sentinel
//!   flushes the stack, removing both special cases.
//! - [`max_rectangle_area_brute_force`]: O(n²) oracle used for
//!   cross-checking.
//!
//! # Overflow
//!
//! Areas are `u128`. A bar height is at most `u64::MAX` and a width at
//! most the slice length, so the product of the two always fits.

use crate::collections::Stack;

/// Width of the rectangle spanned by a bar popped at right boundary
/// `right`, given the index left on the stack beneath it.
fn span(right: usize, left: Option<usize>) -> u128 {
    match left {
        Some(left) => (right - left - 1) as u128,
        None => right as u128,
    }
}

fn area(height: u64, width: u128) -> u128 {
    u128::from(height) * width
}

/// Returns the area of the largest axis-aligned rectangle that fits under
/// the histogram `heights`.
///
/// # Complexity
/// Time: O(n) (each index pushed and popped exactly once), Space: O(n)
///
/// # Examples
/// ```
/// use u_stackkit::histogram::max_rectangle_area;
/// assert_eq!(max_rectangle_area(&[2, 1, 5, 6, 2, 3]), 10);
/// assert_eq!(max_rectangle_area(&[3, 3, 3, 3, 3]), 15);
/// assert_eq!(max_rectangle_area(&[]), 0);
/// assert_eq!(max_rectangle_area(&[u64::MAX; 2]), 2 * u128::from(u64::MAX));
/// ```
pub fn max_rectangle_area(heights: &[u64]) -> u128 {
    let n = heights.len();
    let mut rising: Stack<usize> = Stack::with_capacity(n);
    let mut best = 0;

    for (i, &height) in heights.iter().enumerate() {
        while let Some(top) = rising.pop_if(|&top| height < heights[top]) {
            let width = span(i, rising.peek().ok().copied());
            best = best.max(area(heights[top], width));
        }
        rising.push(i);
    }

    while let Ok(top) = rising.pop() {
        let width = span(n, rising.peek().ok().copied());
        best = best.max(area(heights[top], width));
    }

    best
}

/// Sentinel-padded variant of [`max_rectangle_area`].
///
/// A zero-height bar on each side guarantees the stack is never empty
/// while scanning (nothing is lower than the left sentinel) and is fully
/// drained by the right sentinel, so a single loop suffices.
///
/// # Complexity
/// Time: O(n), Space: O(n) (padded copy plus stack)
pub fn max_rectangle_area_sentinel(heights: &[u64]) -> u128 {
    if heights.is_empty() {
        return 0;
    }

    let mut padded = Vec::with_capacity(heights.len() + 2);
    padded.push(0);
    padded.extend_from_slice(heights);
    padded.push(0);

    let mut rising: Stack<usize> = Stack::with_capacity(padded.len());
    rising.push(0);
    let mut best = 0;

    for (i, &height) in padded.iter().enumerate().skip(1) {
        while let Some(top) = rising.pop_if(|&top| height < padded[top]) {
            // the left sentinel is never popped, so a lower bound always exists
            let left = rising.peek().copied().unwrap_or(0);
            best = best.max(area(padded[top], (i - left - 1) as u128));
        }
        rising.push(i);
    }

    best
}

/// O(n²) reference: for every start, widen to the right while tracking
/// the running minimum height.
pub fn max_rectangle_area_brute_force(heights: &[u64]) -> u128 {
    let mut best = 0;
    for start in 0..heights.len() {
        let mut min_height = heights[start];
        for (offset, &height) in heights[start..].iter().enumerate() {
            min_height = min_height.min(height);
            best = best.max(area(min_height, offset as u128 + 1));
        }
    }
    best
}
