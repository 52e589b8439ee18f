//! Sum of the minimum over every contiguous subarray.
//!
//! # Algorithm
//!
//! Value `arr[m]` is the minimum of exactly `(m - left) * (right - m)`
//! subarrays, where `left` is the previous index with a strictly smaller
//! value and `right` the next index with a smaller-or-equal value. The
//! asymmetric tie rule makes each subarray credit exactly one of several
//! equal minima.
//!
//! Both boundaries fall out of one left-to-right monotonic stack pass:
//! when `arr[i] <= arr[top]`, `i` is the right boundary of `top` and the
//! index beneath it is the left boundary. A virtual bar at `n` flushes
//! whatever is left.
//!
//! # Complexity
//! Time: O(n), Space: O(n)
//!
//! # Overflow
//!
//! The count of subarrays grows quadratically, so even a `u128` total can
//! be exceeded by long enough inputs of huge values. Sums are accumulated
//! with checked arithmetic and an overflow yields `None`.

use crate::collections::Stack;

/// Returns `Σ min(arr[i..=j])` over all `0 <= i <= j < n`, or `None` if
/// the sum does not fit in a `u128`.
///
/// # Examples
/// ```
/// use u_stackkit::subarray::sum_of_subarray_minimums;
/// assert_eq!(sum_of_subarray_minimums(&[3, 1, 2, 4]), Some(17));
/// assert_eq!(sum_of_subarray_minimums(&[]), Some(0));
/// ```
pub fn sum_of_subarray_minimums(values: &[u64]) -> Option<u128> {
    let n = values.len();
    let mut rising: Stack<usize> = Stack::with_capacity(n);
    let mut total: u128 = 0;

    for i in 0..=n {
        while let Some(mid) = rising.pop_if(|&mid| i == n || values[i] <= values[mid]) {
            let left_span = match rising.peek() {
                Ok(&left) => mid - left,
                Err(_) => mid + 1,
            };
            let right_span = i - mid;
            // both spans are at most n, so their product fits in u128
            let subarrays = left_span as u128 * right_span as u128;
            total = u128::from(values[mid])
                .checked_mul(subarrays)
                .and_then(|credit| total.checked_add(credit))?;
        }
        rising.push(i);
    }

    Some(total)
}

/// O(n²) reference that extends every start index with a running minimum.
pub fn sum_of_subarray_minimums_brute_force(values: &[u64]) -> Option<u128> {
    let mut total: u128 = 0;
    for start in 0..values.len() {
        let mut running = u64::MAX;
        for &v in &values[start..] {
            running = running.min(v);
            total = total.checked_add(u128::from(running))?;
        }
    }
    Some(total)
}
