//! Next strictly greater element to the right.
//!
//! # Algorithm
//!
//! Scan right to left keeping a stack of candidate values. Before
//! answering for index `i`, pop every candidate `<= arr[i]`: `arr[i]` sits
//! further left and is at least as large, so those candidates can never
//! be the answer for any earlier index either. Whatever remains on top is
//! the answer for `i`; then `arr[i]` becomes a candidate itself.
//!
//! The candidate stack is strictly decreasing from bottom to top.
//!
//! # Complexity
//! Time: O(n) amortized (each value pushed and popped at most once),
//! Space: O(n)

use crate::collections::Stack;

/// Sentinel used by [`next_greater_elements`] for "no greater element".
pub const NO_GREATER: i64 = -1;

/// Returns, for every position, the nearest value to its right that is
/// strictly greater, or `None`.
///
/// Equal values do not count as greater.
///
/// # Examples
/// ```
/// use u_stackkit::next_greater::next_greater_options;
/// assert_eq!(
///     next_greater_options(&[4, -2, 5, -1, 3]),
///     vec![Some(5), Some(5), None, Some(3), None],
/// );
/// ```
pub fn next_greater_options<T: Ord + Copy>(values: &[T]) -> Vec<Option<T>> {
    let mut result = vec![None; values.len()];
    let mut candidates: Stack<T> = Stack::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate().rev() {
        while candidates.pop_if(|&top| top <= value).is_some() {}
        result[i] = candidates.peek().ok().copied();
        candidates.push(value);
    }

    result
}

/// Sentinel form of [`next_greater_options`]: positions without a greater
/// element hold [`NO_GREATER`] (`-1`).
///
/// The sentinel is only unambiguous for non-negative inputs. When the
/// input may contain `-1` itself, use [`next_greater_options`].
///
/// # Examples
/// ```
/// use u_stackkit::next_greater::next_greater_elements;
/// assert_eq!(next_greater_elements(&[2, 9, 1, 8, 3, 7]), vec![9, -1, 8, -1, 7, -1]);
/// assert_eq!(next_greater_elements(&[]), Vec::<i64>::new());
/// ```
pub fn next_greater_elements(values: &[i64]) -> Vec<i64> {
    next_greater_options(values)
        .into_iter()
        .map(|next| next.unwrap_or(NO_GREATER))
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn naive(values: &[i64]) -> Vec<Option<i64>> {
        (0..values.len())
            .map(|i| values[i + 1..].iter().copied().find(|&v| v > values[i]))
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn matches_quadratic_scan(values in proptest::collection::vec(-50_i64..50, 0..60)) {
            prop_assert_eq!(next_greater_options(&values), naive(&values));
        }

        #[test]
        fn result_is_greater_and_same_length(values in proptest::collection::vec(0_i64..1000, 0..60)) {
            let result = next_greater_elements(&values);
            prop_assert_eq!(result.len(), values.len());
            for (v, next) in values.iter().zip(&result) {
                prop_assert!(*next == NO_GREATER || next > v);
            }
        }
    }
}
