//! Water trapped between elevation bars after uniform rainfall.
//!
//! Water above column `i` rises to `min(highest bar on its left,
//! highest bar on its right)`, inclusive of `i` itself. Nothing is held
//! beyond the first or last column, so fewer than three columns never
//! trap water.
//!
//! # Algorithms
//!
//! - **Boundary arrays** ([`trapped_water_boundary_arrays`]): precompute
//!   prefix maxima `left_max` and suffix maxima `right_max`, then sum the
//!   per-column depth. Time O(n), Space O(n).
//! - **Two pointers** ([`trapped_water_two_pointer`]): walk inwards from
//!   both ends, always advancing the side whose running maximum is lower.
//!   That side's water level is already decided by its own maximum,
//!   because the opposite side is known to hold something at least as
//!   tall. Time O(n), Space O(1).
//!
//! Both strategies return identical volumes on every input.
//!
//! Volumes are `u128`: each column holds at most `u64::MAX` units, so the
//! total over any slice that fits in memory cannot wrap.

/// Selects how [`trapped_water_volume_with`] computes the volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaterStrategy {
    /// Prefix/suffix maximum arrays.
    BoundaryArrays,
    /// Constant-space inward scan.
    #[default]
    TwoPointer,
}

/// Prefix and suffix running maxima of `heights`.
///
/// `left_max[i] = max(heights[0..=i])` (non-decreasing left to right),
/// `right_max[i] = max(heights[i..])` (non-decreasing right to left).
///
/// # Examples
/// ```
/// use u_stackkit::rain_water::boundary_arrays;
/// let (left, right) = boundary_arrays(&[2, 0, 3, 1]);
/// assert_eq!(left, vec![2, 2, 3, 3]);
/// assert_eq!(right, vec![3, 3, 3, 1]);
/// ```
pub fn boundary_arrays(heights: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let left_max: Vec<u64> = heights
        .iter()
        .scan(0, |running, &h| {
            *running = h.max(*running);
            Some(*running)
        })
        .collect();

    let mut right_max: Vec<u64> = heights
        .iter()
        .rev()
        .scan(0, |running, &h| {
            *running = h.max(*running);
            Some(*running)
        })
        .collect();
    right_max.reverse();

    (left_max, right_max)
}

/// Trapped volume via prefix/suffix maximum arrays.
pub fn trapped_water_boundary_arrays(heights: &[u64]) -> u128 {
    if heights.len() <= 2 {
        return 0;
    }
    let (left_max, right_max) = boundary_arrays(heights);
    heights
        .iter()
        .zip(left_max.iter().zip(&right_max))
        .map(|(&h, (&l, &r))| u128::from(l.min(r).saturating_sub(h)))
        .sum()
}

/// Trapped volume via the constant-space two-pointer scan.
pub fn trapped_water_two_pointer(heights: &[u64]) -> u128 {
    let n = heights.len();
    if n <= 2 {
        return 0;
    }

    let (mut left, mut right) = (0, n - 1);
    let (mut left_max, mut right_max) = (heights[left], heights[right]);
    let mut volume: u128 = 0;

    while left < right {
        if left_max < right_max {
            left += 1;
            left_max = left_max.max(heights[left]);
            volume += u128::from(left_max - heights[left]);
        } else {
            right -= 1;
            right_max = right_max.max(heights[right]);
            volume += u128::from(right_max - heights[right]);
        }
    }

    volume
}

/// Trapped volume using the given strategy.
pub fn trapped_water_volume_with(heights: &[u64], strategy: WaterStrategy) -> u128 {
    match strategy {
        WaterStrategy::BoundaryArrays => trapped_water_boundary_arrays(heights),
        WaterStrategy::TwoPointer => trapped_water_two_pointer(heights),
    }
}

/// Total trapped volume (two-pointer strategy).
///
/// # Examples
/// ```
/// use u_stackkit::rain_water::trapped_water_volume;
/// assert_eq!(trapped_water_volume(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]), 6);
/// assert_eq!(trapped_water_volume(&[1, 2, 3, 4, 5]), 0);
/// assert_eq!(trapped_water_volume(&[]), 0);
/// ```
pub fn trapped_water_volume(heights: &[u64]) -> u128 {
    trapped_water_volume_with(heights, WaterStrategy::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: [(&[u64], u128, &str); 23] = [
        (&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1], 6, "basic example"),
        (&[3, 0, 2, 0, 4], 7, "simple case"),
        (&[2, 0, 2], 2, "three elements"),
        (&[1, 2, 3, 4, 5], 0, "ascending"),
        (&[5, 4, 3, 2, 1], 0, "descending"),
        (&[], 0, "empty"),
        (&[1], 0, "single"),
        (&[1, 1], 0, "two equal"),
        (&[1, 2], 0, "two ascending"),
        (&[2, 1], 0, "two descending"),
        (&[3, 3, 3, 3, 3], 0, "all same height"),
        (&[0, 0, 0, 0, 0], 0, "all zeros"),
        (&[1, 2, 3, 2, 1], 0, "peak in middle"),
        (&[1, 3, 2, 3, 1], 1, "two peaks"),
        (&[3, 1, 2, 1, 3], 5, "valley in middle"),
        (&[4, 2, 0, 3, 2, 5], 9, "complex valley"),
        (&[3, 2, 1, 2, 3], 4, "edge peaks"),
        (&[1, 0, 2, 0, 1], 2, "small edge peaks"),
        (&[0, 2, 0, 1, 0, 3, 0, 1, 0, 2, 0], 10, "multiple valleys"),
        (
            &[
                6, 4, 2, 0, 3, 2, 0, 3, 1, 4, 5, 3, 2, 7, 5, 3, 0, 1, 2, 1, 3, 4, 6, 8, 8, 5, 6,
            ],
            82,
            "large complex case",
        ),
        (&[1, 0, 1, 0, 1, 0, 1], 3, "alternating"),
        (&[5, 0, 0, 0, 5], 15, "deep valley"),
        (&[0, 5, 0, 5, 0], 5, "multiple peaks"),
    ];

    #[test]
    fn test_case_table_boundary_arrays() {
        for (heights, expected, label) in CASES {
            assert_eq!(trapped_water_boundary_arrays(heights), expected, "{label}");
        }
    }

    #[test]
    fn test_case_table_two_pointer() {
        for (heights, expected, label) in CASES {
            assert_eq!(trapped_water_two_pointer(heights), expected, "{label}");
        }
    }

    #[test]
    fn test_strategy_dispatch() {
        let heights = [4, 2, 0, 3, 2, 5];
        assert_eq!(
            trapped_water_volume_with(&heights, WaterStrategy::BoundaryArrays),
            9
        );
        assert_eq!(
            trapped_water_volume_with(&heights, WaterStrategy::TwoPointer),
            9
        );
        assert_eq!(WaterStrategy::default(), WaterStrategy::TwoPointer);
    }

    #[test]
    fn test_extreme_walls_do_not_overflow() {
        let wall = i64::MAX as u64;
        let basin = [wall, 0, 0, 0, wall];
        let expected = 3 * u128::from(wall);
        assert_eq!(trapped_water_boundary_arrays(&basin), expected);
        assert_eq!(trapped_water_two_pointer(&basin), expected);

        let deepest = [u64::MAX, 0, 0, 0, 0, u64::MAX];
        assert_eq!(trapped_water_volume(&deepest), 4 * u128::from(u64::MAX));
        assert_eq!(
            trapped_water_volume_with(&deepest, WaterStrategy::BoundaryArrays),
            4 * u128::from(u64::MAX)
        );
    }

    #[test]
    fn test_boundary_arrays_empty() {
        let (left, right) = boundary_arrays(&[]);
        assert!(left.is_empty());
        assert!(right.is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn per_column(heights: &[u64]) -> u128 {
        (0..heights.len())
            .map(|i| {
                let left = heights[..=i].iter().copied().max().unwrap_or(0);
                let right = heights[i..].iter().copied().max().unwrap_or(0);
                u128::from(left.min(right) - heights[i])
            })
            .sum()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn strategies_agree(heights in proptest::collection::vec(0_u64..20, 0..80)) {
            prop_assert_eq!(
                trapped_water_boundary_arrays(&heights),
                trapped_water_two_pointer(&heights)
            );
        }

        #[test]
        fn matches_per_column_oracle(heights in proptest::collection::vec(0_u64..20, 0..40)) {
            prop_assert_eq!(trapped_water_volume(&heights), per_column(&heights));
        }

        #[test]
        fn boundary_arrays_are_monotone(heights in proptest::collection::vec(0_u64..100, 0..50)) {
            let (left, right) = boundary_arrays(&heights);
            prop_assert!(left.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(right.windows(2).all(|w| w[0] >= w[1]));
        }

        #[test]
        fn monotone_profiles_hold_nothing(mut heights in proptest::collection::vec(0_u64..100, 0..50)) {
            heights.sort_unstable();
            prop_assert_eq!(trapped_water_volume(&heights), 0);
            heights.reverse();
            prop_assert_eq!(trapped_water_volume(&heights), 0);
        }
    }
}
