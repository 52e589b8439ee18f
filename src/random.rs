//! Seeded random workloads for benchmarks and the harness.
//!
//! Provides seeded RNG construction, a Fisher-Yates shuffle, and
//! generators for histograms, asteroid fields and bracket sequences.
//!
//! # Reproducibility
//!
//! For reproducible workloads, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// # Examples
/// ```
/// use u_stackkit::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: u64 = rng.random_range(0..10);
/// assert!(x < 10);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// `len` bar heights drawn uniformly from `0..=max_height`.
///
/// # Examples
/// ```
/// use u_stackkit::random::{create_rng, random_heights};
/// let mut rng = create_rng(7);
/// let heights = random_heights(100, 9, &mut rng);
/// assert_eq!(heights.len(), 100);
/// assert!(heights.iter().all(|&h| h <= 9));
/// ```
pub fn random_heights<R: Rng>(len: usize, max_height: u64, rng: &mut R) -> Vec<u64> {
    (0..len).map(|_| rng.random_range(0..=max_height)).collect()
}

/// `len` non-zero asteroids with magnitude in `1..=max_magnitude` and a
/// uniformly random direction.
///
/// `max_magnitude` is clamped to at least 1.
pub fn random_asteroids<R: Rng>(len: usize, max_magnitude: i64, rng: &mut R) -> Vec<i64> {
    let max_magnitude = max_magnitude.max(1);
    (0..len)
        .map(|_| {
            let magnitude = rng.random_range(1..=max_magnitude);
            if rng.random_bool(0.5) {
                magnitude
            } else {
                -magnitude
            }
        })
        .collect()
}

/// A well-nested bracket sequence of `pairs` pairs.
///
/// Each step either opens a new bracket of a random kind or closes the
/// innermost open one, so the result always validates.
pub fn random_brackets<R: Rng>(pairs: usize, rng: &mut R) -> String {
    const KINDS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

    let mut text = String::with_capacity(pairs * 2);
    let mut open: Vec<char> = Vec::with_capacity(pairs);
    let mut remaining = pairs;

    while remaining > 0 || !open.is_empty() {
        let must_close = remaining == 0;
        let may_close = !open.is_empty();
        if must_close || (may_close && rng.random_bool(0.5)) {
            if let Some(close) = open.pop() {
                text.push(close);
            }
        } else {
            let (opener, closer) = KINDS[rng.random_range(0..KINDS.len())];
            text.push(opener);
            open.push(closer);
            remaining -= 1;
        }
    }

    text
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brackets::validate_brackets;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        assert_eq!(
            random_heights(20, 100, &mut rng1),
            random_heights(20, 100, &mut rng2)
        );
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut rng = create_rng(123);
        shuffle(&mut v, &mut rng);
        v.sort();
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_shuffle_empty() {
        let mut v: Vec<i32> = vec![];
        let mut rng = create_rng(0);
        shuffle(&mut v, &mut rng); // should not panic
    }

    #[test]
    fn test_random_asteroids_non_zero() {
        let mut rng = create_rng(9);
        let field = random_asteroids(500, 10, &mut rng);
        assert_eq!(field.len(), 500);
        assert!(field.iter().all(|&a| a != 0 && a.abs() <= 10));
        assert!(field.iter().any(|&a| a > 0));
        assert!(field.iter().any(|&a| a < 0));
    }

    #[test]
    fn test_random_asteroids_clamps_magnitude() {
        let mut rng = create_rng(9);
        let field = random_asteroids(20, 0, &mut rng);
        assert!(field.iter().all(|&a| a == 1 || a == -1));
    }

    #[test]
    fn test_random_brackets_valid() {
        let mut rng = create_rng(3);
        for pairs in [0, 1, 5, 50] {
            let text = random_brackets(pairs, &mut rng);
            assert_eq!(text.len(), pairs * 2);
            assert!(validate_brackets(&text), "{text}");
        }
    }
}
