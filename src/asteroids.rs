//! Asteroid collision simulation.
//!
//! Each asteroid is a signed size: the magnitude is its mass, the sign
//! its direction (positive moves right, negative moves left). Only a
//! left-mover meeting a right-mover ahead of it collides; the smaller one
//! is destroyed, and equal sizes destroy each other.
//!
//! # Algorithm
//!
//! Survivors are kept on a stack. An incoming left-mover repeatedly meets
//! the right-mover on top of the stack until it is destroyed or the top is
//! no longer moving right. Once nothing on the stack can reach it, it is
//! pushed and stays in the final output.
//!
//! Zero-sized entries are not asteroids in the strict sense; they are
//! treated as stationary and never collide.
//!
//! # Complexity
//! Time: O(n) amortized, Space: O(n)

use std::cmp::Ordering;

use crate::collections::Stack;

/// Outcome of a single right-mover / left-mover encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The right-mover already on the stack explodes; the incoming
    /// left-mover keeps going.
    StackedDestroyed,
    /// Equal sizes: both explode.
    BothDestroyed,
    /// The incoming left-mover explodes.
    IncomingDestroyed,
}

/// Resolves an encounter between `stacked` (moving right, `> 0`) and
/// `incoming` (moving left, `< 0`).
pub fn collide(stacked: i64, incoming: i64) -> Collision {
    match stacked.unsigned_abs().cmp(&incoming.unsigned_abs()) {
        Ordering::Less => Collision::StackedDestroyed,
        Ordering::Equal => Collision::BothDestroyed,
        Ordering::Greater => Collision::IncomingDestroyed,
    }
}

/// Returns the asteroids still flying after every collision has played
/// out, in their original left-to-right order.
///
/// # Examples
/// ```
/// use u_stackkit::asteroids::resolve_asteroid_collisions;
/// assert_eq!(resolve_asteroid_collisions(&[5, 10, -5]), vec![5, 10]);
/// assert_eq!(resolve_asteroid_collisions(&[8, -8]), Vec::<i64>::new());
/// assert_eq!(resolve_asteroid_collisions(&[10, 2, -5]), vec![10]);
/// ```
pub fn resolve_asteroid_collisions(asteroids: &[i64]) -> Vec<i64> {
    let mut survivors: Stack<i64> = Stack::with_capacity(asteroids.len());

    'incoming: for &asteroid in asteroids {
        if asteroid < 0 {
            while let Some(top) = survivors.pop_if(|&top| top > 0) {
                match collide(top, asteroid) {
                    Collision::StackedDestroyed => {}
                    Collision::BothDestroyed => continue 'incoming,
                    Collision::IncomingDestroyed => {
                        survivors.push(top);
                        continue 'incoming;
                    }
                }
            }
        }
        survivors.push(asteroid);
    }

    survivors.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_table() {
        let cases: [(&[i64], &[i64]); 11] = [
            (&[5, 10, -5], &[5, 10]),
            (&[8, -8], &[]),
            (&[10, 2, -5], &[10]),
            (&[-2, -1, 1, 2], &[-2, -1, 1, 2]),
            (&[1, -2, -2, -2], &[-2, -2, -2]),
            (&[1, 2, 3, -10], &[-10]),
            (&[], &[]),
            (&[3], &[3]),
            (&[-3], &[-3]),
            (&[2, -1, 1, -2], &[]),
            (&[4, 4, -4], &[4]),
        ];
        for (input, expected) in cases {
            assert_eq!(resolve_asteroid_collisions(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_same_direction_never_collide() {
        assert_eq!(resolve_asteroid_collisions(&[1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(resolve_asteroid_collisions(&[-1, -2, -3]), vec![-1, -2, -3]);
    }

    #[test]
    fn test_fully_destructive_chain() {
        assert_eq!(resolve_asteroid_collisions(&[1, 2, 3, -3, -2, -1]), Vec::<i64>::new());
    }

    #[test]
    fn test_collide() {
        assert_eq!(collide(3, -5), Collision::StackedDestroyed);
        assert_eq!(collide(5, -5), Collision::BothDestroyed);
        assert_eq!(collide(7, -5), Collision::IncomingDestroyed);
    }

    #[test]
    fn test_zero_is_stationary() {
        assert_eq!(resolve_asteroid_collisions(&[5, 0, -3]), vec![5, 0, -3]);
    }

    #[test]
    fn test_extreme_magnitudes() {
        assert_eq!(resolve_asteroid_collisions(&[i64::MAX, i64::MIN]), vec![i64::MIN]);
        assert_eq!(resolve_asteroid_collisions(&[i64::MAX, -i64::MAX]), Vec::<i64>::new());
    }
}
