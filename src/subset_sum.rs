use log::{debug, trace};

use crate::{
    error::{non_empty, InputError},
    span::Elem,
};

/// Longest input accepted: every subset must fit in a `u64` bitmask.
pub const MAX_LEN: usize = 63;

pub trait SubsetSum<T> {
    /// A non-empty subset of `seq`, by value and in input order, whose
    /// elements add up to exactly `target`. The empty subset never counts,
    /// even when `target` is zero.
    fn subset_sum(&self, seq: &[T], target: T) -> Result<Option<Vec<T>>, InputError>;
}

/// Tries every subset as a bitmask over the input positions, in increasing
/// numeric order, and returns the first whose sum hits the target.
/// O(n * 2^n) in the worst case.
pub struct Exhaustive;

impl<T: Elem> SubsetSum<T> for Exhaustive {
    fn subset_sum(&self, seq: &[T], target: T) -> Result<Option<Vec<T>>, InputError> {
        non_empty(seq)?;
        if seq.len() > MAX_LEN {
            return Err(InputError::TooLong {
                len: seq.len(),
                max: MAX_LEN,
            });
        }
        debug!("exhaustive subset sum, n={}, target={target:?}", seq.len());

        let (lowest, highest) = reachable(seq);
        if target < lowest || target > highest {
            trace!("target {target:?} outside reachable {lowest:?}..={highest:?}");
            return Ok(None);
        }

        let mut candidate = Vec::with_capacity(seq.len());
        for mask in 1..1u64 << seq.len() {
            candidate.clear();
            let mut sum = T::zero();
            for (bit, &item) in seq.iter().enumerate() {
                if mask >> bit & 1 == 1 {
                    candidate.push(item);
                    sum = sum + item;
                }
            }
            if sum == target {
                trace!("mask {mask:#b} hits target");
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }
}

/// The smallest and largest sums over the non-empty subsets of `seq`,
/// clamped to the bounds of `T`.
fn reachable<T: Elem>(seq: &[T]) -> (T, T) {
    let negatives = seq.iter().filter(|item| item.is_negative());
    let positives = seq.iter().filter(|item| item.is_positive());
    let lowest = if negatives.clone().next().is_some() {
        negatives.fold(T::zero(), |acc, &item| acc.saturating_add(item))
    } else {
        seq.iter().copied().fold(T::max_value(), T::min)
    };
    let highest = if positives.clone().next().is_some() {
        positives.fold(T::zero(), |acc, &item| acc.saturating_add(item))
    } else {
        seq.iter().copied().fold(T::min_value(), T::max)
    };
    (lowest, highest)
}

pub fn subset_sum_exhaustive<T: Elem>(
    seq: &[T],
    target: T,
) -> Result<Option<Vec<T>>, InputError> {
    Exhaustive.subset_sum(seq, target)
}

#[cfg(all(test, feature = "subset_sum"))]
mod tests {
    use super::*;
    use crate::rand::*;
    use std::time::Instant;

    type Int = i32;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Whether some non-empty subset of `items` sums to `target`, by
    /// include/exclude recursion.
    fn naive_has_subset(items: &[Int], target: Int) -> bool {
        match items {
            [] => false,
            [first, rest @ ..] => {
                *first == target
                    || naive_has_subset(rest, target - first)
                    || naive_has_subset(rest, target)
            }
        }
    }

    /// `subset` can be drawn from `seq` without reusing a position.
    fn is_sub_multiset(subset: &[Int], seq: &[Int]) -> bool {
        let mut remaining = seq.to_vec();
        subset.iter().all(|item| {
            remaining
                .iter()
                .position(|other| other == item)
                .map(|i| remaining.swap_remove(i))
                .is_some()
        })
    }

    fn check(seq: &[Int], target: Int) {
        let found = Exhaustive.subset_sum(seq, target).unwrap();
        match &found {
            Some(subset) => {
                assert!(!subset.is_empty());
                assert_eq!(subset.iter().sum::<Int>(), target);
                assert!(is_sub_multiset(subset, seq), "{subset:?} not in {seq:?}");
            }
            None => assert!(!naive_has_subset(seq, target), "{seq:?} {target}"),
        }
        assert_eq!(found.is_some(), naive_has_subset(seq, target), "{seq:?} {target}");
    }

    #[test]
    fn first_mask_wins() {
        init();
        assert_eq!(
            Exhaustive.subset_sum(&[1, 2, 3, 4], 6).unwrap(),
            Some(vec![1, 2, 3])
        );
        assert_eq!(
            Exhaustive.subset_sum(&[1, 2, 3, 4], 7).unwrap(),
            Some(vec![1, 2, 4])
        );
        assert_eq!(Exhaustive.subset_sum(&[4, 4, 1], 4).unwrap(), Some(vec![4]));
        assert_eq!(
            Exhaustive.subset_sum(&[4, 4, 1], 8).unwrap(),
            Some(vec![4, 4])
        );
        assert_eq!(
            Exhaustive.subset_sum(&[-3, 7, 1, -2], 5).unwrap(),
            Some(vec![-3, 7, 1])
        );
    }

    #[test]
    fn not_found() {
        assert_eq!(Exhaustive.subset_sum(&[1, 2], 10).unwrap(), None);
        assert_eq!(Exhaustive.subset_sum(&[2, 4, -6], 1).unwrap(), None);
        assert_eq!(Exhaustive.subset_sum(&[-1, -2], 1).unwrap(), None);
    }

    #[test]
    fn zero_target_needs_non_empty() {
        assert_eq!(Exhaustive.subset_sum(&[5], 0).unwrap(), None);
        assert_eq!(Exhaustive.subset_sum(&[0], 0).unwrap(), Some(vec![0]));
        assert_eq!(Exhaustive.subset_sum(&[3, 0], 0).unwrap(), Some(vec![0]));
        assert_eq!(
            Exhaustive.subset_sum(&[1, -1], 0).unwrap(),
            Some(vec![1, -1])
        );
        assert_eq!(Exhaustive.subset_sum(&[-4, -1], 0).unwrap(), None);
    }

    #[test]
    fn sixty_three_ones() {
        let ones = [1; MAX_LEN];
        let now = Instant::now();
        assert_eq!(Exhaustive.subset_sum(&ones, 0).unwrap(), None);
        assert_eq!(Exhaustive.subset_sum(&ones, 64).unwrap(), None);
        println!("{:?}", now.elapsed());
        assert_eq!(Exhaustive.subset_sum(&ones, 1).unwrap(), Some(vec![1]));
        assert_eq!(
            Exhaustive.subset_sum(&ones, 3).unwrap(),
            Some(vec![1, 1, 1])
        );
    }

    #[test]
    fn preconditions() {
        assert_eq!(Exhaustive.subset_sum(&[], 0), Err(InputError::Empty));
        assert_eq!(
            Exhaustive.subset_sum(&[1; 64], 0),
            Err(InputError::TooLong { len: 64, max: 63 })
        );
        assert_eq!(subset_sum_exhaustive::<i64>(&[], 3), Err(InputError::Empty));
        assert_eq!(
            subset_sum_exhaustive(&[0i64; 100], 3),
            Err(InputError::TooLong { len: 100, max: 63 })
        );
    }

    #[test]
    fn reachable_bounds() {
        assert_eq!(reachable(&[3, -2, 5, -4]), (-6, 8));
        assert_eq!(reachable(&[3, 1, 5]), (1, 9));
        assert_eq!(reachable(&[-3, -1, -5]), (-9, -1));
        assert_eq!(reachable(&[0, 0]), (0, 0));
        assert_eq!(reachable(&[0, 2]), (0, 2));
        assert_eq!(reachable(&[Int::MAX, Int::MAX]), (Int::MAX, Int::MAX));
        assert_eq!(reachable(&[Int::MIN, Int::MIN, 1]), (Int::MIN, 1));
    }

    #[test]
    fn extreme_values_found_early() {
        assert_eq!(
            Exhaustive.subset_sum(&[Int::MAX, Int::MAX], Int::MAX).unwrap(),
            Some(vec![Int::MAX])
        );
        assert_eq!(
            Exhaustive.subset_sum(&[Int::MIN, Int::MIN], Int::MIN).unwrap(),
            Some(vec![Int::MIN])
        );
        assert_eq!(
            Exhaustive.subset_sum(&[Int::MAX, 1, Int::MAX], 1).unwrap(),
            Some(vec![1])
        );
    }

    #[test]
    fn agrees_with_naive_search() {
        init();
        for _ in 0..20 {
            let seq = ten_of(|| range(-20..=20));
            for target in -30..=30 {
                check(&seq, target);
            }
        }
        for len in 1..=12 {
            let seq = vec_of(len, || range(-9..=9));
            check(&seq, range(-20..=20));
            check(&seq, seq.iter().sum());
        }
    }

    #[test]
    fn full_enumeration() {
        let seq = vec_of(20, || 2 * range(-50..=50));
        let now = Instant::now();
        assert_eq!(subset_sum_exhaustive(&seq, 1).unwrap(), None);
        println!("n=20 {:?}", now.elapsed());
    }
}
